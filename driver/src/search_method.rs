use std::io::{self, BufRead, Write};
use quicc::types::constants::{
    MAX_ARITHMETIC_TARGETS, MAX_GEOMETRIC_ATTEMPTS, MAX_MULTI_TARGETS, MIN_GEOMETRIC_ATTEMPTS, MIN_MULTI_TARGETS,
};
use quicc::{SearchMethod, TargetSequence};
use crate::interface::SearchInterface;

/// Prompts for the method's parameter (if any) and builds its target sequence
pub fn generate<R: BufRead, W: Write>(
    interface: &mut SearchInterface<R, W>,
    method: SearchMethod,
) -> io::Result<TargetSequence> {
    let sequence = match method {
        SearchMethod::Single => Ok(TargetSequence::single()),
        SearchMethod::Multiple => {
            let num_targets = interface.read_int(
                "Number of search targets?",
                MIN_MULTI_TARGETS..=MAX_MULTI_TARGETS,
            )?;
            TargetSequence::multiple(num_targets)
        }
        SearchMethod::Arithmetic => {
            let max_targets = interface.read_int(
                "Max number of search targets?",
                MIN_MULTI_TARGETS..=MAX_ARITHMETIC_TARGETS,
            )?;
            TargetSequence::arithmetic(max_targets)
        }
        SearchMethod::Geometric => {
            let attempts = interface.read_int(
                "Number of search attempts?",
                MIN_GEOMETRIC_ATTEMPTS..=MAX_GEOMETRIC_ATTEMPTS,
            )?;
            TargetSequence::geometric(attempts)
        }
    };
    // The read bounds match the constructors' bounds
    sequence.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Asks for a search method, then its parameters
pub fn choose_and_generate<R: BufRead, W: Write>(
    interface: &mut SearchInterface<R, W>,
) -> io::Result<TargetSequence> {
    let labels: Vec<&str> = SearchMethod::ALL.iter().map(|method| method.label()).collect();
    let chosen = interface.choose("Choose a search method:", &labels)?;
    let method = SearchMethod::from_label(chosen)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "unknown search method"))?;
    generate(interface, method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(method: SearchMethod, script: &str) -> TargetSequence {
        let mut interface = SearchInterface::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        generate(&mut interface, method).unwrap()
    }

    #[test]
    fn test_single_needs_no_input() {
        assert_eq!(run(SearchMethod::Single, "").as_slice(), &[1]);
    }

    #[test]
    fn test_multiple_rejects_one() {
        assert_eq!(run(SearchMethod::Multiple, "1\n5\n").as_slice(), &[5]);
    }

    #[test]
    fn test_oversized_target_counts_are_reprompted() {
        let script = format!("18446744073709551615\n{}\n6\n", MAX_ARITHMETIC_TARGETS + 1);
        let mut interface = SearchInterface::new(Cursor::new(script.into_bytes()), Vec::new());
        let sequence = generate(&mut interface, SearchMethod::Arithmetic).unwrap();
        assert_eq!(sequence.as_slice(), &[1, 2, 3, 4, 5, 6]);
        let out = String::from_utf8(interface.into_output()).unwrap();
        assert_eq!(out.matches("Invalid input").count(), 2);

        let script = format!("{}\n{}\n", MAX_MULTI_TARGETS + 1, MAX_MULTI_TARGETS);
        assert_eq!(run(SearchMethod::Multiple, &script).as_slice(), &[MAX_MULTI_TARGETS]);
    }

    #[test]
    fn test_arithmetic_counts_up() {
        assert_eq!(run(SearchMethod::Arithmetic, "4\n").as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_geometric_bounds() {
        assert_eq!(run(SearchMethod::Geometric, "1\n32\n3\n").as_slice(), &[1, 2, 4]);
        let longest = run(SearchMethod::Geometric, "31\n");
        assert_eq!(longest.len(), 31);
        assert_eq!(longest.as_slice().last(), Some(&(1u64 << 30)));
    }

    #[test]
    fn test_method_menu() {
        let mut interface = SearchInterface::new(Cursor::new(b"2\n3\n".to_vec()), Vec::new());
        let sequence = choose_and_generate(&mut interface).unwrap();
        assert_eq!(sequence.as_slice(), &[3]);
        let out = String::from_utf8(interface.into_output()).unwrap();
        assert!(out.contains("Choose a search method:\n [1] single\n [2] multiple\n [3] arithmetic\n [4] geometric"));
        assert!(out.contains("Number of search targets?"));
    }
}

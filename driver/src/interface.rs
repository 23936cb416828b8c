//! Line-oriented console surface: validated reads, numbered option menus,
//! banner and help text.

use std::io::{self, BufRead, Write};
use std::ops::RangeBounds;
use std::str::FromStr;
use num_bigint::BigUint;
use quicc::types::parse_hex_digest;

const BANNER: &str = "
         . | .
     .    .|  /  .
   .       | /     .
  .        |/        .
  ---------+---------  Welcome to QuICC. Use this app to analyze quantum
   .     ./|       .   preimage attacks on certain crypto functions.
     .   /.|     .
        /. | .
       /   |
";

const HELP: &str = "
QuICC implements popular hash functions as quantum oracles. Given a
specific output to an oracle, a sufficiently advanced quantum computer
could search for a matching input faster than a classical one. This app
estimates the quantum computing resources required to run such a
program. Operations that are small enough can also be fully simulated.

Main menu options
-----------------
 analyze:
     Run a search with the resource estimator. Reports metrics about the
     program's resource requirements without conducting the search.
 simulate:
     Run a search with the full simulator. Only small operations are
     offered, since every input of the search space is held in memory.
 help:
     Print this message.
 quit:
     Quit the application.

Search parameters
-----------------
 Search method:
     How many matching inputs are expected for the given output, i.e.
     the number of search targets assumed by each search attempt.
      - single: 1 search target expected
      - multiple: User enters number of search targets expected
      - arithmetic: Starts with 1 target, then adds 1 after each failed
         search until the max number entered by the user is reached
      - geometric: Starts with 1 target, then doubles after each failed
         search for the number of attempts entered by the user
 Search space size:
     How many bits in the input to search over. Computational complexity
     increases exponentially with this parameter.
 Known output to match:
     Hex value of the digest to search a matching input for. Must fit in
     the output width of the selected operation.
";

// ------------------------------------------------------------------------------------------------
// Main Menu
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    Analyze,
    Simulate,
    Help,
    Quit,
}

impl MainMenuOption {
    pub const ALL: [MainMenuOption; 4] = [
        MainMenuOption::Analyze,
        MainMenuOption::Simulate,
        MainMenuOption::Help,
        MainMenuOption::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainMenuOption::Analyze => "analyze",
            MainMenuOption::Simulate => "simulate",
            MainMenuOption::Help => "help",
            MainMenuOption::Quit => "quit",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.label() == input.trim())
    }
}

// ------------------------------------------------------------------------------------------------
// Search Interface
// ------------------------------------------------------------------------------------------------

/// Console reader/writer pair. Every read re-prompts on invalid input and
/// only returns an error when the console itself fails or is closed.
pub struct SearchInterface<R, W> {
    input: R,
    output: W,
}

impl SearchInterface<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> SearchInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn show_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", BANNER)
    }

    pub fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", HELP)
    }

    /// Prints `prompt` and `> `, then reads one line. A closed console is `UnexpectedEof`.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "\n{}", prompt)?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "console closed"));
        }
        Ok(line)
    }

    fn invalid_input(&mut self) -> io::Result<()> {
        writeln!(self.output, "Invalid input")
    }

    /// Reads a base-10 integer inside `range`, re-prompting until one is entered
    pub fn read_int<T, B>(&mut self, prompt: &str, range: B) -> io::Result<T>
    where
        T: FromStr + PartialOrd,
        B: RangeBounds<T>,
    {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.trim().parse::<T>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => self.invalid_input()?,
            }
        }
    }

    /// Reads a hex integer no larger than `max`. An empty line reads as zero.
    /// Only the line ending is stripped; any other whitespace is invalid.
    pub fn read_hex_integer(&mut self, prompt: &str, max: &BigUint) -> io::Result<BigUint> {
        loop {
            let line = self.prompt_line(prompt)?;
            let digits = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            match parse_hex_digest(digits) {
                Some(value) if &value <= max => return Ok(value),
                _ => self.invalid_input()?,
            }
        }
    }

    /// Shows `options` as a numbered list under `prompt` and returns the chosen label
    pub fn choose<'a>(&mut self, prompt: &str, options: &[&'a str]) -> io::Result<&'a str> {
        if options.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "menu has no options"));
        }
        let mut menu = String::from(prompt);
        for (i, option) in options.iter().enumerate() {
            menu.push_str(&format!("\n [{}] {}", i + 1, option));
        }

        let selection: usize = self.read_int(&menu, 1..=options.len())?;
        let chosen = options[selection - 1];
        writeln!(self.output, "{}", chosen)?;
        Ok(chosen)
    }

    pub fn choose_main_menu(&mut self) -> io::Result<MainMenuOption> {
        let labels: Vec<&str> = MainMenuOption::ALL.iter().map(|option| option.label()).collect();
        let chosen = self.choose("Main menu:", &labels)?;
        MainMenuOption::from_input(chosen)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "unknown menu option"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn interface(script: &str) -> SearchInterface<Cursor<Vec<u8>>, Vec<u8>> {
        SearchInterface::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(interface: SearchInterface<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(interface.into_output()).unwrap()
    }

    #[test]
    fn test_read_int_retries_until_in_range() {
        let mut console = interface("abc\n0\n63\n 12 \n");
        let value: u32 = console.read_int("Width?", 1..=62).unwrap();
        assert_eq!(value, 12);
        let out = transcript(console);
        assert_eq!(out.matches("Invalid input").count(), 3);
        assert!(out.starts_with("\nWidth?\n> "));
    }

    #[test]
    fn test_read_int_open_upper_bound() {
        let mut console = interface("1\n1000000\n");
        let value: u64 = console.read_int("Targets?", 2..).unwrap();
        assert_eq!(value, 1_000_000);
    }

    #[test]
    fn test_read_int_eof_is_error() {
        let mut console = interface("x\n");
        let result: io::Result<u32> = console.read_int("Width?", 1..=62);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_hex_bounds() {
        let max = BigUint::from(0xFFu32);
        let mut console = interface("100\n-1\n0x10\nzz\nfF\n");
        assert_eq!(console.read_hex_integer("Output?", &max).unwrap(), max);
        assert_eq!(transcript(console).matches("Invalid input").count(), 4);
    }

    #[test]
    fn test_read_hex_rejects_surrounding_spaces() {
        let max = BigUint::from(0xFFu32);
        let mut console = interface(" FF\nFF \n\tFF\nFF\r\n");
        assert_eq!(console.read_hex_integer("Output?", &max).unwrap(), max);
        assert_eq!(transcript(console).matches("Invalid input").count(), 3);
    }

    #[test]
    fn test_read_hex_empty_line_is_zero() {
        let mut console = interface("\n");
        let value = console.read_hex_integer("Output?", &BigUint::from(0xFFu32)).unwrap();
        assert_eq!(value, BigUint::from(0u32));
    }

    #[test]
    fn test_choose_renders_and_echoes() {
        let mut console = interface("3\n2\n");
        let chosen = console.choose("Pick:", &["a", "b"]).unwrap();
        assert_eq!(chosen, "b");
        let out = transcript(console);
        assert!(out.contains("\nPick:\n [1] a\n [2] b\n> "));
        assert!(out.ends_with("> b\n"));
    }

    #[test]
    fn test_choose_rejects_empty_menu() {
        let mut console = interface("1\n");
        let result = console.choose("Pick:", &[]);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_main_menu_order() {
        let mut console = interface("4\n");
        assert_eq!(console.choose_main_menu().unwrap(), MainMenuOption::Quit);
        assert!(transcript(console).contains(" [1] analyze\n [2] simulate\n [3] help\n [4] quit"));
    }
}

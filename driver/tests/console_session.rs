use std::io::Cursor;
use driver::{Config, DriverError, SearchDriver, SearchInterface};
use num_bigint::BigUint;
use quicc::backend::BackendError;
use quicc::oracle::{encode_input, CrcOracle, Oracle};

fn quiet_config() -> Config {
    let mut config = Config::default();
    config.display.banner = false;
    config.display.progress = false;
    config.simulator.check_memory = false;
    config
}

/// Feeds `script` to a fresh driver and returns its result and everything it printed
async fn run_session(script: &str, config: Config) -> (Result<(), DriverError>, String) {
    let interface = SearchInterface::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut driver = SearchDriver::new(interface, config);
    let result = driver.run().await;
    let output = String::from_utf8(driver.into_interface().into_output()).unwrap();
    (result, output)
}

#[tokio::test]
async fn test_analyze_crc8_single_target() {
    println!("\n[TEST]   === Starting test_analyze_crc8_single_target ===");
    // analyze, CRC-8, single, 8 bits, output AB, quit
    let (result, output) = run_session("1\n1\n1\n8\nAB\n4\n", quiet_config()).await;
    result.unwrap();

    assert!(output.contains("Choose an operation to analyze:\n [1] CRC-8"));
    assert!(output.contains("Enter size of search space in bits (<63):"));
    assert!(output.contains("Enter known output for which to find a matching input (hex):"));
    assert!(output.contains("\nEstimating resources...Done\n"));
    assert!(output.contains("\nRuntime: "));
    assert!(output.contains("\nResults\n--------------------\nMetric\tSum\tMax\n"));
    assert!(output.contains("\nAttempts\t1\t1\n"));
    assert!(output.contains("\nGroverIterations\t12\t12\n"));
    assert!(!output.contains("Search result"));
    assert!(!output.contains("Output length?"));
    assert!(output.ends_with("Exiting...\n"));
    println!("[TEST]   === Test completed successfully ===\n");
}

#[tokio::test]
async fn test_simulate_crc16_geometric() {
    println!("\n[TEST]   === Starting test_simulate_crc16_geometric ===");
    let mut config = quiet_config();
    config.simulator.seed = Some(2024);
    // simulate, CRC-16, geometric with 3 attempts, 10 bits, output 00FF, quit
    let (result, output) = run_session("2\n2\n4\n3\n10\n00FF\n4\n", config).await;
    result.unwrap();

    assert!(output.contains("Choose an operation to simulate:\n [1] CRC-8\n [2] CRC-16\n> "));
    assert!(output.contains("Number of search attempts?"));
    assert!(output.contains("\nSimulating quantum program...Done\n"));

    let target = BigUint::from(0xFFu32);
    match output.split("\nSearch result (hex): ").nth(1) {
        Some(rest) => {
            let hex = rest.lines().next().unwrap();
            assert_eq!(hex, hex.to_uppercase());
            let found = u64::from_str_radix(hex, 16).unwrap();
            println!("[TEST]   Found preimage {:X}", found);
            assert!(found < 1 << 10);
            assert_eq!(CrcOracle::Crc16.evaluate(&encode_input(found, 10)), target);
        }
        None => assert!(output.contains("\nSearch failed.\n")),
    }
    println!("[TEST]   === Test completed successfully ===\n");
}

#[tokio::test]
async fn test_invalid_entries_are_reprompted() {
    // Bad menu choice, bad width, out-of-range hex, then a valid run
    let script = "9\n1\n1\n1\n0\n63\nabc\n8\n1FF\nzz\nff\n4\n";
    let (result, output) = run_session(script, quiet_config()).await;
    result.unwrap();
    assert_eq!(output.matches("Invalid input").count(), 6);
    assert!(output.contains("GroverIterations\t12\t12"));
}

#[tokio::test]
async fn test_shake_asks_for_output_length() {
    // analyze, SHAKE128, single, 8 bits, length 0 (rejected) then 8, output 100 (rejected) then FF
    let script = "1\n16\n1\n8\n0\n8\n100\nFF\n4\n";
    let (result, output) = run_session(script, quiet_config()).await;
    result.unwrap();
    assert!(output.contains("> SHAKE128\n"));
    assert!(output.contains("Output length?"));
    assert_eq!(output.matches("Invalid input").count(), 2);
    // Search register, Keccak state, digest register and the phase qubit
    assert!(output.contains(&format!("\nQubitCount\t{}\t{}\n", 8 + 1600 + 8 + 1, 8 + 1600 + 8 + 1)));
}

#[tokio::test]
async fn test_arithmetic_sequence_in_report() {
    // analyze, CRC-32, arithmetic up to 5, 16 bits, output DEADBEEF
    let (result, output) = run_session("1\n3\n3\n5\n16\nDEADBEEF\n4\n", quiet_config()).await;
    result.unwrap();
    assert!(output.contains("Max number of search targets?"));
    assert!(output.contains("\nAttempts\t5\t1\n"));
    assert!(output.contains("\nMeasurements\t80\t16\n"));
}

#[tokio::test]
async fn test_help_then_closed_console() {
    let (result, output) = run_session("3\n", quiet_config()).await;
    result.unwrap();
    assert!(output.contains("Main menu options"));
    assert!(output.contains("Search parameters"));
    assert!(output.ends_with("Exiting...\n"));
}

#[tokio::test]
async fn test_banner_shown_once() {
    let mut config = quiet_config();
    config.display.banner = true;
    let (result, output) = run_session("3\n4\n", config).await;
    result.unwrap();
    assert_eq!(output.matches("Welcome to QuICC").count(), 1);
}

#[tokio::test]
async fn test_simulator_limit_is_fatal() {
    let mut config = quiet_config();
    config.simulator.max_input_width = 4;
    // simulate, CRC-8, single, 8 bits, output 00
    let (result, output) = run_session("2\n1\n1\n8\n00\n4\n", config).await;
    assert!(matches!(
        result,
        Err(DriverError::Backend(BackendError::InputTooWide { width: 8, max: 4 }))
    ));
    assert!(!output.contains("Exiting..."));
}

//! Fatal-exit behaviour of the binary: configuration and input errors
//! must terminate before any HTTP activity.

use std::io::Write;
use std::process::Command;

use tempfile::TempDir;

fn bench_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_es-bulk-bench"));
    command
        .env_remove("ELASTICSEARCH_APIKEY")
        .env_remove("ELASTICSEARCH_HOST")
        .env_remove("RUST_LOG");
    command
}

fn combined_output(output: &std::process::Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn missing_api_key_is_fatal() {
    let output = bench_command()
        .env("ELASTICSEARCH_HOST", "localhost:9200")
        .output()
        .expect("failed to run es-bulk-bench");

    assert!(!output.status.success());
    assert!(combined_output(&output).contains("ELASTICSEARCH_APIKEY must be set"));
}

#[test]
fn missing_host_is_fatal() {
    let output = bench_command()
        .env("ELASTICSEARCH_APIKEY", "test-key")
        .output()
        .expect("failed to run es-bulk-bench");

    assert!(!output.status.success());
    assert!(combined_output(&output).contains("ELASTICSEARCH_HOST must be set"));
}

#[test]
fn unreadable_input_file_is_fatal() {
    let tmp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = tmp_dir.path().join("no-such-file.json");

    let output = bench_command()
        .env("ELASTICSEARCH_APIKEY", "test-key")
        .env("ELASTICSEARCH_HOST", "localhost:9200")
        .arg("--input")
        .arg(&missing)
        .output()
        .expect("failed to run es-bulk-bench");

    assert!(!output.status.success());
    assert!(combined_output(&output).contains("Error when opening file"));
    // No label printed means the run died before the first send.
    assert!(!combined_output(&output).contains("Sending gzipped bulk request"));
}

#[test]
fn config_file_overrides_are_honored() {
    let tmp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = tmp_dir.path().join("bench.toml");
    let mut config_file = std::fs::File::create(&config_path).unwrap();
    writeln!(config_file, "input_file = \"{}\"", "/definitely/missing.json").unwrap();
    writeln!(config_file, "index = \"custom-index\"").unwrap();

    let output = bench_command()
        .env("ELASTICSEARCH_APIKEY", "test-key")
        .env("ELASTICSEARCH_HOST", "localhost:9200")
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("failed to run es-bulk-bench");

    // The promoted input path is used, and it fails before any send.
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("/definitely/missing.json"));
}

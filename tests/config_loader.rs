use contact_form::config::{Config, ConfigError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn defaults_match_documented_timings() {
    let config = Config::default();
    assert_eq!(config.alert_duration_ms, 5_000);
    assert_eq!(config.submit_latency_ms, 1_000);
    assert_eq!(config.tick_ms, 50);
}

#[test]
fn load_from_reads_overrides() {
    let file = write_config("alert_duration_ms = 2500\nsubmit_latency_ms = 300\n");
    let config = Config::load_from(file.path()).expect("load config");
    assert_eq!(config.alert_duration_ms, 2_500);
    assert_eq!(config.submit_latency_ms, 300);
    // Unset fields fall back to defaults.
    assert_eq!(config.tick_ms, 50);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("alert_duration_ms = [not a number");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = Config::load_from(std::path::Path::new("/nonexistent/config.toml"))
        .expect_err("should fail");
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn zero_alert_duration_is_rejected() {
    let file = write_config("alert_duration_ms = 0\n");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_submit_latency_is_rejected() {
    let file = write_config("submit_latency_ms = 0\n");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn durations_convert_to_std_duration() {
    let config = Config::default();
    assert_eq!(config.alert_duration().as_millis(), 5_000);
    assert_eq!(config.submit_latency().as_millis(), 1_000);
    assert_eq!(config.tick_rate().as_millis(), 50);
}

//! Tests for loading the terminal UI configuration.

use std::io::Write;
use std::path::PathBuf;
use tictactoe::TuiConfig;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
log_file = "/tmp/ttt.log"
show_cell_numbers = false
x_color = "cyan"
o_color = "yellow"
highlight_color = "magenta"
"#,
    );

    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert!(!*config.show_cell_numbers());
    assert_eq!(config.x_color(), "cyan");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config("o_color = \"white\"\n");
    let config = TuiConfig::from_file(file.path()).expect("valid config");
    let defaults = TuiConfig::default();

    assert_eq!(config.o_color(), "white");
    assert_eq!(config.x_color(), defaults.x_color());
    assert_eq!(config.log_file(), defaults.log_file());
    assert!(*config.show_cell_numbers());
}

#[test]
fn test_unknown_color_rejected() {
    let file = write_config("x_color = \"plaid\"\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("plaid"), "{}", err);
    assert!(err.message.contains("x_color"), "{}", err);
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_config("show_cell_numbers = \"maybe\"\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"), "{}", err);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let err = TuiConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"), "{}", err);
}

#[test]
fn test_error_records_location() {
    let err = TuiConfig::from_toml("x_color = 3").unwrap_err();
    assert!(err.line > 0);
    assert!(err.to_string().starts_with("Config error: "));
}

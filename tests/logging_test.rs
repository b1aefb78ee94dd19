//! Log filter precedence and subscriber installation.

use minimal_tictactoe::{Settings, init_file_logging, resolve_filter};
use tempfile::TempDir;

fn with_file_filter(filter: &str) -> Settings {
    Settings::from_toml_str(&format!("[logging]\nfilter = \"{filter}\"\n")).unwrap()
}

// Every RUST_LOG case lives in this one test so nothing else in this binary
// reads the environment while it changes.
#[test]
fn test_filter_precedence() {
    let settings = with_file_filter("warn");

    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe { std::env::set_var("RUST_LOG", "trace") };
    let filter = resolve_filter(None, settings.logging()).unwrap();
    assert_eq!(filter.to_string(), "trace");

    // The flag beats RUST_LOG
    let filter = resolve_filter(Some("debug"), settings.logging()).unwrap();
    assert_eq!(filter.to_string(), "debug");

    // SAFETY: as above.
    unsafe { std::env::remove_var("RUST_LOG") };

    // Settings file when RUST_LOG is unset
    let filter = resolve_filter(None, settings.logging()).unwrap();
    assert_eq!(filter.to_string(), "warn");

    // Built-in default
    let filter = resolve_filter(None, Settings::default().logging()).unwrap();
    assert_eq!(filter.to_string(), "info");

    // A bad filter in the file is an error, not a silent fallback
    let bad = with_file_filter("tictactoe_core=loud");
    let err = resolve_filter(None, bad.logging()).unwrap_err();
    assert!(err.to_string().contains("in settings"));
}

#[test]
fn test_second_install_is_reported() {
    let dir = TempDir::new().unwrap();
    let first = Settings::default().with_log_file(Some(dir.path().join("first.log")));
    let second = Settings::default().with_log_file(Some(dir.path().join("second.log")));

    assert!(init_file_logging(first.logging(), Some("info")).unwrap());
    assert!(!init_file_logging(second.logging(), Some("info")).unwrap());
    assert!(dir.path().join("second.log").exists());
}

//! Settings file loading.

use qubic::{ModeChoice, Settings, Side};
use std::io::Write;

#[test]
fn test_load_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"hot-seat\"").unwrap();
    writeln!(file, "first_player = \"O\"").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.mode(), Some(ModeChoice::HotSeat));
    assert_eq!(*settings.first_player(), Some(Side::O));
    assert_eq!(*settings.computer(), None);
    assert_eq!(*settings.seed(), None);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read settings file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = 3").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse settings"));
}

#[test]
fn test_flags_override_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"computer\"").unwrap();
    writeln!(file, "computer = \"X\"").unwrap();
    writeln!(file, "seed = 5").unwrap();

    let from_file = Settings::from_file(file.path()).unwrap();
    let flags = Settings::new(None, None, Some(Side::O), None);
    let merged = from_file.overridden_by(flags);

    assert_eq!(*merged.mode(), Some(ModeChoice::Computer));
    assert_eq!(*merged.computer(), Some(Side::O));
    assert_eq!(*merged.seed(), Some(5));
}

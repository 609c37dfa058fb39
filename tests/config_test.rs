// tests/config_test.rs
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;
use vtag::config::{load_config, Config, CONFIG_FILE_NAME};
use vtag::{Version, VtagError};

struct CurrentDirGuard {
    original: std::path::PathBuf,
}

impl CurrentDirGuard {
    fn enter(path: &std::path::Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CurrentDirGuard { original }
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[behavior]
include_release_candidates = false
initial_tag = "v1.0.0-rc1"

[output]
plain = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(!config.behavior.include_release_candidates);
    assert!(config.output.plain);
    assert_eq!(
        config.behavior.initial_version().unwrap(),
        Version::candidate(1, 0, 0, 1)
    );
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(matches!(err, VtagError::Io(_)));
}

#[test]
fn test_load_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[behavior\nplain = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, VtagError::TomlDe(_)));
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[behavior]\ninitial_tag = \"v0.0.1\"\n",
    )
    .unwrap();

    let _guard = CurrentDirGuard::enter(dir.path());
    let config = load_config(None).unwrap();
    assert_eq!(config.behavior.initial_tag, "v0.0.1");
    assert!(config.behavior.include_release_candidates);
}

#[test]
#[serial]
fn test_explicit_path_wins_over_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nplain = true\n").unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "[output]\nplain = false\n").unwrap();

    let _guard = CurrentDirGuard::enter(dir.path());
    let config = load_config(Some(explicit.to_str().unwrap())).unwrap();
    assert!(!config.output.plain);
}

#[test]
fn test_default_values() {
    let config = Config::default();
    assert!(config.behavior.include_release_candidates);
    assert_eq!(config.behavior.initial_tag, "v0.1.0");
    assert!(!config.output.plain);
}

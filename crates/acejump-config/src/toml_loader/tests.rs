use super::*;
use acejump_common::ConfigError;
use std::path::Path;

#[test]
fn missing_file_is_file_not_found() {
    let err = load_from_path(Path::new("/tmp/nonexistent_acejump_config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let config = parse(
        r#"
[placeholder]
alphabet = "asdfjkl"

[finder]
skip_selection = true
"#,
    )
    .unwrap();

    assert_eq!(config.placeholder.alphabet, "asdfjkl");
    assert!(config.finder.skip_selection);
    assert!(config.finder.only_initial_letter);
    assert!(config.dim.enabled);
}

#[test]
fn malformed_toml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_still_parse() {
    let config = parse("[placeholder]\nalphabet = \"a\"\n").unwrap();
    assert_eq!(config.placeholder.alphabet, "a");
    assert!(crate::validation::validate(&config).is_err());
}

#[test]
fn unknown_scroll_mode_is_rejected() {
    let err = parse("[scroll]\nmode = \"sideways\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn written_template_loads_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    write_default_config(&path).unwrap();
    let config = load_from_path(&path).unwrap();

    assert!(crate::validation::validate(&config).is_ok());
    assert_eq!(config.placeholder.characters().len(), 26);
    assert_eq!(config.jumper.retry_debounce_ms, 500);
}

#[test]
fn default_path_ends_in_app_dir() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("acejump/config.toml"));
    }
}

use super::*;
use crate::schema::AceJumpConfig;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::test]
async fn missing_file_starts_from_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_acejump_reload_test.toml");
    let (config, rx) = ReloadManager::start(path).await;
    assert_eq!(config.placeholder.characters().len(), 26);
    assert_eq!(rx.borrow().placeholder.alphabet, config.placeholder.alphabet);
}

#[tokio::test]
async fn initial_config_comes_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[placeholder]\nalphabet = \"hjkl\"\n").unwrap();

    let (config, _rx) = ReloadManager::new(path).spawn();
    assert_eq!(config.placeholder.characters(), vec!['h', 'j', 'k', 'l']);
    assert!(config.dim.enabled);
}

#[test]
fn reload_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[placeholder]\nalphabet = \"aa\"\n").unwrap();

    let manager = ReloadManager::new(path.clone()).with_debounce(Duration::from_millis(5));
    assert_eq!(manager.path(), path);
    assert!(matches!(
        manager.reload(),
        Err(acejump_common::ConfigError::ValidationError(_))
    ));
}

#[tokio::test]
async fn invalid_initial_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[finder]\npattern = \"(\"\n").unwrap();

    let (config, _rx) = ReloadManager::new(path).spawn();
    assert_eq!(config.finder.pattern, AceJumpConfig::default().finder.pattern);
}

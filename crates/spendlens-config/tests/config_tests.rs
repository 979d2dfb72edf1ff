use std::fs;

use spendlens_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_mirrors_rupee_display() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "₹");
    assert_eq!(cfg.digit_grouping, "indian");
    assert_eq!(cfg.currency_precision, 2);
    assert!(cfg.data_dir.is_none());
    assert!(cfg.resolve_data_dir().ends_with("spendlens"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("home")).expect("manager");

    assert_eq!(manager.load().expect("load defaults"), Config::default());

    let mut cfg = Config::default();
    cfg.currency_symbol = "$".to_string();
    cfg.digit_grouping = "standard".to_string();
    cfg.data_dir = Some(dir.path().join("ledger"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.resolve_data_dir(), dir.path().join("ledger"));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    fs::write(manager.config_path(), r#"{"currency_symbol":"$"}"#).unwrap();

    let loaded = manager.load().expect("load partial config");
    assert_eq!(loaded.currency_symbol, "$");
    assert_eq!(loaded.digit_grouping, "indian");
    assert_eq!(loaded.currency_precision, 2);
    assert!(loaded.ui_color_enabled);
}

#[test]
fn invalid_precision_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    let mut cfg = Config::default();
    cfg.currency_precision = 12;

    assert!(matches!(
        manager.save(&cfg),
        Err(ConfigError::Invalid {
            key: "currency_precision",
            ..
        })
    ));
    assert!(!manager.config_path().exists());
}

#[test]
fn empty_object_loads_as_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    fs::write(manager.config_path(), "{}").unwrap();

    assert_eq!(manager.load().expect("load empty config"), Config::default());
}

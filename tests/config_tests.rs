use bill_core::bills::BillStatus;
use bill_core::config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert_eq!(cfg.color_for(BillStatus::Overdue), "#EF4444");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("manager");
    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.palette.paid = "#00FF00".to_string();
    cfg.log_filter = Some("bill_core=debug".to_string());

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.color_for(BillStatus::Paid), "#00FF00");
    assert_eq!(loaded.format_amount(1234.5), "€1,234.50");
    assert!(!manager.path().with_extension("json.tmp").exists());
}

#[test]
fn palette_is_optional_in_stored_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.path(), r#"{"currency":"GBP"}"#).unwrap();

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency, "GBP");
    assert_eq!(loaded.format_amount(12.0), "£12.00");
    assert_eq!(loaded.palette, Config::default().palette);
}

#[test]
fn amounts_render_in_configured_currency() {
    let mut cfg = Config::default();
    assert_eq!(cfg.format_amount(1500.0), "$1,500.00");
    cfg.currency = "CHF".to_string();
    assert_eq!(cfg.format_amount(9.5), "CHF 9.50");
}

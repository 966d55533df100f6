use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.cards_path, PathBuf::from("data/cards.yaml"));
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_override_defaults() {
    let config = config_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("CARDS_PATH", "/srv/cards.json")]).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.cards_path, PathBuf::from("/srv/cards.json"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = config_from(&[("PORT", "  "), ("CARDS_PATH", "")]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.cards_path, PathBuf::from(DEFAULT_CARDS_PATH));
}

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "99999")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "99999".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"99999\"");
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
}

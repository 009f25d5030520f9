//! Serialization of levels and basic configuration.

use logging::{BasicConfig, Level, LineMode};

#[test]
fn level_serializes_as_lowercase_name() {
    assert_eq!(serde_json::to_string(&Level::Warning).unwrap(), "\"warning\"");
    let level: Level = serde_json::from_str("\"debug\"").unwrap();
    assert_eq!(level, Level::Debug);
}

#[test]
fn basic_config_fills_missing_fields_with_defaults() {
    let config: BasicConfig = serde_json::from_str(r#"{"level":"info"}"#).unwrap();
    assert_eq!(config.level, Level::Info);
    assert_eq!(config.line_mode, LineMode::WithNewline);
}

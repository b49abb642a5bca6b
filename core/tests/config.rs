use fuzzyjoin_core::{ColumnPair, ConfigError, Error, FuzzyJoin, JoinConfig};

#[test]
fn test_defaults() {
    let config = JoinConfig::default();
    assert_eq!(config.max_edit_distance, 2);
    assert_eq!(config.prefix_length, 7);
    assert_eq!(config.null_return, None);
}

#[test]
fn test_serde_round_trip() {
    let config = JoinConfig {
        max_edit_distance: 3,
        prefix_length: 5,
        null_return: Some("NULL".to_owned()),
    };

    let json = serde_json::to_string(&config).unwrap();
    let back: JoinConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_deserialize_fills_missing_fields_with_defaults() {
    let config: JoinConfig = serde_json::from_str(r#"{"max_edit_distance": 1}"#).unwrap();
    assert_eq!(config.max_edit_distance, 1);
    assert_eq!(config.prefix_length, 7);
    assert_eq!(config.null_return, None);
}

#[test]
fn test_zero_max_edit_distance_is_rejected() {
    let config = JoinConfig {
        max_edit_distance: 0,
        ..JoinConfig::default()
    };
    assert!(matches!(
        FuzzyJoin::new(config),
        Err(Error::Config(ConfigError::MaxEditDistance(0))),
    ));
}

#[test]
fn test_column_pair_serde() {
    let pair = ColumnPair::new("city", "location").with_null_return("NULL");
    let json = serde_json::to_string(&pair).unwrap();
    let back: ColumnPair = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pair);
}

#[test]
fn test_column_pair_null_return_defaults_to_none() {
    let pair: ColumnPair = serde_json::from_str(r#"{"left": "a", "right": "b"}"#).unwrap();
    assert_eq!(pair.null_return, None);
}

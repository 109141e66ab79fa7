use tablelist_lib::config::RawTreeConfig;
use tablelist_lib::split::SplitPattern;
use tablelist_lib::{TreeConfig, DEFAULT_DEPTH, DEFAULT_THRESHOLD};

#[test]
fn test_defaults() {
    let config = TreeConfig::default();
    assert_eq!(config.threshold(), DEFAULT_THRESHOLD);
    assert_eq!(config.depth(), DEFAULT_DEPTH);
    assert_eq!(config.skip(), 0);
    assert_eq!(config.split(), &SplitPattern::Underscores);
}

#[test]
fn test_threshold_is_clamped() {
    assert_eq!(TreeConfig::new().with_threshold(0).threshold(), 2);
    assert_eq!(TreeConfig::new().with_threshold(1).threshold(), 2);
    assert_eq!(TreeConfig::new().with_threshold(2).threshold(), 2);
    assert_eq!(TreeConfig::new().with_threshold(9).threshold(), 9);
}

#[test]
fn test_raw_negative_values_are_clamped() {
    let raw: RawTreeConfig =
        serde_json::from_str(r#"{"threshold": -3, "depth": -1, "skip": -7}"#).unwrap();
    let config = TreeConfig::from_raw(raw).unwrap();
    assert_eq!(config.threshold(), 2);
    assert_eq!(config.depth(), 0);
    assert_eq!(config.skip(), 0);
}

#[test]
fn test_raw_missing_fields_use_defaults() {
    let raw: RawTreeConfig = serde_json::from_str(r#"{"skip": 1}"#).unwrap();
    let config = TreeConfig::from_raw(raw).unwrap();
    assert_eq!(config, TreeConfig::default().with_skip(1));
}

#[test]
fn test_raw_split_pattern() {
    let raw = RawTreeConfig {
        split: Some("-+".to_string()),
        ..Default::default()
    };
    let config = TreeConfig::from_raw(raw).unwrap();
    assert_eq!(config.split().tokenize("a-b"), vec!["a", "-b"]);
}

#[test]
fn test_raw_invalid_split_pattern() {
    let raw = RawTreeConfig {
        split: Some("[".to_string()),
        ..Default::default()
    };
    assert!(TreeConfig::from_raw(raw).is_err());
}

#[test]
fn test_raw_round_trip_preserves_config() {
    let config = TreeConfig::new().with_threshold(7).with_depth(0).with_skip(2);
    assert_eq!(TreeConfig::from_raw(config.to_raw()).unwrap(), config);
}

/*!
 * Tests for conversion configuration defaults and validation
 */

use transcap::app_config::{Config, LogLevel};

/// Test the built-in word window and log level defaults
#[test]
fn test_default_config_withNoOverrides_shouldUseBuiltInValues() {
    let config = Config::default();

    assert_eq!(config.word_count.min_words, 8);
    assert_eq!(config.word_count.max_words, 12);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test validation across a sequence of window mutations
#[test]
fn test_config_validation_withMutatedWindow_shouldAcceptAndRejectCorrectly() {
    // Defaults validate
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // A zero bound is rejected
    config.word_count.min_words = 0;
    assert!(config.validate().is_err());
    config.word_count.min_words = 8;

    // An inverted window is rejected
    config.word_count.min_words = 20;
    assert!(config.validate().is_err());
    config.word_count.min_words = 8;

    // Equal bounds are a valid window
    config.word_count.min_words = 10;
    config.word_count.max_words = 10;
    assert!(config.validate().is_ok());
}

/// Test that a partial configuration file fills in defaults
#[test]
fn test_deserialize_withPartialDocument_shouldFillDefaults() {
    let config: Config = serde_json::from_str(r#"{}"#).unwrap();

    assert_eq!(config, Config::default());

    let config: Config = serde_json::from_str(
        r#"{"word_count": {"min_words": 5}}"#
    ).unwrap();

    assert_eq!(config.word_count.min_words, 5);
    assert_eq!(config.word_count.max_words, 12);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a full configuration file is read as written
#[test]
fn test_deserialize_withFullDocument_shouldReadAllFields() {
    let config: Config = serde_json::from_str(
        r#"{"word_count": {"min_words": 4, "max_words": 9}, "log_level": "debug"}"#
    ).unwrap();

    assert_eq!(config.word_count.min_words, 4);
    assert_eq!(config.word_count.max_words, 9);
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test that an unknown log level name is rejected at parse time
#[test]
fn test_deserialize_withUnknownLogLevel_shouldFail() {
    let result = serde_json::from_str::<Config>(r#"{"log_level": "chatty"}"#);
    assert!(result.is_err());
}

/// Test that validation failures only surface through validate, not parsing
#[test]
fn test_deserialize_withInvertedWindow_shouldParseButFailValidation() {
    let config: Config = serde_json::from_str(
        r#"{"word_count": {"min_words": 9, "max_words": 3}}"#
    ).unwrap();

    assert!(config.validate().is_err());
}

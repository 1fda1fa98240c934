/*!
 * Tests for transcript document parsing
 */

use transcap::errors::TranscriptError;
use transcap::transcript::{ItemKind, Transcript};
use crate::common;

/// Test that a well-formed document becomes the expected item sequence
#[test]
fn test_fromJsonStr_withValidDocument_shouldProduceOrderedItems() {
    let document = common::transcript_document(&[
        common::word_item("Hello", 0.0, 0.5),
        common::punctuation_item(","),
        common::word_item("world", 0.6, 1.0),
    ]);

    let transcript = Transcript::from_json_str(&document).unwrap();

    assert_eq!(transcript.items.len(), 3);
    assert_eq!(transcript.items[0].kind, ItemKind::Word);
    assert_eq!(transcript.items[0].content, "Hello");
    assert_eq!(transcript.items[0].start_ms, Some(0));
    assert_eq!(transcript.items[0].end_ms, Some(500));
    assert_eq!(transcript.items[1].kind, ItemKind::Punctuation);
    assert_eq!(transcript.items[1].start_ms, None);
    assert_eq!(transcript.items[2].content, "world");
    assert_eq!(transcript.items[2].end_ms, Some(1_000));
}

/// Test that number-typed timestamps are accepted alongside string ones
#[test]
fn test_fromJsonStr_withNumericTimestamps_shouldParse() {
    let document = r#"{"results": {"items": [
        {"type": "pronunciation", "start_time": 1.5, "end_time": 2.25,
         "alternatives": [{"content": "mixed"}]}
    ]}}"#;

    let transcript = Transcript::from_json_str(document).unwrap();

    assert_eq!(transcript.items[0].start_ms, Some(1_500));
    assert_eq!(transcript.items[0].end_ms, Some(2_250));
}

/// Test that timestamp conversion rounds half away from zero
#[test]
fn test_fromJsonStr_withMidpointTimestamp_shouldRoundHalfAwayFromZero() {
    let document = common::transcript_document(&[
        common::word_item("word", 4.5675, 4.9),
    ]);

    let transcript = Transcript::from_json_str(&document).unwrap();

    assert_eq!(transcript.items[0].start_ms, Some(4_568));
}

/// Test that an item without a type field counts as a word
#[test]
fn test_fromJsonStr_withMissingType_shouldDefaultToWord() {
    let document = r#"{"results": {"items": [
        {"start_time": "0.1", "end_time": "0.4",
         "alternatives": [{"content": "untyped"}]}
    ]}}"#;

    let transcript = Transcript::from_json_str(document).unwrap();

    assert_eq!(transcript.items[0].kind, ItemKind::Word);
}

/// Test that a word without timestamps keeps them unset
#[test]
fn test_fromJsonStr_withUntimedWord_shouldKeepTimingsUnset() {
    let document = r#"{"results": {"items": [
        {"type": "pronunciation", "alternatives": [{"content": "floating"}]}
    ]}}"#;

    let transcript = Transcript::from_json_str(document).unwrap();

    assert_eq!(transcript.items[0].start_ms, None);
    assert_eq!(transcript.items[0].end_ms, None);
}

/// Test that an empty item list becomes an empty transcript
#[test]
fn test_fromJsonStr_withNoItems_shouldProduceEmptyTranscript() {
    let transcript = Transcript::from_json_str(r#"{"results": {"items": []}}"#).unwrap();
    assert!(transcript.items.is_empty());
}

/// Test that unparsable JSON is rejected as malformed
#[test]
fn test_fromJsonStr_withBrokenJson_shouldFail() {
    let result = Transcript::from_json_str("{not json");
    assert!(matches!(result, Err(TranscriptError::Json(_))));
}

/// Test that an item without content is rejected with its position
#[test]
fn test_fromJsonStr_withMissingContent_shouldFail() {
    let document = r#"{"results": {"items": [
        {"type": "pronunciation", "start_time": "0.0", "end_time": "0.4",
         "alternatives": [{"content": "fine"}]},
        {"type": "pronunciation", "start_time": "0.5", "end_time": "0.9",
         "alternatives": []}
    ]}}"#;

    let result = Transcript::from_json_str(document);

    assert!(matches!(
        result,
        Err(TranscriptError::MissingField { index: 1, .. })
    ));
}

/// Test that an unreadable timestamp string is rejected with the raw value
#[test]
fn test_fromJsonStr_withUnreadableTimestamp_shouldFail() {
    let document = r#"{"results": {"items": [
        {"type": "pronunciation", "start_time": "soon", "end_time": "0.4",
         "alternatives": [{"content": "word"}]}
    ]}}"#;

    let result = Transcript::from_json_str(document);

    match result {
        Err(TranscriptError::UnreadableTimestamp { index, field, value }) => {
            assert_eq!(index, 0);
            assert_eq!(field, "start_time");
            assert_eq!(value, "soon");
        }
        other => panic!("Expected UnreadableTimestamp, got {:?}", other),
    }
}

/// Test that a negative timestamp is rejected as invalid timing
#[test]
fn test_fromJsonStr_withNegativeTimestamp_shouldFail() {
    let document = r#"{"results": {"items": [
        {"type": "pronunciation", "start_time": "-1.0", "end_time": "0.4",
         "alternatives": [{"content": "word"}]}
    ]}}"#;

    let result = Transcript::from_json_str(document);

    assert!(matches!(result, Err(TranscriptError::InvalidTiming { .. })));
}

/// Test that an item ending before it starts is rejected
#[test]
fn test_fromJsonStr_withEndBeforeStart_shouldFail() {
    let document = common::transcript_document(&[
        common::word_item("backwards", 2.0, 1.0),
    ]);

    let result = Transcript::from_json_str(&document);

    assert!(matches!(
        result,
        Err(TranscriptError::InvalidTiming { index: 0, .. })
    ));
}

/// Test that decreasing start times across items are rejected
#[test]
fn test_fromJsonStr_withDecreasingStarts_shouldFail() {
    let document = common::transcript_document(&[
        common::word_item("first", 2.0, 2.5),
        common::word_item("earlier", 1.0, 1.5),
    ]);

    let result = Transcript::from_json_str(&document);

    assert!(matches!(
        result,
        Err(TranscriptError::InvalidTiming { index: 1, .. })
    ));
}

/// Test that untimed punctuation between words does not break the
/// ordering check
#[test]
fn test_fromJsonStr_withPunctuationBetweenWords_shouldKeepOrderingCheck() {
    let document = common::transcript_document(&[
        common::word_item("one", 0.0, 0.5),
        common::punctuation_item("."),
        common::word_item("two", 0.6, 1.0),
    ]);

    let transcript = Transcript::from_json_str(&document).unwrap();

    assert_eq!(transcript.items.len(), 3);
}

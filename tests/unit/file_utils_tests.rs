/*!
 * Tests for file discovery and caption output helpers
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use transcap::file_utils::FileManager;
use crate::common;

/// Test that file_exists sees a file that was just written
#[test]
fn test_file_exists_withRealFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let transcript = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "session1.json",
        r#"{"results":{"items":[]}}"#,
    )?;

    assert!(FileManager::file_exists(&transcript));

    Ok(())
}

/// Test that file_exists rejects a path with nothing behind it
#[test]
fn test_file_exists_withMissingFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("missing_transcript.json"));
}

/// Test that the output path keeps the input stem and swaps the extension
#[test]
fn test_generate_output_path_withTranscriptInput_shouldUseStemAndExtension() {
    let generated = FileManager::generate_output_path(
        Path::new("/tmp/input/episode.json"),
        Path::new("/tmp/output"),
        "srt",
    );

    assert_eq!(generated, Path::new("/tmp/output/episode.srt"));
}

/// Test that dir_exists sees a real directory
#[test]
fn test_dir_exists_withTempDir_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(FileManager::dir_exists(temp_dir.path()));

    Ok(())
}

/// Test that dir_exists rejects a directory that was never created
#[test]
fn test_dir_exists_withMissingDir_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(!FileManager::dir_exists(temp_dir.path().join("absent")));

    Ok(())
}

/// Test that ensure_dir creates every missing level of a nested path
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateAllLevels() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("captions").join("batch");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());

    Ok(())
}

/// Test that read_to_string returns exactly what is on disk
#[test]
fn test_read_to_string_withCaptionFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let caption_content = "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nHi\n";
    let caption_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "episode.vtt",
        caption_content,
    )?;

    assert_eq!(FileManager::read_to_string(&caption_file)?, caption_content);

    Ok(())
}

/// Test that read_to_string fails cleanly on a missing file
#[test]
fn test_read_to_string_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let result = FileManager::read_to_string(temp_dir.path().join("nowhere.json"));

    assert!(result.is_err());

    Ok(())
}

/// Test that write_to_file persists caption text verbatim
#[test]
fn test_write_to_file_withCaptionContent_shouldPersist() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let caption_file = temp_dir.path().join("episode.srt");
    let block = "1\n00:00:00,000 --> 00:00:01,000\nHi\n\n";

    FileManager::write_to_file(&caption_file, block)?;

    assert_eq!(fs::read_to_string(&caption_file)?, block);

    Ok(())
}

/// Test that write_to_file creates missing parent directories first
#[test]
fn test_write_to_file_withMissingParent_shouldCreateDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("missing/parents/output.txt");

    FileManager::write_to_file(&test_file, "nested content")?;

    assert!(test_file.exists());
    assert_eq!(fs::read_to_string(&test_file)?, "nested content");

    Ok(())
}

/// Test that find_files only returns files with the requested extension,
/// in sorted order
#[test]
fn test_find_files_withMixedDirectory_shouldFilterByExtension() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "first.json", "{}")?;
    common::create_test_file(&dir, "second.json", "{}")?;
    common::create_test_file(&dir, "notes.txt", "skip me")?;

    let found = FileManager::find_files(&dir, "json")?;

    assert_eq!(found.len(), 2);
    assert!(found[0].ends_with("first.json"));
    assert!(found[1].ends_with("second.json"));

    Ok(())
}

/// Test that find_files accepts a dot-prefixed extension and mixed case
#[test]
fn test_find_files_withDotPrefixAndMixedCase_shouldStillMatch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "upper.JSON", "{}")?;

    let with_dot = FileManager::find_files(&dir, ".json")?;
    assert_eq!(with_dot.len(), 1);

    Ok(())
}

/// Test that find_files descends into subdirectories
#[test]
fn test_find_files_withNestedDirectories_shouldRecurse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("nested");
    FileManager::ensure_dir(&nested)?;
    common::create_test_file(&nested, "inner.json", "{}")?;

    let found = FileManager::find_files(temp_dir.path(), "json")?;

    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("inner.json"));

    Ok(())
}

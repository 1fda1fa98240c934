use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::segmenter::word_count::WordCountConfig;

/// Application configuration module
/// This module holds the conversion settings the CLI and the controller
/// share, with serde defaults for every field.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Word window for the word-count policy
    #[serde(default)]
    pub word_count: WordCountConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.word_count.validate()?;
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            word_count: WordCountConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

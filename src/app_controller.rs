use anyhow::{Context, Result, anyhow};
use log::{debug, error, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::cue::Cue;
use crate::file_utils::FileManager;
use crate::segmenter::char_length::CharacterLengthSegmenter;
use crate::segmenter::word_count::WordCountSegmenter;
use crate::transcript::Transcript;
use crate::writer::{self, CaptionFormat};

// @module: Application controller for transcript conversion

/// Main application controller for transcript-to-caption conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Convert a single transcript file to a caption file
    pub fn run(
        &self,
        input_file: &Path,
        output_file: &Path,
        format: CaptionFormat,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Check if the caption file already exists
        if FileManager::file_exists(output_file) && !force_overwrite {
            warn!("Skipping file, caption already exists (use -f to force overwrite)");
            return Ok(());
        }

        let cues = self.convert(input_file, format)?;
        writer::write_caption_file(output_file, format, &cues)?;

        info!(
            "Wrote {} cues to {:?} in {}",
            cues.len(),
            output_file,
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Parse and segment a transcript file without writing anything
    pub fn convert(&self, input_file: &Path, format: CaptionFormat) -> Result<Vec<Cue>> {
        let content = FileManager::read_to_string(input_file)?;
        let transcript = Transcript::from_json_str(&content)
            .with_context(|| format!("Failed to read transcript: {:?}", input_file))?;

        debug!(
            "Segmenting {} items from {:?}",
            transcript.items.len(),
            input_file
        );

        let cues = match format {
            CaptionFormat::Srt => CharacterLengthSegmenter::new().segment(&transcript.items),
            CaptionFormat::Vtt => WordCountSegmenter::with_config(self.config.word_count.clone())?
                .segment(&transcript.items),
        };

        Ok(cues)
    }

    /// Run the workflow in folder mode, converting every transcript in a directory
    /// Files whose captions already exist will be skipped
    pub fn run_folder(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        format: CaptionFormat,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Find all transcript files in the directory (recursive)
        let transcript_files = FileManager::find_files(input_dir, "json")?;
        if transcript_files.is_empty() {
            return Err(anyhow!(
                "No transcript files found in directory: {:?}",
                input_dir
            ));
        }

        FileManager::ensure_dir(output_dir)?;

        // Per-file outcomes for the summary line
        let mut success_count = 0;
        let mut error_count = 0;
        let mut skip_count = 0;

        for transcript_file in transcript_files.iter() {
            // File name only, for log lines
            let file_name = transcript_file
                .file_name()
                .map_or_else(|| "unknown".to_string(), |f| f.to_string_lossy().to_string());

            let output_file =
                FileManager::generate_output_path(transcript_file, output_dir, format.extension());

            // Check if the caption file already exists
            if output_file.exists() && !force_overwrite {
                warn!(
                    "Skipping {}, caption already exists (use -f to force overwrite)",
                    file_name
                );
                skip_count += 1;
                continue;
            }

            match self.run(transcript_file, &output_file, format, force_overwrite) {
                Ok(_) => {
                    success_count += 1;
                }
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }
        }

        // One summary line per batch run
        info!(
            "Folder processing completed: {} converted, {} skipped, {} errors - Duration: {}",
            success_count,
            skip_count,
            error_count,
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    // @method: Format duration in a human-readable form
    fn format_duration(duration: std::time::Duration) -> String {
        let secs = duration.as_secs();
        match (secs / 3600, (secs % 3600) / 60) {
            (0, 0) => format!("{}.{:03}s", secs, duration.subsec_millis()),
            (0, minutes) => format!("{}m {}s", minutes, secs % 60),
            (hours, minutes) => format!("{}h {}m {}s", hours, minutes, secs % 60),
        }
    }
}

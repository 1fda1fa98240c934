// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_arguments)]

use anyhow::{Result, anyhow, Context};
use log::{debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::writer::CaptionFormat;
use app_controller::Controller;

mod app_config;
mod transcript;
mod cue;
mod segmenter;
mod timecode;
mod writer;
mod file_utils;
mod app_controller;
mod errors;

/// Config file picked up from the working directory when --config is absent
const DEFAULT_CONFIG_PATH: &str = "transcap.json";

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a transcript to SRT captions with the character-length policy
    Srt(SrtArgs),

    /// Convert a transcript to WebVTT captions with the word-count policy
    Vtt(VttArgs),

    /// Generate shell completions for transcap
    Completions {
        /// Target shell for the completion script
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct SrtArgs {
    /// Transcript JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Caption file to write, or output directory in folder mode
    #[arg(value_name = "OUTPUT_PATH")]
    output_path: PathBuf,

    /// Overwrite caption files that already exist
    #[arg(short, long)]
    force_overwrite: bool,

    /// Path to a JSON configuration file
    #[arg(short, long = "config", value_name = "PATH")]
    config_path: Option<String>,

    /// Logging verbosity for this run
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Args, Debug)]
struct VttArgs {
    /// Transcript JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Caption file to write, or output directory in folder mode
    #[arg(value_name = "OUTPUT_PATH")]
    output_path: PathBuf,

    /// Fewest words a cue needs before sentence punctuation may close it
    #[arg(value_name = "MIN_WORDS")]
    min_words: Option<u32>,

    /// Most words a cue may hold before it closes unconditionally
    #[arg(value_name = "MAX_WORDS")]
    max_words: Option<u32>,

    /// Overwrite caption files that already exist
    #[arg(short, long)]
    force_overwrite: bool,

    /// Path to a JSON configuration file
    #[arg(short, long = "config", value_name = "PATH")]
    config_path: Option<String>,

    /// Logging verbosity for this run
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// transcap - Transcript to Caption converter
///
/// Converts speech-recognition transcript JSON into SRT or WebVTT caption
/// files using one of two segmentation policies.
#[derive(Parser, Debug)]
#[command(name = "transcap")]
#[command(author = "transcap Team")]
#[command(version = "0.1.0")]
#[command(about = "Transcript-to-caption conversion tool")]
#[command(long_about = "transcap converts speech-recognition transcript JSON into caption files.

EXAMPLES:
    transcap srt transcript.json captions.srt        # Character-length SRT captions
    transcap vtt transcript.json captions.vtt        # Word-count WebVTT captions
    transcap vtt transcript.json captions.vtt 6 10   # Custom word window
    transcap srt -f transcript.json captions.srt     # Force overwrite existing files
    transcap srt transcripts/ captions/              # Convert an entire directory
    transcap vtt --log-level debug in.json out.vtt   # Convert with debug logging
    transcap completions bash > transcap.bash        # Generate bash completions

CONFIGURATION:
    Configuration is read from transcap.json in the working directory by
    default. You can point at a different file with --config. Without a
    config file the built-in defaults apply.

POLICIES:
    srt - character-length policy: 37-character lines, silence splits,
          overlap and duration corrections
    vtt - word-count policy: 8 to 12 words per cue by default, preferring
          sentence boundaries")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

/// Everything one conversion invocation needs, collected from a subcommand
struct ConversionRequest {
    input_path: PathBuf,
    output_path: PathBuf,
    format: CaptionFormat,
    min_words: Option<u32>,
    max_words: Option<u32>,
    force_overwrite: bool,
    config_path: Option<String>,
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: Logger with the given level threshold
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Process-wide logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    writeln!(
                        stderr,
                        "\x1B[1;31m{} ERROR {}\x1B[0m",
                        now, record.args()
                    )
                },
                Level::Warn => {
                    writeln!(
                        stderr,
                        "\x1B[1;33m{} WARN  {}\x1B[0m",
                        now, record.args()
                    )
                },
                Level::Info => {
                    writeln!(
                        stderr,
                        "\x1B[1;32m{} INFO  {}\x1B[0m",
                        now, record.args()
                    )
                },
                Level::Debug => {
                    writeln!(
                        stderr,
                        "\x1B[1;36m{} DEBUG {}\x1B[0m",
                        now, record.args()
                    )
                },
                Level::Trace => {
                    writeln!(
                        stderr,
                        "\x1B[1;35m{} TRACE {}\x1B[0m",
                        now, record.args()
                    )
                },
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Logger starts at info; the level is raised or lowered once the
    // config and CLI flags have been read
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transcap", &mut std::io::stdout());
            Ok(())
        }
        Commands::Srt(args) => run_conversion(ConversionRequest {
            input_path: args.input_path,
            output_path: args.output_path,
            format: CaptionFormat::Srt,
            min_words: None,
            max_words: None,
            force_overwrite: args.force_overwrite,
            config_path: args.config_path,
            log_level: args.log_level,
        }),
        Commands::Vtt(args) => run_conversion(ConversionRequest {
            input_path: args.input_path,
            output_path: args.output_path,
            format: CaptionFormat::Vtt,
            min_words: args.min_words,
            max_words: args.max_words,
            force_overwrite: args.force_overwrite,
            config_path: args.config_path,
            log_level: args.log_level,
        }),
    }
}

fn run_conversion(options: ConversionRequest) -> Result<()> {
    // A --log-level flag takes effect before anything else happens
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        let log_level = match config_log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(log_level);
    }

    // Load configuration: an explicit --config must exist, the default
    // path is only picked up when it is there
    let mut config: Config = match &options.config_path {
        Some(config_path) => load_config(Path::new(config_path))?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => {
            debug!("No config file found, using built-in defaults");
            Config::default()
        }
    };

    // Override config with CLI options if provided
    if let Some(min_words) = options.min_words {
        config.word_count.min_words = min_words;
    }

    if let Some(max_words) = options.max_words {
        config.word_count.max_words = max_words;
    }

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validation runs on the merged result, after the overrides
    config.validate()
        .context("Configuration validation failed")?;

    // Without a --log-level flag the config file decides the level
    if options.log_level.is_none() {
        let log_level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };

        // Max level only; the logger itself is already installed
        log::set_max_level(log_level);
    }

    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        // Process a single file; an existing directory as the output path
        // gets a generated file name inside it
        let output_file = if options.output_path.is_dir() {
            FileManager::generate_output_path(
                &options.input_path,
                &options.output_path,
                options.format.extension(),
            )
        } else {
            options.output_path.clone()
        };

        controller.run(
            &options.input_path,
            &output_file,
            options.format,
            options.force_overwrite,
        )?;
    } else if options.input_path.is_dir() {
        // Batch mode over a whole directory
        controller.run_folder(
            &options.input_path,
            &options.output_path,
            options.format,
            options.force_overwrite,
        )?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

// Helper to read and parse one configuration file
fn load_config(config_path: &Path) -> Result<Config> {
    let file = File::open(config_path)
        .context(format!("Failed to open config file: {:?}", config_path))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .context(format!("Failed to parse config file: {:?}", config_path))
}

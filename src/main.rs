// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, OutputFormat};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod document;
mod errors;
mod extractor;
mod file_utils;
mod pipeline;
mod projector;
mod segmenter;

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Tsv,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Tsv => OutputFormat::Tsv,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

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
    /// Generate a scene breakdown from a screenplay (default command)
    #[command(alias = "generate")]
    Generate(GenerateArgs),

    /// Generate shell completions for scenebreak
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input screenplay file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Column preset to use (basic, extended, full)
    #[arg(short, long)]
    preset: Option<String>,

    /// Series label stamped into every row
    #[arg(short, long)]
    series_label: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    output_format: Option<CliOutputFormat>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Scenebreak - screenplay scene breakdown generator
///
/// Segments screenplay text files into scenes and extracts production
/// elements (time of day, locations, characters, props and more) into
/// tabular pre-production breakdowns.
#[derive(Parser, Debug)]
#[command(name = "scenebreak")]
#[command(version = "1.0.0")]
#[command(about = "Screenplay scene breakdown generator")]
#[command(long_about = "Scenebreak segments screenplay files into scenes and extracts production elements into breakdown tables.

EXAMPLES:
    scenebreak episode3.txt                     # Breakdown using default config
    scenebreak -f episode3.txt                  # Force overwrite existing files
    scenebreak -p full episode3.txt             # Use the full column preset
    scenebreak -s 3 episode3.txt                # Stamp series label 3 into rows
    scenebreak -o json episode3.txt             # Emit JSON instead of TSV
    scenebreak --log-level debug /scripts/      # Process entire directory with debug logging
    scenebreak completions bash > scenebreak.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

COLUMN PRESETS:
    basic    - Series, scene, mode, int/ext, object, characters, props
    extended - basic plus sub-object, extras, vehicles, effects, equipment
    full     - extended plus synopsis, animals and stunts")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input screenplay file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Column preset to use (basic, extended, full)
    #[arg(short, long)]
    preset: Option<String>,

    /// Series label stamped into every row
    #[arg(short, long)]
    series_label: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    output_format: Option<CliOutputFormat>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            let mut stderr = std::io::stderr();
            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scenebreak", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let generate_args = GenerateArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                preset: cli.preset,
                series_label: cli.series_label,
                output_format: cli.output_format,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(generate_args).await
        }
    }
}

async fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        config
            .save_to_file(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(preset) = &options.preset {
        config.schema.preset = preset.clone();
    }
    if let Some(series_label) = &options.series_label {
        config.series_label = Some(series_label.clone());
    }
    if let Some(output_format) = &options.output_format {
        config.output.format = output_format.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Run the controller with the input file(s) and output directory
    if options.input_path.is_file() {
        // Process a single file
        controller
            .run(
                options.input_path.clone(),
                options
                    .input_path
                    .parent()
                    .unwrap_or(Path::new("."))
                    .to_path_buf(),
                options.force_overwrite,
            )
            .await?;
    } else if options.input_path.is_dir() {
        // Process a directory
        controller
            .run_folder(options.input_path.clone(), options.force_overwrite)
            .await?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Schema selection for projected tables
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Series/batch label applied to every processed document
    #[serde(default)]
    pub series_label: Option<String>,

    /// Processing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Schema selection: a named preset, optionally overridden by an
/// explicit column list
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SchemaConfig {
    // @field: Preset name (basic/extended/full)
    #[serde(default = "default_preset")]
    pub preset: String,

    // @field: Custom ordered column list; overrides the preset when set
    #[serde(default)]
    pub custom_columns: Option<Vec<String>>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            custom_columns: None,
        }
    }
}

/// Settings for document batch processing
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProcessingConfig {
    // @field: Max documents processed concurrently
    #[serde(default = "default_concurrent_documents")]
    pub concurrent_documents: usize,

    // @field: Whether to fall back to paragraph segmentation
    #[serde(default = "default_true")]
    pub paragraph_fallback: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            concurrent_documents: default_concurrent_documents(),
            paragraph_fallback: true,
        }
    }
}

/// Output format for projected tables
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Tab-separated values with a UTF-8 BOM
    #[default]
    Tsv,
    // @format: JSON document breakdown
    Json,
}

impl OutputFormat {
    // @returns: File extension for the format
    pub fn extension(&self) -> &str {
        match self {
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }

    // @returns: Lowercase format identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Tsv => "tsv".to_string(),
            Self::Json => "json".to_string(),
        }
    }
}

// Implement Display trait for OutputFormat
impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for OutputFormat
impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Settings for writing results
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Output directory; defaults to the input file's directory
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            directory: None,
        }
    }
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

fn default_preset() -> String {
    "basic".to_string()
}

fn default_concurrent_documents() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.processing.concurrent_documents == 0 {
            return Err(anyhow!("concurrent_documents must be at least 1"));
        }

        if let Some(columns) = &self.schema.custom_columns {
            if columns.iter().any(|c| c.trim().is_empty()) {
                return Err(anyhow!("Custom column names must not be blank"));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            schema: SchemaConfig::default(),
            series_label: None,
            processing: ProcessingConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

/*!
 * Tests for application configuration functionality
 */

use scenebreak::app_config::{Config, LogLevel, OutputFormat};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.schema.preset, "basic");
    assert!(config.schema.custom_columns.is_none());
    assert!(config.series_label.is_none());
    assert_eq!(config.processing.concurrent_documents, 4);
    assert!(config.processing.paragraph_fallback);
    assert_eq!(config.output.format, OutputFormat::Tsv);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Zero concurrency is rejected
    config.processing.concurrent_documents = 0;
    assert!(config.validate().is_err());
    config.processing.concurrent_documents = 2;
    assert!(config.validate().is_ok());

    // Blank custom column names are rejected
    config.schema.custom_columns = Some(vec!["Сцена".to_string(), "  ".to_string()]);
    assert!(config.validate().is_err());
    config.schema.custom_columns = Some(vec!["Сцена".to_string()]);
    assert!(config.validate().is_ok());
}

/// Test round-tripping a config through a JSON file
#[test]
fn test_config_saveAndLoad_shouldRoundTrip() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.schema.preset = "full".to_string();
    config.series_label = Some("7".to_string());
    config.output.format = OutputFormat::Json;
    config.save_to_file(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.schema.preset, "full");
    assert_eq!(loaded.series_label.as_deref(), Some("7"));
    assert_eq!(loaded.output.format, OutputFormat::Json);
    Ok(())
}

/// Test that partial config files fill missing fields with defaults
#[test]
fn test_config_fromFile_withPartialJson_shouldApplyDefaults() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&dir, "conf.json", r#"{"series_label": "3"}"#)?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.series_label.as_deref(), Some("3"));
    assert_eq!(config.schema.preset, "basic");
    assert_eq!(config.processing.concurrent_documents, 4);
    Ok(())
}

/// Test that a malformed config file is a load error
#[test]
fn test_config_fromFile_withMalformedJson_shouldError() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&dir, "conf.json", "{not json")?;

    assert!(Config::from_file(&path).is_err());
    Ok(())
}

/// Test output format parsing
#[test]
fn test_outputFormat_fromStr_shouldParseKnownFormats() {
    assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("xml".parse::<OutputFormat>().is_err());
}

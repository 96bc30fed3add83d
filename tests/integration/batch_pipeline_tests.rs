/*!
 * Integration tests for concurrent batch processing and the controller
 */

use anyhow::Result;
use std::fs;

use scenebreak::app_config::{Config, OutputFormat};
use scenebreak::app_controller::Controller;
use scenebreak::extractor::ElementExtractor;
use scenebreak::pipeline::{BatchProcessor, BreakdownPipeline};
use scenebreak::segmenter::SceneSegmenter;
use scenebreak::ScriptDocument;

use crate::common;

fn processor(concurrency: usize) -> BatchProcessor {
    let pipeline = BreakdownPipeline::new(
        SceneSegmenter::with_defaults(),
        ElementExtractor::with_defaults(),
    );
    BatchProcessor::new(pipeline, concurrency)
}

/// Test that batch results come back in submission order regardless of
/// concurrency level
#[tokio::test]
async fn test_batchProcessor_withManyDocuments_shouldPreserveOrder() {
    let documents: Vec<ScriptDocument> = (0..20)
        .map(|i| {
            ScriptDocument::new(
                &format!("doc{:02}.txt", i),
                common::sample_screenplay(),
            )
        })
        .collect();

    let results = processor(8).process_batch(documents, |_, _| {}).await;

    assert_eq!(results.len(), 20);
    for (i, result) in results.iter().enumerate() {
        let breakdown = result.as_ref().expect("document should process");
        assert_eq!(breakdown.source_id, format!("doc{:02}.txt", i));
    }
}

/// Test that a failing document occupies its result slot without
/// affecting its siblings
#[tokio::test]
async fn test_batchProcessor_withOneEmptyDocument_shouldIsolateFailure() {
    let documents = vec![
        ScriptDocument::new("good1.txt", common::sample_screenplay()),
        ScriptDocument::new("bad.txt", "   "),
        ScriptDocument::new("good2.txt", common::sample_screenplay()),
    ];

    let results = processor(2).process_batch(documents, |_, _| {}).await;

    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
}

/// Test the controller end to end over a folder of screenplays
#[tokio::test]
async fn test_controller_runFolder_shouldWriteBreakdownPerFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_screenplay(&dir, "ep1.txt")?;
    common::create_test_screenplay(&dir, "ep2.txt")?;

    let controller = Controller::with_config(Config::default())?;
    controller.run_folder(dir.clone(), false).await?;

    let out1 = dir.join("ep1.breakdown.tsv");
    let out2 = dir.join("ep2.breakdown.tsv");
    assert!(out1.exists());
    assert!(out2.exists());

    let content = fs::read_to_string(&out1)?;
    assert!(content.starts_with('\u{FEFF}'));
    // Header plus one line per scene
    assert_eq!(content.trim_end().lines().count(), 3);
    Ok(())
}

/// Test that existing breakdowns are skipped unless forced
#[tokio::test]
async fn test_controller_run_existingOutput_shouldSkipWithoutForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let input = common::create_test_screenplay(&dir, "ep1.txt")?;
    let output = dir.join("ep1.breakdown.tsv");
    fs::write(&output, "sentinel")?;

    let controller = Controller::with_config(Config::default())?;

    // Without force the sentinel survives
    controller.run(input.clone(), dir.clone(), false).await?;
    assert_eq!(fs::read_to_string(&output)?, "sentinel");

    // With force it is replaced by a real breakdown
    controller.run(input, dir.clone(), true).await?;
    assert!(fs::read_to_string(&output)?.starts_with('\u{FEFF}'));
    Ok(())
}

/// Test JSON output through the controller
#[tokio::test]
async fn test_controller_run_withJsonFormat_shouldWriteBreakdownJson() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_screenplay(&dir, "ep1.txt")?;

    let mut config = Config::default();
    config.output.format = OutputFormat::Json;
    config.series_label = Some("1".to_string());

    let controller = Controller::with_config(config)?;
    controller.run(input, dir.clone(), false).await?;

    let content = fs::read_to_string(dir.join("ep1.breakdown.json"))?;
    assert!(content.contains("\"source_id\": \"ep1.txt\""));
    assert!(content.contains("\"series_label\": \"1\""));
    Ok(())
}

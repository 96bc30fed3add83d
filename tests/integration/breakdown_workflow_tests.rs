/*!
 * Integration tests for the full breakdown workflow
 */

use anyhow::Result;

use scenebreak::document::{Setting, TimeOfDay};
use scenebreak::extractor::ElementExtractor;
use scenebreak::pipeline::BreakdownPipeline;
use scenebreak::projector::{ColumnSchema, SchemaPreset, TableProjector};
use scenebreak::segmenter::SceneSegmenter;
use scenebreak::ScriptDocument;

use crate::common;

fn pipeline() -> BreakdownPipeline {
    BreakdownPipeline::new(
        SceneSegmenter::with_defaults(),
        ElementExtractor::with_defaults(),
    )
}

/// Test that a screenplay flows through segmentation, extraction and
/// projection into a complete table
#[test]
fn test_breakdownWorkflow_withSampleScreenplay_shouldProduceFullRows() -> Result<()> {
    let document =
        ScriptDocument::new("ep3.txt", common::sample_screenplay()).with_series_label("3");

    let breakdown = pipeline().process(&document)?;
    assert_eq!(breakdown.scene_count(), 2);

    let first = &breakdown.records[0];
    assert_eq!(first.scene.scene_number, "1");
    assert_eq!(first.elements.time_of_day, Some(TimeOfDay::Day));
    assert_eq!(first.elements.setting, Some(Setting::Exterior));
    assert_eq!(first.elements.location_object.as_deref(), Some("ЧЕЛЮСКИН"));
    assert_eq!(first.elements.location_sub_object.as_deref(), Some("ПАЛУБА"));
    assert_eq!(first.elements.characters, vec!["Сомов"]);
    assert!(first.elements.extras.contains(&"Массовка (10)".to_string()));

    let second = &breakdown.records[1];
    assert_eq!(second.scene.scene_number, "2");
    assert_eq!(second.elements.time_of_day, Some(TimeOfDay::Night));
    assert_eq!(second.elements.setting, Some(Setting::Interior));
    assert_eq!(
        second.elements.location_sub_object.as_deref(),
        Some("КАЮТ-КОМПАНИЯ")
    );
    assert_eq!(second.elements.characters, vec!["Кренкель"]);
    assert!(second.elements.props.iter().any(|p| p == "радио"));

    // Project the breakdown through the full preset
    let schema = ColumnSchema::from_preset(SchemaPreset::Full);
    let rows = TableProjector::new().project(
        &breakdown.records,
        &schema,
        breakdown.series_label.as_deref(),
    );

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Серия"), Some("3"));
    assert_eq!(rows[0].get("Режим"), Some("День"));
    assert_eq!(rows[1].get("Режим"), Some("Ночь"));
    assert_eq!(rows[1].get("Инт / нат"), Some("Инт"));
    Ok(())
}

/// Test that processing is deterministic end to end
#[test]
fn test_breakdownWorkflow_repeatedRuns_shouldBeIdentical() -> Result<()> {
    let document = ScriptDocument::new("ep3.txt", common::sample_screenplay());
    let pipeline = pipeline();

    let first = pipeline.process(&document)?;
    let second = pipeline.process(&document)?;

    assert_eq!(first.scene_count(), second.scene_count());
    for (a, b) in first.records.iter().zip(second.records.iter()) {
        assert_eq!(a.scene.scene_number, b.scene.scene_number);
        assert_eq!(a.elements, b.elements);
    }
    Ok(())
}

/// Test that an unformatted document still yields scenes via fallback
#[test]
fn test_breakdownWorkflow_withUnformattedProse_shouldUseParagraphs() -> Result<()> {
    let document = ScriptDocument::new(
        "prose.txt",
        "Он вошел в кабинет и положил документы на стол.\n\nНочью пошел снег.",
    );

    let breakdown = pipeline().process(&document)?;
    assert_eq!(breakdown.scene_count(), 2);
    assert_eq!(breakdown.records[0].scene.scene_number, "1");
    assert_eq!(
        breakdown.records[1].elements.time_of_day,
        Some(TimeOfDay::Night)
    );
    Ok(())
}

/// Test that an empty document is the only processing error
#[test]
fn test_breakdownWorkflow_withEmptyDocument_shouldFail() {
    let document = ScriptDocument::new("empty.txt", "\n\n  \n");
    assert!(pipeline().process(&document).is_err());
}

/*!
 * Tests for file and folder utilities
 */

use std::fs;

use scenebreak::file_utils::FileManager;
use scenebreak::projector::{ColumnSchema, SchemaPreset, TableProjector};
use scenebreak::document::{ElementSet, Scene, SceneRecord};

use crate::common;

/// Test screenplay discovery returns only .txt files, sorted
#[test]
fn test_findFiles_withMixedDirectory_shouldReturnSortedTxt() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "episode2.txt", "x")?;
    common::create_test_file(&dir, "episode1.txt", "x")?;
    common::create_test_file(&dir, "notes.md", "x")?;

    let files = FileManager::find_files(&dir, "txt")?;
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("episode1.txt"));
    assert!(files[1].ends_with("episode2.txt"));
    Ok(())
}

/// Test document reading: BOM stripping and source id assignment
#[test]
fn test_readDocument_withBomPrefixedFile_shouldCleanText() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&dir, "ep5.txt", "\u{FEFF}СЦЕНА 1. ДВОР\nТекст.")?;

    let document = FileManager::read_document(&path)?;
    assert_eq!(document.source_id, "ep5.txt");
    assert!(document.text.starts_with("СЦЕНА"));
    Ok(())
}

/// Test delimited output: BOM, header row, escaping of multi-line cells
#[test]
fn test_writeDelimited_withMultilineCells_shouldQuoteThem() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.tsv");

    let record = SceneRecord {
        scene: Scene::new("1".to_string(), "1.".to_string(), "тело".to_string(), 0, (0, 10)),
        elements: ElementSet {
            props: vec!["радио".to_string()],
            vehicles: vec!["машина".to_string()],
            ..ElementSet::default()
        },
    };

    let schema = ColumnSchema::custom(vec![
        "Сцена".to_string(),
        "Реквизит / Транспорт".to_string(),
    ]);
    let rows = TableProjector::new().project(&[record], &schema, Some("1"));
    FileManager::write_delimited(&path, &schema, &rows)?;

    let content = fs::read_to_string(&path)?;
    assert!(content.starts_with('\u{FEFF}'));

    let mut lines = content.trim_start_matches('\u{FEFF}').lines();
    assert_eq!(lines.next(), Some("Серия\tСцена\tРеквизит / Транспорт"));
    // The combined cell is multi-line, so it must be quoted
    assert!(content.contains("\"Реквизит: радио\nТранспорт: машина\""));
    Ok(())
}

/// Test JSON output of a breakdown structure
#[test]
fn test_writeJson_withBreakdown_shouldSerializePretty() -> anyhow::Result<()> {
    use scenebreak::document::DocumentBreakdown;

    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.json");

    let breakdown = DocumentBreakdown {
        source_id: "ep1.txt".to_string(),
        series_label: Some("1".to_string()),
        records: vec![],
    };
    FileManager::write_json(&path, &breakdown)?;

    let content = fs::read_to_string(&path)?;
    assert!(content.contains("\"source_id\": \"ep1.txt\""));
    Ok(())
}

/// Test output path generation
#[test]
fn test_generateOutputPath_shouldUseBreakdownSuffix() {
    let path = FileManager::generate_output_path("in/ep7.txt", "out", "json");
    assert_eq!(path, std::path::PathBuf::from("out/ep7.breakdown.json"));
}

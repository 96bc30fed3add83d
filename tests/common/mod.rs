/*!
 * Common test utilities for the scenebreak test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample screenplay file for testing
pub fn create_test_screenplay(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_screenplay())
}

/// A small two-scene screenplay in the typical shooting-script shape
pub fn sample_screenplay() -> &'static str {
    "СЦЕНА 1. ЧЕЛЮСКИН. ПАЛУБА – ДЕНЬ\n\
СОМОВ\n\
Смотрит на лед. Рядом стоит ящик с инструментами.\n\
Массовка: матросы (10).\n\
\n\
СЦЕНА 2. ЧЕЛЮСКИН. КАЮТ-КОМПАНИЯ – НОЧЬ\n\
КРЕНКЕЛЬ\n\
Настраивает радио. За окном метель.\n"
}

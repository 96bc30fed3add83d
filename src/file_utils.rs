use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::document::ScriptDocument;
use crate::projector::{ColumnSchema, TableRow};

// @module: File and directory utilities

// UTF-8 byte order mark prepended to delimited output so spreadsheet
// tools pick the right encoding for Cyrillic text
const UTF8_BOM: char = '\u{FEFF}';

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a projected breakdown
    // @params: input_file, output_dir, extension
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        extension: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push_str(".breakdown.");
        output_filename.push_str(extension);

        output_dir.join(output_filename)
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(&normalized_ext[1..]) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        // Deterministic ordering independent of directory walk order
        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Read a screenplay file into a document, using the file name as the
    /// source identifier
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<ScriptDocument> {
        let path = path.as_ref();
        let mut text = Self::read_to_string(path)?;

        // Strip a leading BOM left over from Windows-side editors
        if text.starts_with(UTF8_BOM) {
            text.remove(0);
        }

        let source_id = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(ScriptDocument::new(&source_id, &text))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Serialize a value to pretty JSON and write it out
    pub fn write_json<P: AsRef<Path>, T: serde::Serialize>(path: P, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)
            .context("Failed to serialize breakdown to JSON")?;
        Self::write_to_file(path, &content)
    }

    /// Write projected rows as a delimited table with a header line.
    ///
    /// Tab-separated; a UTF-8 BOM is written first so spreadsheet imports
    /// keep Cyrillic intact. Cells containing the delimiter, quotes or
    /// newlines are quoted with internal quotes doubled.
    pub fn write_delimited<P: AsRef<Path>>(
        path: P,
        schema: &ColumnSchema,
        rows: &[TableRow],
    ) -> Result<()> {
        let mut content = String::new();
        content.push(UTF8_BOM);

        let header: Vec<String> = schema
            .columns()
            .iter()
            .map(|c| Self::escape_cell(c))
            .collect();
        content.push_str(&header.join("\t"));
        content.push('\n');

        for row in rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|(_, value)| Self::escape_cell(value))
                .collect();
            content.push_str(&cells.join("\t"));
            content.push('\n');
        }

        Self::write_to_file(path, &content)
    }

    fn escape_cell(value: &str) -> String {
        if value.contains('\t') || value.contains('\n') || value.contains('"') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

/*!
 * Scene segmentation.
 *
 * Splits a document's text into an ordered sequence of scenes. Heading
 * positions are found with the priority-ordered grammar set; each scene's
 * body spans its heading's end to the next heading's start. Documents
 * with no recognizable heading at all fall back to blank-line paragraph
 * splitting, so non-empty input never produces zero scenes.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::Scene;

use super::grammar::{extract_scene_number, match_heading};

// Blank-line paragraph separator for the fallback path
static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Configuration for scene segmentation.
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Whether to fall back to paragraph splitting when no heading matches
    pub paragraph_fallback: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            paragraph_fallback: true,
        }
    }
}

/// Scene segmenter over decoded screenplay text.
#[derive(Debug, Default)]
pub struct SceneSegmenter {
    config: SegmenterConfig,
}

impl SceneSegmenter {
    /// Create a segmenter with the given configuration.
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Create a segmenter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SegmenterConfig::default())
    }

    /// Segment document text into an ordered list of scenes.
    ///
    /// Returns an empty list only for whitespace-only input.
    pub fn segment(&self, text: &str) -> Vec<Scene> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let headings = self.find_headings(text);
        debug!("Found {} scene headings", headings.len());

        if headings.is_empty() {
            if self.config.paragraph_fallback {
                return self.segment_paragraphs(text);
            }
            return Vec::new();
        }

        let mut scenes = Vec::with_capacity(headings.len());

        for (i, (pos, header)) in headings.iter().enumerate() {
            let start = *pos;
            let end = headings
                .get(i + 1)
                .map(|(next_pos, _)| *next_pos)
                .unwrap_or(text.len());

            let segment = text[start..end].trim();
            let first_line = segment.lines().next().unwrap_or(header.as_str());

            // Re-run number extraction on the full first line; the heading
            // match itself may have consumed only part of it.
            let scene_number =
                extract_scene_number(first_line).unwrap_or_else(|| (i + 1).to_string());

            // Strip only the matched header substring; the remainder of
            // the heading line belongs to the body.
            let body = if let Some(rest) = segment.strip_prefix(header.as_str()) {
                rest.trim()
            } else {
                segment
            };

            scenes.push(Scene::new(
                scene_number,
                first_line.trim().to_string(),
                body.to_string(),
                i,
                (start, end),
            ));
        }

        scenes
    }

    /// Scan the document line by line for heading matches.
    ///
    /// Returns `(byte_offset, matched_header_text)` pairs in document
    /// order. Each line is tested against the grammar list once; the
    /// first matching grammar wins.
    fn find_headings(&self, text: &str) -> Vec<(usize, String)> {
        let mut headings = Vec::new();
        let mut offset = 0;

        for line in text.split('\n') {
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();

            if let Some((_, matched)) = match_heading(trimmed.trim_end()) {
                headings.push((offset + indent, matched.to_string()));
            }

            offset += line.len() + 1; // account for the split '\n'
        }

        headings
    }

    /// Fallback segmentation: blank-line-delimited paragraphs with
    /// sequential numbering starting at 1.
    fn segment_paragraphs(&self, text: &str) -> Vec<Scene> {
        debug!("No headings found, falling back to paragraph segmentation");

        let mut scenes = Vec::new();
        let mut cursor = 0;
        let mut order_index = 0;

        for part in PARAGRAPH_SPLIT_RE.split(text) {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                cursor += part.len();
                continue;
            }

            // Byte span of this paragraph within the source text
            let start = text[cursor..]
                .find(trimmed)
                .map(|p| cursor + p)
                .unwrap_or(cursor);
            let end = start + trimmed.len();

            let first_line = trimmed.lines().next().unwrap_or("");
            let scene_number = extract_scene_number(first_line)
                .unwrap_or_else(|| (order_index + 1).to_string());

            scenes.push(Scene::new(
                scene_number,
                first_line.to_string(),
                trimmed.to_string(),
                order_index,
                (start, end),
            ));

            order_index += 1;
            cursor = end;
        }

        scenes
    }
}

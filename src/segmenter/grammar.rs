/*!
 * Heading grammars for scene detection.
 *
 * Scene headings come in several competing shapes. Each shape is one
 * grammar: a named, anchored pattern. Grammars form an explicit ordered
 * list evaluated top-to-bottom per candidate line; the first match wins
 * and lower-priority grammars are never consulted for that line. This
 * keeps tie-break behavior auditable and testable per rule.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::number::normalize_scene_number;

/// The shape a heading grammar recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarKind {
    /// "СЦЕНА 12" / "SCENE 4A" keyword header
    Keyword,
    /// "ИНТ." / "НАТ." / "INT." / "EXT." script marker (carries no number)
    SettingMarker,
    /// "15-N6-04." complex code terminated by `.` or `)`
    ComplexCode,
    /// "3/П" slash-separated code
    SlashCode,
    /// "22Б" simple number with optional letter suffix
    SimpleNumber,
    /// "17" standalone bare number on its own line
    BareNumber,
}

/// One heading grammar: a kind plus its anchored pattern.
#[derive(Debug)]
pub struct HeadingGrammar {
    pub kind: GrammarKind,
    pattern: Regex,
}

impl HeadingGrammar {
    fn new(kind: GrammarKind, pattern: &str) -> Self {
        Self {
            kind,
            // Grammar patterns are compile-time constants
            pattern: Regex::new(pattern).expect("invalid heading grammar"),
        }
    }

    /// Match this grammar against a line with leading whitespace removed.
    /// Returns the matched header substring on success.
    pub fn match_line<'t>(&self, line: &'t str) -> Option<&'t str> {
        self.pattern.find(line).map(|m| m.as_str())
    }
}

/// The full grammar set in priority order.
pub static HEADING_GRAMMARS: Lazy<Vec<HeadingGrammar>> = Lazy::new(|| {
    vec![
        HeadingGrammar::new(
            GrammarKind::Keyword,
            r"^(?:СЦЕНА|Сцена|сцена|SCENE|Scene)\s*[:№#]?\s*[0-9][0-9А-ЯЁA-Za-z/\-]*",
        ),
        HeadingGrammar::new(
            GrammarKind::SettingMarker,
            r"^(?:ИНТ|НАТ|INT/EXT|INT|EXT)\.",
        ),
        HeadingGrammar::new(
            GrammarKind::ComplexCode,
            r"^\d{1,4}(?:-?[А-ЯЁ])?(?:[-–]?[NnНн]\d+)?(?:-\d+)*\s*[.)]",
        ),
        HeadingGrammar::new(GrammarKind::SlashCode, r"^\d{1,4}\s*/\s*[0-9А-ЯЁа-яёA-Za-z]+"),
        HeadingGrammar::new(GrammarKind::SimpleNumber, r"^\d{1,4}[А-ЯЁ]?\b"),
        HeadingGrammar::new(GrammarKind::BareNumber, r"^\d{1,4}\s*$"),
    ]
});

// Number-extraction patterns, tried in order against a scene's first line.
// Slash pairs are checked before plain codes so "3/П" is not claimed as a
// bare "3". All captures feed normalize_scene_number, so keyword captures
// and bare codes share the same canonical forms.
static KEYWORD_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:СЦЕНА|Сцена|сцена|SCENE|Scene)\s*[:№#]?\s*([0-9][0-9А-ЯЁA-Za-z/\-]*)")
        .unwrap()
});

static SLASH_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,4})\s*/\s*([0-9А-ЯЁа-яёA-Za-z]+)").unwrap()
});

// Covers 1, 7., 22-Б, 11N2, 11-N2, 15-N6-04
static CODE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,4}(?:-?[А-ЯЁ])?(?:[-–]?[NnНн]\d+)?(?:-\d+)*)").unwrap()
});

static SIMPLE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,4}[А-ЯЁ]?)").unwrap()
});

/// Extract a normalized scene number from a heading line, if any pattern
/// matches. First pattern wins.
pub fn extract_scene_number(header_line: &str) -> Option<String> {
    if let Some(caps) = KEYWORD_NUMBER_RE.captures(header_line) {
        return non_empty(normalize_scene_number(&caps[1]));
    }
    if let Some(caps) = SLASH_NUMBER_RE.captures(header_line) {
        let raw = format!("{}/{}", &caps[1], &caps[2]);
        return non_empty(normalize_scene_number(&raw));
    }
    if let Some(caps) = CODE_NUMBER_RE.captures(header_line) {
        return non_empty(normalize_scene_number(&caps[1]));
    }
    if let Some(caps) = SIMPLE_NUMBER_RE.captures(header_line) {
        return non_empty(normalize_scene_number(&caps[1]));
    }
    None
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Try every heading grammar against one line (already trimmed at the
/// start). Returns the winning grammar's kind and matched header text.
pub fn match_heading(line: &str) -> Option<(GrammarKind, &str)> {
    for grammar in HEADING_GRAMMARS.iter() {
        if let Some(matched) = grammar.match_line(line) {
            return Some((grammar.kind, matched));
        }
    }
    None
}

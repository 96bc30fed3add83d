/*!
 * Scene number normalization.
 *
 * Raw heading captures arrive in several competing spellings
 * (`11N2`, `11-N2`, `3/П`, `22-Б`, `7.`). Normalization folds them into a
 * single canonical form so that two spellings of the same heading compare
 * equal. Normalization is idempotent.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// <num>N<num2> with optional hyphen/dash, Latin or Cyrillic marker
static N_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*[-–]?\s*[NnНн](\d+)$").unwrap()
});

// <num>/<code>
static SLASH_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*/\s*(\w+)$").unwrap()
});

/// Normalize a raw scene-number capture into its canonical form.
///
/// Rules, in order:
/// - surrounding whitespace is trimmed;
/// - trailing sentence punctuation captured by accident is stripped;
/// - `<num>N<num2>` (any of `11N2`, `11-N2`, `11Н2`) becomes `<num>-N<num2>`;
/// - `<num>/<code>` stays slash-joined;
/// - everything else passes through unchanged.
pub fn normalize_scene_number(raw: &str) -> String {
    let mut s = raw.trim().to_string();
    while s.ends_with(['.', ')', ':', ',', ';']) {
        s.pop();
    }
    let s = s.trim();

    if let Some(caps) = N_CODE_RE.captures(s) {
        return format!("{}-N{}", &caps[1], &caps[2]);
    }
    if let Some(caps) = SLASH_CODE_RE.captures(s) {
        return format!("{}/{}", &caps[1], &caps[2]);
    }

    s.to_string()
}

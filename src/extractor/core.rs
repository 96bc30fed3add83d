/*!
 * Production-element extraction from scene body text.
 *
 * `extract` is a pure function over the text: the same input always
 * yields the same `ElementSet`, no strategy may panic on malformed input,
 * and an unmatched attribute is absent rather than an error. Each
 * attribute has its own strategy; strategies never block each other.
 *
 * Per-keyword regexes are compiled once at construction so matching stays
 * near-linear in text length per scene.
 */

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::document::{ElementSet, Setting, TimeOfDay};

use super::gazetteer::GazetteerSet;
use super::ner::{EntityKind, EntityTagger, NoopEntityTagger, TaggedEntity};

/// Pattern for ALL CAPS lines (character cues in scripts).
static ALLCAP_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-ZА-ЯЁ\s\-]{2,}$").expect("Invalid all-caps regex")
});

/// Explicit "Объект: X. Подобъект: Y" marked pattern.
static EXPLICIT_LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Объект[:\s]+([^.\n]+)\.?\s*(?:Подобъект[:\s]+([^.\n]+))?")
        .expect("Invalid explicit location regex")
});

/// Script-header pattern: "ЧЕЛЮСКИН. КАЮТ-КОМПАНИЯ – НОЧЬ".
/// Same-line whitespace only, so captures never run into the next line.
static SCRIPT_LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([А-ЯЁ][А-ЯЁ \t\-]+)\.[ \t]*([А-ЯЁ][А-ЯЁ \t\-]+(?:[ \t]*[–—\-][ \t]*[А-ЯЁ \t]+)?)")
        .expect("Invalid script location regex")
});

/// Trailing time-of-day suffix inside a sub-object capture.
static TIME_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[–—\-]\s*(?i:ДЕНЬ|НОЧЬ|УТРО|ВЕЧЕР)\s*$")
        .expect("Invalid time suffix regex")
});

/// Configuration for element extraction.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Maximum word count for an all-caps line to count as a character cue
    pub max_character_cue_words: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_character_cue_words: 4,
        }
    }
}

/// One precompiled gazetteer keyword.
struct KeywordMatcher {
    keyword: String,
    /// Case-insensitive prefix match with inflected tail: `\bkw\w*`
    detect: Regex,
    /// Trailing parenthesized count: `kw ... (N)`
    count: Regex,
}

impl KeywordMatcher {
    fn new(keyword: &str) -> Self {
        let escaped = regex::escape(keyword);
        Self {
            keyword: keyword.to_string(),
            detect: Regex::new(&format!(r"(?i)\b{escaped}[\wа-яё]*"))
                .expect("invalid keyword pattern"),
            count: Regex::new(&format!(r"(?i)\b{escaped}[^()\n]*\((\d+)\)"))
                .expect("invalid count pattern"),
        }
    }

    /// First match position and matched (inflected) text, if any.
    fn find<'t>(&self, text: &'t str) -> Option<(usize, &'t str)> {
        self.detect.find(text).map(|m| (m.start(), m.as_str()))
    }

    /// Trailing parenthesized integer after the keyword, if present.
    fn find_count(&self, text: &str) -> Option<String> {
        self.count
            .captures(text)
            .map(|caps| caps[1].to_string())
    }
}

fn compile_matchers(keywords: &[String]) -> Vec<KeywordMatcher> {
    keywords.iter().map(|kw| KeywordMatcher::new(kw)).collect()
}

/// How a matched gazetteer keyword is rendered in the element set.
#[derive(Debug, Clone, Copy)]
enum RenderStyle {
    /// The longest word-boundary match starting at the keyword (inflected)
    Inflected,
    /// The canonical keyword, capitalized
    Canonical,
    /// Capitalized keyword plus count: "Keyword (N)" or "Keyword (?)"
    CanonicalWithCount,
    /// Keyword as-is plus optional count: "kw (N)" or "kw"
    KeywordOptionalCount,
}

/// Element extractor over one scene's body text.
pub struct ElementExtractor {
    config: ExtractorConfig,
    gazetteers: GazetteerSet,
    tagger: Box<dyn EntityTagger>,

    location_matchers: Vec<KeywordMatcher>,
    time_matchers: Vec<(Regex, TimeOfDay)>,
    interior_matchers: Vec<KeywordMatcher>,
    exterior_matchers: Vec<KeywordMatcher>,
    extras_matchers: Vec<KeywordMatcher>,
    props_matchers: Vec<KeywordMatcher>,
    vehicles_matchers: Vec<KeywordMatcher>,
    sfx_matchers: Vec<KeywordMatcher>,
    equipment_matchers: Vec<KeywordMatcher>,
    animals_matchers: Vec<KeywordMatcher>,
    stunts_matchers: Vec<KeywordMatcher>,
}

impl ElementExtractor {
    /// Create an extractor with the given keyword tables and tagger.
    pub fn new(gazetteers: GazetteerSet, tagger: Box<dyn EntityTagger>) -> Self {
        Self::with_config(ExtractorConfig::default(), gazetteers, tagger)
    }

    /// Create an extractor with explicit configuration.
    pub fn with_config(
        config: ExtractorConfig,
        gazetteers: GazetteerSet,
        tagger: Box<dyn EntityTagger>,
    ) -> Self {
        // Exact word match for time surfaces; the lexicon already carries
        // the inflected forms it accepts.
        let time_matchers = gazetteers
            .time_lexicon
            .iter()
            .map(|(surface, canonical)| {
                let escaped = regex::escape(surface);
                (
                    Regex::new(&format!(r"(?i)\b{escaped}\b"))
                        .expect("invalid time pattern"),
                    *canonical,
                )
            })
            .collect();

        Self {
            location_matchers: compile_matchers(&gazetteers.locations),
            time_matchers,
            interior_matchers: compile_matchers(&gazetteers.interior),
            exterior_matchers: compile_matchers(&gazetteers.exterior),
            extras_matchers: compile_matchers(&gazetteers.extras),
            props_matchers: compile_matchers(&gazetteers.props),
            vehicles_matchers: compile_matchers(&gazetteers.vehicles),
            sfx_matchers: compile_matchers(&gazetteers.special_effects),
            equipment_matchers: compile_matchers(&gazetteers.equipment),
            animals_matchers: compile_matchers(&gazetteers.animals),
            stunts_matchers: compile_matchers(&gazetteers.stunts),
            config,
            gazetteers,
            tagger,
        }
    }

    /// Create an extractor with default gazetteers and no NLP backend.
    pub fn with_defaults() -> Self {
        Self::new(GazetteerSet::default(), Box::new(NoopEntityTagger))
    }

    /// Get the configured keyword tables.
    pub fn gazetteers(&self) -> &GazetteerSet {
        &self.gazetteers
    }

    /// Derive all production elements from one scene's body text.
    pub fn extract(&self, text: &str) -> ElementSet {
        if text.trim().is_empty() {
            return ElementSet::default();
        }

        // Tag once; both the character and location strategies consume it.
        let entities = match self.tagger.tag(text) {
            Ok(entities) => entities,
            Err(e) => {
                debug!("Entity tagger '{}' failed, skipping: {}", self.tagger.name(), e);
                Vec::new()
            }
        };

        let (location_object, location_sub_object) = self.extract_location(text, &entities);

        ElementSet {
            time_of_day: self.extract_time_of_day(text),
            setting: self.extract_setting(text),
            location_object,
            location_sub_object,
            characters: self.extract_characters(text, &entities),
            extras: self.extract_category(text, &self.extras_matchers, RenderStyle::CanonicalWithCount),
            props: self.extract_category(text, &self.props_matchers, RenderStyle::Inflected),
            vehicles: self.extract_category(text, &self.vehicles_matchers, RenderStyle::Inflected),
            special_effects: self.extract_category(text, &self.sfx_matchers, RenderStyle::Canonical),
            equipment: self.extract_category(text, &self.equipment_matchers, RenderStyle::KeywordOptionalCount),
            animals: self.extract_category(text, &self.animals_matchers, RenderStyle::Inflected),
            stunts: self.extract_category(text, &self.stunts_matchers, RenderStyle::Canonical),
        }
    }

    /// Time of day: lexicon hits, canonical priority breaks ties.
    fn extract_time_of_day(&self, text: &str) -> Option<TimeOfDay> {
        let mut found = [false; 4];
        for (pattern, canonical) in &self.time_matchers {
            if pattern.is_match(text) {
                found[*canonical as usize] = true;
            }
        }
        TimeOfDay::PRIORITY
            .into_iter()
            .find(|t| found[*t as usize])
    }

    /// Interior/exterior: interior keywords checked first, short-circuit.
    fn extract_setting(&self, text: &str) -> Option<Setting> {
        for matcher in &self.interior_matchers {
            if matcher.find(text).is_some() {
                return Some(Setting::Interior);
            }
        }
        for matcher in &self.exterior_matchers {
            if matcher.find(text).is_some() {
                return Some(Setting::Exterior);
            }
        }
        None
    }

    /// Location: layered strategies, first success wins.
    fn extract_location(
        &self,
        text: &str,
        entities: &[TaggedEntity],
    ) -> (Option<String>, Option<String>) {
        // (a) explicit "Объект: X. Подобъект: Y"
        if let Some(caps) = EXPLICIT_LOCATION_RE.captures(text) {
            let object = caps[1].trim().to_string();
            let sub = caps.get(2).map(|m| m.as_str().trim().to_string());
            return (Some(object), sub.filter(|s| !s.is_empty()));
        }

        // (b) script header "ЧЕЛЮСКИН. КАЮТ-КОМПАНИЯ – НОЧЬ"
        if let Some(caps) = SCRIPT_LOCATION_RE.captures(text) {
            let object = caps[1].trim().to_string();
            let sub = TIME_SUFFIX_RE.replace(caps[2].trim(), "").trim().to_string();
            let sub = if sub.is_empty() { None } else { Some(sub) };
            return (Some(object), sub);
        }

        // (c) location gazetteer, ordered by first position in the text
        let mut hits: Vec<(usize, &str)> = self
            .location_matchers
            .iter()
            .filter_map(|m| m.find(text).map(|(pos, _)| (pos, m.keyword.as_str())))
            .collect();
        hits.sort_by_key(|(pos, _)| *pos);

        let mut hit_keywords = hits.iter().map(|(_, kw)| *kw);
        if let Some(first) = hit_keywords.next() {
            let sub_object = hit_keywords
                .find(|kw| *kw != first)
                .map(capitalize);
            return (Some(capitalize(first)), sub_object);
        }

        // (d) entity-recognizer fallback, filtered against known false
        // positives
        for entity in entities {
            if entity.kind == EntityKind::Location {
                let lower = entity.text.to_lowercase();
                if !self.gazetteers.location_exclusions.contains(&lower) {
                    return (Some(entity.text.clone()), None);
                }
            }
        }

        (None, None)
    }

    /// Characters: structural all-caps cues first in document order, then
    /// entity-recognizer persons not already present.
    fn extract_characters(&self, text: &str, entities: &[TaggedEntity]) -> Vec<String> {
        let mut names = Vec::new();

        for line in text.lines() {
            let s = line.trim();
            if s.chars().count() < 2 {
                continue;
            }
            if ALLCAP_LINE_RE.is_match(s)
                && s.split_whitespace().count() <= self.config.max_character_cue_words
            {
                names.push(title_case(s));
            }
        }

        for entity in entities {
            if entity.kind == EntityKind::Person {
                names.push(entity.text.clone());
            }
        }

        dedup_case_insensitive(names)
    }

    /// Shared gazetteer category extraction, ordered by match position.
    fn extract_category(
        &self,
        text: &str,
        matchers: &[KeywordMatcher],
        style: RenderStyle,
    ) -> Vec<String> {
        let mut hits: Vec<(usize, String)> = Vec::new();

        for matcher in matchers {
            let Some((pos, inflected)) = matcher.find(text) else {
                continue;
            };
            let rendered = match style {
                RenderStyle::Inflected => inflected.to_string(),
                RenderStyle::Canonical => capitalize(&matcher.keyword),
                RenderStyle::CanonicalWithCount => {
                    let count = matcher.find_count(text).unwrap_or_else(|| "?".to_string());
                    format!("{} ({})", capitalize(&matcher.keyword), count)
                }
                RenderStyle::KeywordOptionalCount => match matcher.find_count(text) {
                    Some(count) => format!("{} ({})", matcher.keyword, count),
                    None => matcher.keyword.clone(),
                },
            };
            hits.push((pos, rendered));
        }

        hits.sort_by_key(|(pos, _)| *pos);
        dedup_case_insensitive(hits.into_iter().map(|(_, r)| r).collect())
    }
}

/// Uppercase the first letter, keep the rest as-is.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Title-case a cue line for display: first letter of each word upper,
/// rest lower. Word boundaries are spaces and hyphens.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(ch);
            boundary = matches!(ch, ' ' | '-' | '\t');
        }
    }
    out
}

/// Remove case-insensitive duplicates, preserving first-seen order.
fn dedup_case_insensitive(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        if seen.insert(value.to_lowercase()) {
            out.push(value);
        }
    }
    out
}

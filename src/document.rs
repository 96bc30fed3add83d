/*!
 * Core document model types for the breakdown pipeline.
 *
 * These types provide a JSON-serializable representation of a screenplay
 * document, its segmented scenes, and the production elements extracted
 * from each scene. Scenes and element sets are immutable once created;
 * corrections happen downstream of this crate.
 */

use serde::{Deserialize, Serialize};

/// A decoded screenplay document ready for segmentation.
///
/// The text is assumed to be already encoding-normalized and size-bounded
/// by whatever decoded it. A document is consumed once by the segmenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptDocument {
    /// Source identifier (filename or series label)
    pub source_id: String,

    /// Full decoded document text
    pub text: String,

    /// Optional series/batch label associated with the whole document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_label: Option<String>,
}

impl ScriptDocument {
    /// Create a new document from decoded text.
    pub fn new(source_id: &str, text: &str) -> Self {
        Self {
            source_id: source_id.to_string(),
            text: text.to_string(),
            series_label: None,
        }
    }

    /// Set the series label for this document.
    pub fn with_series_label(mut self, label: &str) -> Self {
        self.series_label = Some(label.to_string());
        self
    }

    /// Check whether the document contains any non-whitespace text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One segmented scene.
///
/// Spans are byte offsets into the source document. `order_index` equals
/// the scene's position of first appearance and is strictly increasing
/// across a document's scenes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Normalized scene number (never empty)
    pub scene_number: String,

    /// The heading line this scene was recognized by
    pub header_text: String,

    /// Scene body text with the matched header stripped
    pub body_text: String,

    /// 0-based position in the source document
    pub order_index: usize,

    /// Byte span `[start, end)` in the source document
    pub span: (usize, usize),
}

impl Scene {
    /// Create a new scene record.
    pub fn new(
        scene_number: String,
        header_text: String,
        body_text: String,
        order_index: usize,
        span: (usize, usize),
    ) -> Self {
        Self {
            scene_number,
            header_text,
            body_text,
            order_index,
            span,
        }
    }
}

/// Canonical time-of-day values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Morning,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Display label used in breakdown tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Day => "День",
            Self::Morning => "Утро",
            Self::Evening => "Вечер",
            Self::Night => "Ночь",
        }
    }

    /// Tie-break priority when several lexicon hits disagree.
    ///
    /// Night beats day beats morning beats evening.
    pub const PRIORITY: [TimeOfDay; 4] = [
        TimeOfDay::Night,
        TimeOfDay::Day,
        TimeOfDay::Morning,
        TimeOfDay::Evening,
    ];
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Interior/exterior classification of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    Interior,
    Exterior,
}

impl Setting {
    /// Display label used in breakdown tables (Инт / Нат).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Interior => "Инт",
            Self::Exterior => "Нат",
        }
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structured production elements derived from one scene's body text.
///
/// Every attribute is optional; an unmatched attribute is absent, not an
/// error. List-valued attributes contain no case-insensitive duplicates and
/// preserve first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementSet {
    /// Shooting mode (День/Ночь/...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,

    /// Interior/exterior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<Setting>,

    /// Primary location (объект)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_object: Option<String>,

    /// Secondary location within the object (подобъект)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_sub_object: Option<String>,

    /// Character names, display-cased, first-seen order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub characters: Vec<String>,

    /// Crowd/extras entries, rendered as "Keyword (N)" or "Keyword (?)"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,

    /// Props, rendered in the inflected surface form found in the text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<String>,

    /// Picture vehicles, inflected surface form
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vehicles: Vec<String>,

    /// Special effects, canonical capitalized keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_effects: Vec<String>,

    /// Special equipment, with trailing counts when present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<String>,

    /// Animals, inflected surface form
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animals: Vec<String>,

    /// Stunt work, canonical capitalized keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stunts: Vec<String>,
}

impl ElementSet {
    /// Check whether any attribute was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.time_of_day.is_none()
            && self.setting.is_none()
            && self.location_object.is_none()
            && self.location_sub_object.is_none()
            && self.characters.is_empty()
            && self.extras.is_empty()
            && self.props.is_empty()
            && self.vehicles.is_empty()
            && self.special_effects.is_empty()
            && self.equipment.is_empty()
            && self.animals.is_empty()
            && self.stunts.is_empty()
    }
}

/// A scene paired with its extracted element set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneRecord {
    /// The segmented scene
    pub scene: Scene,

    /// Elements extracted from the scene body
    pub elements: ElementSet,
}

/// The processed breakdown of one document, scenes in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentBreakdown {
    /// Source identifier of the processed document
    pub source_id: String,

    /// Series label carried over from the document, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_label: Option<String>,

    /// One record per scene, ordered by `order_index`
    pub records: Vec<SceneRecord>,
}

impl DocumentBreakdown {
    /// Number of scenes in this breakdown.
    pub fn scene_count(&self) -> usize {
        self.records.len()
    }
}

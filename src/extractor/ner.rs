/*!
 * Optional named-entity tagging capability.
 *
 * Extraction works without any NLP backend: the rule-based strategies
 * carry the pipeline on their own, and an entity tagger only adds recall
 * for person and location names. The capability is modeled as a trait
 * with a no-op implementation so the extractor is constructible and fully
 * testable without a backend; a failing tagger is skipped, never fatal.
 */

use anyhow::Result;

/// Entity types the extractor consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Location,
}

/// One tagged entity span.
#[derive(Debug, Clone)]
pub struct TaggedEntity {
    /// Entity type
    pub kind: EntityKind,

    /// Surface text as it appears in the scene
    pub text: String,
}

impl TaggedEntity {
    /// Create a new tagged entity.
    pub fn new(kind: EntityKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Pluggable named-entity tagging capability.
pub trait EntityTagger: Send + Sync {
    /// Tag person and location entities in the given text.
    fn tag(&self, text: &str) -> Result<Vec<TaggedEntity>>;

    /// Human-readable backend name for diagnostics.
    fn name(&self) -> &str;
}

/// The absent-capability implementation: tags nothing, never fails.
#[derive(Debug, Default)]
pub struct NoopEntityTagger;

impl EntityTagger for NoopEntityTagger {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedEntity>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

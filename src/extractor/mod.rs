/*!
 * Production-element extraction.
 *
 * Derives structured attributes from one scene's body text using layered,
 * independent strategies:
 *
 * - `gazetteer`: closed keyword tables, injectable per extractor instance
 * - `ner`: optional named-entity tagging capability with a no-op default
 * - `core`: the extraction strategies and merge/tie-break policy
 */

pub use self::core::{ElementExtractor, ExtractorConfig};
pub use self::gazetteer::GazetteerSet;
pub use self::ner::{EntityKind, EntityTagger, NoopEntityTagger, TaggedEntity};

pub mod core;
pub mod gazetteer;
pub mod ner;

/*!
 * Scene segmentation for screenplay documents.
 *
 * This module turns decoded screenplay text into an ordered sequence of
 * scenes. It is split into several submodules:
 *
 * - `grammar`: priority-ordered heading grammars with first-match-wins
 *   dispatch
 * - `number`: scene-number normalization
 * - `core`: boundary computation and the paragraph fallback
 */

pub use self::core::{SceneSegmenter, SegmenterConfig};
pub use self::grammar::{extract_scene_number, match_heading, GrammarKind};
pub use self::number::normalize_scene_number;

pub mod core;
pub mod grammar;
pub mod number;

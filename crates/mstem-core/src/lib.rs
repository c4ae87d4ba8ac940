//! Shared types for the mstem rule-driven stemmer.
//!
//! - [`position`] -- affix position of a rule, decided from its anchors
//! - [`analysis`] -- the affix accumulator and the result shapes produced by
//!   the stemmer
//! - [`text`] -- canonical decomposition and `{{CLASS}}` marker helpers

pub mod analysis;
pub mod position;
pub mod text;

pub use analysis::{AffixChain, Analysis, GlossParse, Segmentation, Termination};
pub use position::Position;

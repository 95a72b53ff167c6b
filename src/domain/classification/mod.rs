//! Classification module - Behavioral archetype selection.
//!
//! Holds a fixed catalogue of six archetype definitions and, for each,
//! a declarative rule table of weighted boolean checks. Compatibility
//! with an archetype is the clamped sum of the weights of its passing
//! rules; the classifier picks the highest-scoring archetype, breaking
//! ties by the catalogue's declared priority order.
//!
//! # Components
//!
//! - `Archetype` / `ArchetypeId` / `ArchetypeProfile` - catalogue types
//! - `catalog` - the static, read-only archetype catalogue
//! - `rules` - per-archetype weighted rule tables and the rule context
//! - `ArchetypeClassifier` - the generic rule scorer and selection

mod archetype;
pub mod catalog;
mod classifier;
mod rules;

pub use archetype::{Archetype, ArchetypeId, ArchetypeProfile};
pub use classifier::ArchetypeClassifier;
pub use rules::{rules_for, Rule, RuleContext};

//! Prospect module - Intake data model.
//!
//! `ProspectInfo` carries company identity and firmographics;
//! `DiagnosticResponses` carries the questionnaire answer set. Both are
//! constructed by the external intake layer and never mutated by the
//! engine. The `answers` module is the catalogue of option strings the
//! external questionnaire configuration currently defines; the scoring
//! tables reference it so questionnaire content stays in one place.

pub mod answers;
mod info;
mod responses;

pub use info::{ContactInfo, ProspectInfo};
pub use responses::{DiagnosticResponses, DiagnosticResponsesBuilder, ResponseField};

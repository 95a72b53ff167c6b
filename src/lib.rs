//! Readiness Engine - Lead qualification for consulting diagnostics.
//!
//! This crate converts a structured questionnaire response into a
//! readiness score, a priority tier, a behavioral archetype, and a set
//! of derived sales recommendations.

pub mod domain;

//! Archetype identifiers and descriptor types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Confidence;

/// Stable identifier of a behavioral archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeId {
    TraditionalGiant,
    AmbitiousScaler,
    DigitalBeginner,
    InnovationTheater,
    DistressedFighter,
    TireKicker,
}

impl ArchetypeId {
    /// Evaluation and tie-break order: when two archetypes reach the
    /// same compatibility, the one earlier in this list wins.
    pub const PRIORITY_ORDER: [ArchetypeId; 6] = [
        ArchetypeId::TraditionalGiant,
        ArchetypeId::AmbitiousScaler,
        ArchetypeId::DigitalBeginner,
        ArchetypeId::InnovationTheater,
        ArchetypeId::DistressedFighter,
        ArchetypeId::TireKicker,
    ];

    /// Returns the stable snake_case key.
    pub fn key(&self) -> &'static str {
        match self {
            ArchetypeId::TraditionalGiant => "traditional_giant",
            ArchetypeId::AmbitiousScaler => "ambitious_scaler",
            ArchetypeId::DigitalBeginner => "digital_beginner",
            ArchetypeId::InnovationTheater => "innovation_theater",
            ArchetypeId::DistressedFighter => "distressed_fighter",
            ArchetypeId::TireKicker => "tire_kicker",
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A catalogue entry: the fixed descriptive content of one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeProfile {
    pub id: ArchetypeId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub typical_frustrations: &'static [&'static str],
    pub motivators: &'static [&'static str],
    pub expected_objections: &'static [&'static str],
    pub sales_approach: &'static [&'static str],
    pub ideal_entry_point: &'static str,
    pub expansion_potential: &'static str,
}

/// The selected archetype: catalogue content plus the compatibility
/// value the classifier computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: ArchetypeId,
    pub display_name: String,
    pub description: String,
    pub typical_frustrations: Vec<String>,
    pub motivators: Vec<String>,
    pub expected_objections: Vec<String>,
    pub sales_approach: Vec<String>,
    pub ideal_entry_point: String,
    pub expansion_potential: String,
    pub confidence: Confidence,
}

impl Archetype {
    /// Materializes a catalogue profile with its computed confidence.
    pub fn from_profile(profile: &ArchetypeProfile, confidence: Confidence) -> Self {
        Self {
            id: profile.id,
            display_name: profile.display_name.to_string(),
            description: profile.description.to_string(),
            typical_frustrations: profile
                .typical_frustrations
                .iter()
                .map(|s| s.to_string())
                .collect(),
            motivators: profile.motivators.iter().map(|s| s.to_string()).collect(),
            expected_objections: profile
                .expected_objections
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sales_approach: profile
                .sales_approach
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ideal_entry_point: profile.ideal_entry_point.to_string(),
            expansion_potential: profile.expansion_potential.to_string(),
            confidence,
        }
    }
}

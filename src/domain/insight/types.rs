//! Value records for derived recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a red flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Returns the label used in prospect-facing material.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "baja",
            Severity::Medium => "media",
            Severity::High => "alta",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category of a strategic insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Strength,
    Opportunity,
    Risk,
}

impl InsightCategory {
    /// Returns the label used in prospect-facing material.
    pub fn label(&self) -> &'static str {
        match self {
            InsightCategory::Strength => "fortaleza",
            InsightCategory::Opportunity => "oportunidad",
            InsightCategory::Risk => "riesgo",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A short-horizon recommended intervention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWin {
    pub title: String,
    pub description: String,
    pub estimated_impact: String,
    pub implementation_time: String,
    pub approximate_investment: String,
}

/// A risk signal suggesting low deal viability or high sales friction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub mitigation: String,
}

/// A category-tagged strategic observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub title: String,
    pub description: String,
    pub recommendation: String,
}

/// An expected objection paired with the suggested response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectionResponse {
    pub objection: String,
    pub response: String,
}

/// The meeting-preparation bundle handed to the salesperson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPrep {
    pub prior_research: Vec<String>,
    pub materials: Vec<String>,
    pub key_questions: Vec<String>,
    pub likely_objections: Vec<ObjectionResponse>,
    pub key_insight: String,
    /// Close-probability estimate (0-100).
    pub close_probability: u8,
}

//! The questionnaire answer set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Answers to the diagnostic questionnaire.
///
/// The motivation field is a multi-select; the remaining eleven fields
/// are single-select option strings owned by the external questionnaire
/// configuration. The engine tolerates values outside the configured
/// option sets (they score zero), so these stay plain strings rather
/// than enums. Completeness is the intake layer's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticResponses {
    /// Selected motivation tags (0..N).
    pub motivations: Vec<String>,

    // Operational diagnostic block
    pub decision_making: String,
    pub critical_processes: String,
    pub repetitive_tasks: String,
    pub information_sharing: String,
    pub technical_team: String,
    pub implementation_capacity: String,
    pub recent_investment: String,
    pub primary_frustration: String,

    // Commercial viability block
    pub urgency: String,
    pub approval_process: String,
    pub budget_bracket: String,
}

impl DiagnosticResponses {
    /// Returns a builder with every field empty.
    pub fn builder() -> DiagnosticResponsesBuilder {
        DiagnosticResponsesBuilder::default()
    }
}

/// Fluent builder for [`DiagnosticResponses`].
#[derive(Debug, Default)]
pub struct DiagnosticResponsesBuilder {
    inner: DiagnosticResponses,
}

impl DiagnosticResponsesBuilder {
    pub fn motivations<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.motivations = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn decision_making(mut self, answer: impl Into<String>) -> Self {
        self.inner.decision_making = answer.into();
        self
    }

    pub fn critical_processes(mut self, answer: impl Into<String>) -> Self {
        self.inner.critical_processes = answer.into();
        self
    }

    pub fn repetitive_tasks(mut self, answer: impl Into<String>) -> Self {
        self.inner.repetitive_tasks = answer.into();
        self
    }

    pub fn information_sharing(mut self, answer: impl Into<String>) -> Self {
        self.inner.information_sharing = answer.into();
        self
    }

    pub fn technical_team(mut self, answer: impl Into<String>) -> Self {
        self.inner.technical_team = answer.into();
        self
    }

    pub fn implementation_capacity(mut self, answer: impl Into<String>) -> Self {
        self.inner.implementation_capacity = answer.into();
        self
    }

    pub fn recent_investment(mut self, answer: impl Into<String>) -> Self {
        self.inner.recent_investment = answer.into();
        self
    }

    pub fn primary_frustration(mut self, answer: impl Into<String>) -> Self {
        self.inner.primary_frustration = answer.into();
        self
    }

    pub fn urgency(mut self, answer: impl Into<String>) -> Self {
        self.inner.urgency = answer.into();
        self
    }

    pub fn approval_process(mut self, answer: impl Into<String>) -> Self {
        self.inner.approval_process = answer.into();
        self
    }

    pub fn budget_bracket(mut self, answer: impl Into<String>) -> Self {
        self.inner.budget_bracket = answer.into();
        self
    }

    pub fn build(self) -> DiagnosticResponses {
        self.inner
    }
}

/// Identifies a single-select questionnaire field, used when reporting
/// unrecognized answers back to the intake layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseField {
    DecisionMaking,
    CriticalProcesses,
    RepetitiveTasks,
    InformationSharing,
    TechnicalTeam,
    ImplementationCapacity,
    RecentInvestment,
    PrimaryFrustration,
    Urgency,
    ApprovalProcess,
    BudgetBracket,
}

impl ResponseField {
    /// Returns the field's snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            ResponseField::DecisionMaking => "decision_making",
            ResponseField::CriticalProcesses => "critical_processes",
            ResponseField::RepetitiveTasks => "repetitive_tasks",
            ResponseField::InformationSharing => "information_sharing",
            ResponseField::TechnicalTeam => "technical_team",
            ResponseField::ImplementationCapacity => "implementation_capacity",
            ResponseField::RecentInvestment => "recent_investment",
            ResponseField::PrimaryFrustration => "primary_frustration",
            ResponseField::Urgency => "urgency",
            ResponseField::ApprovalProcess => "approval_process",
            ResponseField::BudgetBracket => "budget_bracket",
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

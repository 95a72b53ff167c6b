//! Dimension sub-score value objects.
//!
//! Each sub-score holds its named integer components plus a derived
//! total. The total is recomputed at construction and never settable;
//! components are clamped to their declared maxima.

use serde::{Deserialize, Serialize};

/// Digital maturity sub-score (0-40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalMaturity {
    data_driven_decisions: u8,
    standardized_processes: u8,
    integrated_systems: u8,
    operational_efficiency: u8,
    total: u8,
}

impl DigitalMaturity {
    /// Maximum total.
    pub const MAX: u8 = 40;

    /// Maximum per component.
    pub const COMPONENT_MAX: u8 = 10;

    /// Creates the sub-score; components clamp to their maximum and the
    /// total is the component sum.
    pub fn new(
        data_driven_decisions: u8,
        standardized_processes: u8,
        integrated_systems: u8,
        operational_efficiency: u8,
    ) -> Self {
        let data_driven_decisions = data_driven_decisions.min(Self::COMPONENT_MAX);
        let standardized_processes = standardized_processes.min(Self::COMPONENT_MAX);
        let integrated_systems = integrated_systems.min(Self::COMPONENT_MAX);
        let operational_efficiency = operational_efficiency.min(Self::COMPONENT_MAX);
        Self {
            data_driven_decisions,
            standardized_processes,
            integrated_systems,
            operational_efficiency,
            total: data_driven_decisions
                + standardized_processes
                + integrated_systems
                + operational_efficiency,
        }
    }

    pub fn data_driven_decisions(&self) -> u8 {
        self.data_driven_decisions
    }

    pub fn standardized_processes(&self) -> u8 {
        self.standardized_processes
    }

    pub fn integrated_systems(&self) -> u8 {
        self.integrated_systems
    }

    pub fn operational_efficiency(&self) -> u8 {
        self.operational_efficiency
    }

    pub fn total(&self) -> u8 {
        self.total
    }
}

/// Investment capacity sub-score (0-30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentCapacity {
    available_budget: u8,
    investment_history: u8,
    company_size: u8,
    total: u8,
}

impl InvestmentCapacity {
    /// Maximum total.
    pub const MAX: u8 = 30;

    /// Maximum for the budget component.
    pub const BUDGET_MAX: u8 = 15;

    /// Maximum for the investment-history component.
    pub const HISTORY_MAX: u8 = 10;

    /// Maximum for the company-size component.
    pub const SIZE_MAX: u8 = 5;

    /// Creates the sub-score; components clamp to their maxima and the
    /// total is the component sum.
    pub fn new(available_budget: u8, investment_history: u8, company_size: u8) -> Self {
        let available_budget = available_budget.min(Self::BUDGET_MAX);
        let investment_history = investment_history.min(Self::HISTORY_MAX);
        let company_size = company_size.min(Self::SIZE_MAX);
        Self {
            available_budget,
            investment_history,
            company_size,
            total: available_budget + investment_history + company_size,
        }
    }

    pub fn available_budget(&self) -> u8 {
        self.available_budget
    }

    pub fn investment_history(&self) -> u8 {
        self.investment_history
    }

    pub fn company_size(&self) -> u8 {
        self.company_size
    }

    pub fn total(&self) -> u8 {
        self.total
    }
}

/// Commercial viability sub-score (0-30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommercialViability {
    clear_problem: u8,
    real_urgency: u8,
    decision_power: u8,
    total: u8,
}

impl CommercialViability {
    /// Maximum total.
    pub const MAX: u8 = 30;

    /// Maximum per component.
    pub const COMPONENT_MAX: u8 = 10;

    /// Creates the sub-score; components clamp to their maximum and the
    /// total is the component sum.
    pub fn new(clear_problem: u8, real_urgency: u8, decision_power: u8) -> Self {
        let clear_problem = clear_problem.min(Self::COMPONENT_MAX);
        let real_urgency = real_urgency.min(Self::COMPONENT_MAX);
        let decision_power = decision_power.min(Self::COMPONENT_MAX);
        Self {
            clear_problem,
            real_urgency,
            decision_power,
            total: clear_problem + real_urgency + decision_power,
        }
    }

    pub fn clear_problem(&self) -> u8 {
        self.clear_problem
    }

    pub fn real_urgency(&self) -> u8 {
        self.real_urgency
    }

    pub fn decision_power(&self) -> u8 {
        self.decision_power
    }

    pub fn total(&self) -> u8 {
        self.total
    }
}

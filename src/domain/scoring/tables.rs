//! Answer-to-points lookup tables.
//!
//! The questionnaire's answer space is small, fixed, and ordinal, so a
//! direct mapping table is simpler and more auditable than a formula.
//! These tables must stay in sync with the external questionnaire
//! configuration; an answer missing from its table scores zero and is
//! reported as unrecognized rather than raising an error.

use crate::domain::foundation::{HeadcountBracket, RevenueBracket};
use crate::domain::prospect::answers;

/// Looks up an answer in a points table.
pub fn lookup(table: &[(&str, u8)], answer: &str) -> Option<u8> {
    table
        .iter()
        .find(|(option, _)| *option == answer)
        .map(|(_, points)| *points)
}

/// Decision-making style (0-10, digital maturity).
pub const DECISION_MAKING_POINTS: &[(&str, u8)] = &[
    (answers::decision_making::AUTOMATED_REPORTS, 10),
    (answers::decision_making::MANUAL_REPORTS, 7),
    (answers::decision_making::SPREADSHEETS, 5),
    (answers::decision_making::INTUITION, 3),
    (answers::decision_making::ASK_AROUND, 1),
];

/// Process standardization (0-10, digital maturity).
pub const CRITICAL_PROCESSES_POINTS: &[(&str, u8)] = &[
    (answers::critical_processes::DOCUMENTED, 10),
    (answers::critical_processes::PERSON_DEPENDENT, 5),
    (answers::critical_processes::UNDOCUMENTED, 3),
    (answers::critical_processes::EVER_CHANGING, 1),
];

/// Repetitive-task ratio (0-10, digital maturity). Inverted: less
/// repetitive work scores higher.
pub const REPETITIVE_TASKS_POINTS: &[(&str, u8)] = &[
    (answers::repetitive_tasks::UNDER_20, 10),
    (answers::repetitive_tasks::FROM_20_TO_40, 7),
    (answers::repetitive_tasks::FROM_40_TO_60, 4),
    (answers::repetitive_tasks::OVER_60, 2),
    (answers::repetitive_tasks::UNKNOWN, 0),
];

/// Information-sharing maturity (0-10, digital maturity).
pub const INFORMATION_SHARING_POINTS: &[(&str, u8)] = &[
    (answers::information_sharing::CONNECTED_SYSTEMS, 10),
    (answers::information_sharing::AD_HOC, 6),
    (answers::information_sharing::SILOED, 3),
    (answers::information_sharing::SPREADSHEET_CHAOS, 1),
];

/// Technical-team availability (0-10). Recognized for answer validation;
/// the dimension totals do not include this field.
pub const TECHNICAL_TEAM_POINTS: &[(&str, u8)] = &[
    (answers::technical_team::FULL_TEAM, 10),
    (answers::technical_team::SMALL_TEAM, 7),
    (answers::technical_team::OUTSOURCED, 4),
    (answers::technical_team::IMPROVISED, 1),
];

/// Implementation capacity (0-15). Recognized for answer validation;
/// the dimension totals do not include this field.
pub const IMPLEMENTATION_CAPACITY_POINTS: &[(&str, u8)] = &[
    (answers::implementation_capacity::BUDGET_READY, 15),
    (answers::implementation_capacity::APPROVAL_NEEDED, 10),
    (answers::implementation_capacity::NEXT_YEAR, 5),
    (answers::implementation_capacity::NO_BUDGET, 0),
];

/// Recent investment history (0-10, investment capacity).
pub const RECENT_INVESTMENT_POINTS: &[(&str, u8)] = &[
    (answers::recent_investment::SIGNIFICANT, 10),
    (answers::recent_investment::MODERATE, 7),
    (answers::recent_investment::SMALL, 4),
    (answers::recent_investment::NONE, 0),
];

/// Primary frustration (0-10, commercial viability).
pub const PRIMARY_FRUSTRATION_POINTS: &[(&str, u8)] = &[
    (answers::primary_frustration::CANNOT_SCALE, 10),
    (answers::primary_frustration::SLOW_SERVICE, 10),
    (answers::primary_frustration::MANUAL_ERRORS, 9),
    (answers::primary_frustration::NO_VISIBILITY, 8),
    (answers::primary_frustration::HIGH_COSTS, 9),
    (answers::primary_frustration::OTHER, 5),
];

/// Urgency level (0-10, commercial viability).
pub const URGENCY_POINTS: &[(&str, u8)] = &[
    (answers::urgency::IMMEDIATE, 10),
    (answers::urgency::THIS_YEAR, 7),
    (answers::urgency::EXPLORING, 3),
    (answers::urgency::JUST_LOOKING, 1),
];

/// Approval-process complexity (0-10, commercial viability).
pub const APPROVAL_PROCESS_POINTS: &[(&str, u8)] = &[
    (answers::approval_process::SOLE_DECISION_MAKER, 10),
    (answers::approval_process::PARTNERS, 7),
    (answers::approval_process::BOARD, 5),
    (answers::approval_process::COMPLEX, 2),
];

/// Budget bracket (0-15, investment capacity).
pub const BUDGET_POINTS: &[(&str, u8)] = &[
    (answers::budget::OVER_60M, 15),
    (answers::budget::FROM_30M_TO_60M, 12),
    (answers::budget::FROM_10M_TO_30M, 8),
    (answers::budget::UNDER_10M, 3),
    (answers::budget::UNDISCLOSED, 5),
];

/// Company-size points from the annual-revenue bracket (0-5).
pub fn revenue_size_points(bracket: RevenueBracket) -> u8 {
    match bracket {
        RevenueBracket::Over10000M => 5,
        RevenueBracket::From2000MTo10000M => 4,
        RevenueBracket::From500MTo2000M => 3,
        RevenueBracket::Under500M => 1,
    }
}

/// Company-size points from the headcount bracket (0-5).
pub fn headcount_size_points(bracket: HeadcountBracket) -> u8 {
    match bracket {
        HeadcountBracket::Over500 => 5,
        HeadcountBracket::From201To500 => 4,
        HeadcountBracket::From51To200 => 3,
        HeadcountBracket::From21To50 => 2,
        HeadcountBracket::UpTo20 => 1,
    }
}

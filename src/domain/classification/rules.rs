//! Per-archetype compatibility rule tables.
//!
//! Each archetype owns an independent slice of weighted boolean checks
//! evaluated against the score, the responses, and the prospect. The
//! tables are data: adding or retuning a rule never touches the scorer.

use crate::domain::foundation::{HeadcountBracket, RevenueBracket, Sector};
use crate::domain::prospect::{answers, DiagnosticResponses, ProspectInfo};
use crate::domain::scoring::DiagnosticScore;

use super::ArchetypeId;

/// Everything a rule may inspect.
pub struct RuleContext<'a> {
    pub score: &'a DiagnosticScore,
    pub responses: &'a DiagnosticResponses,
    pub prospect: &'a ProspectInfo,
}

impl RuleContext<'_> {
    fn has_motivation(&self, tag: &str) -> bool {
        self.responses.motivations.iter().any(|m| m == tag)
    }

    fn sole_motivation(&self, tag: &str) -> bool {
        self.responses.motivations.len() == 1 && self.responses.motivations[0] == tag
    }
}

/// A weighted boolean check against the rule context.
pub struct Rule {
    pub weight: f64,
    pub check: fn(&RuleContext<'_>) -> bool,
}

// Traditional Giant: regulated legacy-heavy sector, large, mid maturity,
// under competitive pressure, with budget.

fn giant_sector(ctx: &RuleContext<'_>) -> bool {
    matches!(ctx.prospect.sector, Sector::Banking | Sector::Insurance)
}

fn giant_size(ctx: &RuleContext<'_>) -> bool {
    matches!(
        ctx.prospect.revenue_bracket,
        RevenueBracket::From2000MTo10000M | RevenueBracket::Over10000M
    )
}

fn giant_mid_maturity(ctx: &RuleContext<'_>) -> bool {
    // Systems exist but are not integrated.
    (20..=30).contains(&ctx.score.digital_maturity().total())
}

fn giant_competitive_pressure(ctx: &RuleContext<'_>) -> bool {
    ctx.has_motivation(answers::motivation::COMPETITIVE_PRESSURE)
}

fn giant_has_budget(ctx: &RuleContext<'_>) -> bool {
    ctx.score.investment_capacity().total() >= 20
}

static TRADITIONAL_GIANT_RULES: [Rule; 5] = [
    Rule { weight: 0.3, check: giant_sector },
    Rule { weight: 0.2, check: giant_size },
    Rule { weight: 0.2, check: giant_mid_maturity },
    Rule { weight: 0.2, check: giant_competitive_pressure },
    Rule { weight: 0.1, check: giant_has_budget },
];

// Ambitious Scaler: growth sector, mid-to-large, blocked on scaling,
// already investing, with real urgency.

fn scaler_sector(ctx: &RuleContext<'_>) -> bool {
    matches!(
        ctx.prospect.sector,
        Sector::Retail | Sector::ProfessionalServices | Sector::Logistics
    )
}

fn scaler_size(ctx: &RuleContext<'_>) -> bool {
    matches!(
        ctx.prospect.revenue_bracket,
        RevenueBracket::From500MTo2000M | RevenueBracket::From2000MTo10000M
    )
}

fn scaler_scaling_pain(ctx: &RuleContext<'_>) -> bool {
    ctx.responses.primary_frustration == answers::primary_frustration::CANNOT_SCALE
}

fn scaler_invests(ctx: &RuleContext<'_>) -> bool {
    [
        answers::recent_investment::SIGNIFICANT,
        answers::recent_investment::MODERATE,
        answers::recent_investment::SMALL,
    ]
    .contains(&ctx.responses.recent_investment.as_str())
}

fn scaler_urgency(ctx: &RuleContext<'_>) -> bool {
    ctx.score.commercial_viability().real_urgency() >= 7
}

static AMBITIOUS_SCALER_RULES: [Rule; 5] = [
    Rule { weight: 0.3, check: scaler_sector },
    Rule { weight: 0.2, check: scaler_size },
    Rule { weight: 0.3, check: scaler_scaling_pain },
    Rule { weight: 0.1, check: scaler_invests },
    Rule { weight: 0.1, check: scaler_urgency },
];

// Digital Beginner: low maturity, no prior investment, ad-hoc processes,
// traditional sector.

fn beginner_low_maturity(ctx: &RuleContext<'_>) -> bool {
    ctx.score.digital_maturity().total() <= 20
}

fn beginner_no_investment(ctx: &RuleContext<'_>) -> bool {
    ctx.responses.recent_investment == answers::recent_investment::NONE
}

fn beginner_adhoc_processes(ctx: &RuleContext<'_>) -> bool {
    [
        answers::critical_processes::UNDOCUMENTED,
        answers::critical_processes::EVER_CHANGING,
    ]
    .contains(&ctx.responses.critical_processes.as_str())
}

fn beginner_sector(ctx: &RuleContext<'_>) -> bool {
    matches!(
        ctx.prospect.sector,
        Sector::Manufacturing | Sector::Government | Sector::Construction
    )
}

static DIGITAL_BEGINNER_RULES: [Rule; 4] = [
    Rule { weight: 0.4, check: beginner_low_maturity },
    Rule { weight: 0.2, check: beginner_no_investment },
    Rule { weight: 0.2, check: beginner_adhoc_processes },
    Rule { weight: 0.2, check: beginner_sector },
];

// Innovation Theater: curiosity only, no urgency, no budget commitment,
// weak viability.

fn theater_sole_curiosity(ctx: &RuleContext<'_>) -> bool {
    ctx.sole_motivation(answers::motivation::CURIOSITY)
}

fn theater_no_urgency(ctx: &RuleContext<'_>) -> bool {
    [answers::urgency::EXPLORING, answers::urgency::JUST_LOOKING]
        .contains(&ctx.responses.urgency.as_str())
}

fn theater_no_budget(ctx: &RuleContext<'_>) -> bool {
    ctx.responses.budget_bracket == answers::budget::UNDISCLOSED
}

fn theater_weak_viability(ctx: &RuleContext<'_>) -> bool {
    ctx.score.commercial_viability().total() <= 15
}

static INNOVATION_THEATER_RULES: [Rule; 4] = [
    Rule { weight: 0.4, check: theater_sole_curiosity },
    Rule { weight: 0.3, check: theater_no_urgency },
    Rule { weight: 0.2, check: theater_no_budget },
    Rule { weight: 0.1, check: theater_weak_viability },
];

// Distressed Fighter: extreme urgency, competitiveness pain, competitors
// pulling ahead, still able to pay.

fn fighter_urgent(ctx: &RuleContext<'_>) -> bool {
    ctx.responses.urgency == answers::urgency::IMMEDIATE
}

fn fighter_competitive_pain(ctx: &RuleContext<'_>) -> bool {
    [
        answers::primary_frustration::SLOW_SERVICE,
        answers::primary_frustration::HIGH_COSTS,
    ]
    .contains(&ctx.responses.primary_frustration.as_str())
}

fn fighter_competitors_ahead(ctx: &RuleContext<'_>) -> bool {
    ctx.has_motivation(answers::motivation::COMPETITIVE_PRESSURE)
}

fn fighter_can_pay(ctx: &RuleContext<'_>) -> bool {
    ctx.score.investment_capacity().total() >= 15
}

static DISTRESSED_FIGHTER_RULES: [Rule; 4] = [
    Rule { weight: 0.3, check: fighter_urgent },
    Rule { weight: 0.2, check: fighter_competitive_pain },
    Rule { weight: 0.3, check: fighter_competitors_ahead },
    Rule { weight: 0.2, check: fighter_can_pay },
];

// Tire Kicker: very low score, no budget, no decision power, very small
// company.

fn kicker_low_score(ctx: &RuleContext<'_>) -> bool {
    ctx.score.score_final() < 30
}

fn kicker_no_budget(ctx: &RuleContext<'_>) -> bool {
    ctx.responses.budget_bracket == answers::budget::UNDER_10M
}

fn kicker_no_decision_power(ctx: &RuleContext<'_>) -> bool {
    ctx.responses.approval_process == answers::approval_process::COMPLEX
}

fn kicker_tiny_company(ctx: &RuleContext<'_>) -> bool {
    ctx.prospect.revenue_bracket == RevenueBracket::Under500M
        && ctx.prospect.headcount_bracket == HeadcountBracket::UpTo20
}

static TIRE_KICKER_RULES: [Rule; 4] = [
    Rule { weight: 0.4, check: kicker_low_score },
    Rule { weight: 0.2, check: kicker_no_budget },
    Rule { weight: 0.2, check: kicker_no_decision_power },
    Rule { weight: 0.2, check: kicker_tiny_company },
];

/// Returns the rule table for an archetype.
pub fn rules_for(id: ArchetypeId) -> &'static [Rule] {
    match id {
        ArchetypeId::TraditionalGiant => &TRADITIONAL_GIANT_RULES,
        ArchetypeId::AmbitiousScaler => &AMBITIOUS_SCALER_RULES,
        ArchetypeId::DigitalBeginner => &DIGITAL_BEGINNER_RULES,
        ArchetypeId::InnovationTheater => &INNOVATION_THEATER_RULES,
        ArchetypeId::DistressedFighter => &DISTRESSED_FIGHTER_RULES,
        ArchetypeId::TireKicker => &TIRE_KICKER_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_archetype_has_rules() {
        for id in ArchetypeId::PRIORITY_ORDER {
            assert!(!rules_for(id).is_empty());
        }
    }

    #[test]
    fn rule_weights_are_positive_and_bounded() {
        for id in ArchetypeId::PRIORITY_ORDER {
            for rule in rules_for(id) {
                assert!(rule.weight > 0.0 && rule.weight <= 1.0);
            }
        }
    }

    #[test]
    fn full_rule_tables_can_reach_one_before_clamping() {
        // The clamp in the scorer is load-bearing for every table.
        for id in ArchetypeId::PRIORITY_ORDER {
            let sum: f64 = rules_for(id).iter().map(|r| r.weight).sum();
            assert!(sum > 0.99, "{} rules sum to {}", id, sum);
        }
    }
}

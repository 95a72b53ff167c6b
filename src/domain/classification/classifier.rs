//! Archetype selection over the rule tables.

use tracing::debug;

use crate::domain::foundation::Confidence;
use crate::domain::prospect::{DiagnosticResponses, ProspectInfo};
use crate::domain::scoring::DiagnosticScore;

use super::{catalog, rules_for, Archetype, ArchetypeId, RuleContext};

/// Generic scorer and argmax selection over the archetype catalogue.
///
/// The six compatibility values are not mutually normalized; only their
/// numeric ordering decides the winner. Exactly one archetype is always
/// returned, even for sparse or contradictory input; low confidence is
/// the only signal of an uncertain fit.
pub struct ArchetypeClassifier;

impl ArchetypeClassifier {
    /// Selects the best-fitting archetype.
    ///
    /// Ties resolve to the archetype earliest in
    /// [`ArchetypeId::PRIORITY_ORDER`].
    pub fn classify(
        score: &DiagnosticScore,
        responses: &DiagnosticResponses,
        prospect_info: &ProspectInfo,
    ) -> Archetype {
        let ctx = RuleContext {
            score,
            responses,
            prospect: prospect_info,
        };

        let mut best_id = ArchetypeId::PRIORITY_ORDER[0];
        let mut best_value = f64::NEG_INFINITY;
        for id in ArchetypeId::PRIORITY_ORDER {
            let value = Self::compatibility_in(id, &ctx);
            if value > best_value {
                best_id = id;
                best_value = value;
            }
        }

        debug!(
            archetype = best_id.key(),
            compatibility = best_value,
            "archetype selected"
        );

        Archetype::from_profile(catalog::profile(best_id), Confidence::new(best_value))
    }

    /// Compatibility of one archetype in [0,1]: the clamped sum of the
    /// weights of its passing rules.
    pub fn compatibility(
        id: ArchetypeId,
        score: &DiagnosticScore,
        responses: &DiagnosticResponses,
        prospect_info: &ProspectInfo,
    ) -> f64 {
        Self::compatibility_in(
            id,
            &RuleContext {
                score,
                responses,
                prospect: prospect_info,
            },
        )
    }

    fn compatibility_in(id: ArchetypeId, ctx: &RuleContext<'_>) -> f64 {
        let total: f64 = rules_for(id)
            .iter()
            .filter(|rule| (rule.check)(ctx))
            .map(|rule| rule.weight)
            .sum();
        total.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HeadcountBracket, RevenueBracket, Sector};
    use crate::domain::prospect::{answers, ContactInfo};
    use crate::domain::scoring::ScoringEngine;

    fn prospect(
        sector: Sector,
        revenue: RevenueBracket,
        headcount: HeadcountBracket,
    ) -> ProspectInfo {
        ProspectInfo::new(
            "Empresa Ejemplo S.A.S.",
            sector,
            revenue,
            headcount,
            ContactInfo::new("Carlos Ruiz", "carlos@ejemplo.co", "", "Director de Área").unwrap(),
            "Bogotá",
        )
        .unwrap()
    }

    fn classify_for(
        responses: &DiagnosticResponses,
        info: &ProspectInfo,
    ) -> Archetype {
        let score = ScoringEngine::calculate_full_score(responses, info);
        ArchetypeClassifier::classify(&score, responses, info)
    }

    #[test]
    fn bank_under_pressure_classifies_as_traditional_giant() {
        // Mid-range maturity answers keep the total in the 20-30 band.
        let responses = DiagnosticResponses::builder()
            .motivations([answers::motivation::COMPETITIVE_PRESSURE])
            .decision_making(answers::decision_making::MANUAL_REPORTS)
            .critical_processes(answers::critical_processes::PERSON_DEPENDENT)
            .repetitive_tasks(answers::repetitive_tasks::FROM_20_TO_40)
            .information_sharing(answers::information_sharing::AD_HOC)
            .technical_team(answers::technical_team::FULL_TEAM)
            .implementation_capacity(answers::implementation_capacity::APPROVAL_NEEDED)
            .recent_investment(answers::recent_investment::MODERATE)
            .primary_frustration(answers::primary_frustration::SLOW_SERVICE)
            .urgency(answers::urgency::THIS_YEAR)
            .approval_process(answers::approval_process::BOARD)
            .budget_bracket(answers::budget::OVER_60M)
            .build();
        let info = prospect(
            Sector::Banking,
            RevenueBracket::Over10000M,
            HeadcountBracket::Over500,
        );

        let archetype = classify_for(&responses, &info);

        assert_eq!(archetype.id, ArchetypeId::TraditionalGiant);
        assert!(archetype.confidence.value() >= 0.5);
    }

    #[test]
    fn growth_blocked_retailer_classifies_as_ambitious_scaler() {
        let responses = DiagnosticResponses::builder()
            .motivations([answers::motivation::SPECIFIC_PROBLEM])
            .decision_making(answers::decision_making::AUTOMATED_REPORTS)
            .critical_processes(answers::critical_processes::DOCUMENTED)
            .repetitive_tasks(answers::repetitive_tasks::FROM_20_TO_40)
            .information_sharing(answers::information_sharing::CONNECTED_SYSTEMS)
            .technical_team(answers::technical_team::SMALL_TEAM)
            .implementation_capacity(answers::implementation_capacity::BUDGET_READY)
            .recent_investment(answers::recent_investment::MODERATE)
            .primary_frustration(answers::primary_frustration::CANNOT_SCALE)
            .urgency(answers::urgency::IMMEDIATE)
            .approval_process(answers::approval_process::SOLE_DECISION_MAKER)
            .budget_bracket(answers::budget::FROM_30M_TO_60M)
            .build();
        let info = prospect(
            Sector::Retail,
            RevenueBracket::From500MTo2000M,
            HeadcountBracket::From51To200,
        );

        let archetype = classify_for(&responses, &info);

        assert_eq!(archetype.id, ArchetypeId::AmbitiousScaler);
        // All five scaler rules pass: 0.3 + 0.2 + 0.3 + 0.1 + 0.1.
        assert!(archetype.confidence.value() > 0.9);
    }

    #[test]
    fn manual_manufacturer_classifies_as_digital_beginner() {
        let responses = DiagnosticResponses::builder()
            .motivations([answers::motivation::COST_REDUCTION])
            .decision_making(answers::decision_making::INTUITION)
            .critical_processes(answers::critical_processes::UNDOCUMENTED)
            .repetitive_tasks(answers::repetitive_tasks::OVER_60)
            .information_sharing(answers::information_sharing::SILOED)
            .technical_team(answers::technical_team::IMPROVISED)
            .implementation_capacity(answers::implementation_capacity::APPROVAL_NEEDED)
            .recent_investment(answers::recent_investment::NONE)
            .primary_frustration(answers::primary_frustration::MANUAL_ERRORS)
            .urgency(answers::urgency::THIS_YEAR)
            .approval_process(answers::approval_process::PARTNERS)
            .budget_bracket(answers::budget::FROM_10M_TO_30M)
            .build();
        let info = prospect(
            Sector::Manufacturing,
            RevenueBracket::From500MTo2000M,
            HeadcountBracket::From51To200,
        );

        let archetype = classify_for(&responses, &info);

        assert_eq!(archetype.id, ArchetypeId::DigitalBeginner);
        assert!(archetype.confidence.value() >= 0.9);
    }

    #[test]
    fn pure_curiosity_classifies_as_innovation_theater() {
        let responses = DiagnosticResponses::builder()
            .motivations([answers::motivation::CURIOSITY])
            .decision_making(answers::decision_making::MANUAL_REPORTS)
            .critical_processes(answers::critical_processes::DOCUMENTED)
            .repetitive_tasks(answers::repetitive_tasks::FROM_20_TO_40)
            .information_sharing(answers::information_sharing::AD_HOC)
            .technical_team(answers::technical_team::SMALL_TEAM)
            .implementation_capacity(answers::implementation_capacity::NEXT_YEAR)
            .recent_investment(answers::recent_investment::SMALL)
            .primary_frustration(answers::primary_frustration::OTHER)
            .urgency(answers::urgency::EXPLORING)
            .approval_process(answers::approval_process::BOARD)
            .budget_bracket(answers::budget::UNDISCLOSED)
            .build();
        let info = prospect(
            Sector::Health,
            RevenueBracket::From500MTo2000M,
            HeadcountBracket::From21To50,
        );

        let archetype = classify_for(&responses, &info);

        assert_eq!(archetype.id, ArchetypeId::InnovationTheater);
        assert!(archetype.confidence.value() >= 0.9);
    }

    #[test]
    fn urgent_cost_pressure_classifies_as_distressed_fighter() {
        let responses = DiagnosticResponses::builder()
            .motivations([answers::motivation::COMPETITIVE_PRESSURE])
            .decision_making(answers::decision_making::SPREADSHEETS)
            .critical_processes(answers::critical_processes::DOCUMENTED)
            .repetitive_tasks(answers::repetitive_tasks::FROM_40_TO_60)
            .information_sharing(answers::information_sharing::CONNECTED_SYSTEMS)
            .technical_team(answers::technical_team::SMALL_TEAM)
            .implementation_capacity(answers::implementation_capacity::BUDGET_READY)
            .recent_investment(answers::recent_investment::MODERATE)
            .primary_frustration(answers::primary_frustration::HIGH_COSTS)
            .urgency(answers::urgency::IMMEDIATE)
            .approval_process(answers::approval_process::SOLE_DECISION_MAKER)
            .budget_bracket(answers::budget::FROM_30M_TO_60M)
            .build();
        // Education is outside every sector rule, so sector checks stay quiet.
        let info = prospect(
            Sector::Education,
            RevenueBracket::Under500M,
            HeadcountBracket::From21To50,
        );

        let archetype = classify_for(&responses, &info);

        assert_eq!(archetype.id, ArchetypeId::DistressedFighter);
        assert!(archetype.confidence.value() >= 0.9);
    }

    #[test]
    fn sparse_low_intent_input_classifies_as_tire_kicker() {
        let responses = DiagnosticResponses::builder()
            .motivations([answers::motivation::CURIOSITY, answers::motivation::BOARD_MANDATE])
            .decision_making(answers::decision_making::ASK_AROUND)
            .critical_processes(answers::critical_processes::EVER_CHANGING)
            .repetitive_tasks(answers::repetitive_tasks::UNKNOWN)
            .information_sharing(answers::information_sharing::SPREADSHEET_CHAOS)
            .technical_team(answers::technical_team::IMPROVISED)
            .implementation_capacity(answers::implementation_capacity::NO_BUDGET)
            .recent_investment(answers::recent_investment::SMALL)
            .primary_frustration(answers::primary_frustration::OTHER)
            .urgency(answers::urgency::THIS_YEAR)
            .approval_process(answers::approval_process::COMPLEX)
            .budget_bracket(answers::budget::UNDER_10M)
            .build();
        let info = prospect(
            Sector::Other,
            RevenueBracket::Under500M,
            HeadcountBracket::UpTo20,
        );

        let archetype = classify_for(&responses, &info);

        assert_eq!(archetype.id, ArchetypeId::TireKicker);
        assert!(archetype.confidence.value() >= 0.9);
    }

    #[test]
    fn classify_always_returns_a_catalogue_archetype() {
        let responses = DiagnosticResponses::default();
        let info = prospect(
            Sector::Other,
            RevenueBracket::Under500M,
            HeadcountBracket::UpTo20,
        );
        let score = ScoringEngine::calculate_full_score(&responses, &info);

        let archetype = ArchetypeClassifier::classify(&score, &responses, &info);
        assert!(ArchetypeId::PRIORITY_ORDER.contains(&archetype.id));
    }

    #[test]
    fn winner_confidence_equals_maximum_compatibility() {
        let responses = DiagnosticResponses::builder()
            .motivations([answers::motivation::COMPETITIVE_PRESSURE])
            .decision_making(answers::decision_making::MANUAL_REPORTS)
            .critical_processes(answers::critical_processes::PERSON_DEPENDENT)
            .repetitive_tasks(answers::repetitive_tasks::FROM_40_TO_60)
            .information_sharing(answers::information_sharing::AD_HOC)
            .technical_team(answers::technical_team::OUTSOURCED)
            .implementation_capacity(answers::implementation_capacity::APPROVAL_NEEDED)
            .recent_investment(answers::recent_investment::SMALL)
            .primary_frustration(answers::primary_frustration::SLOW_SERVICE)
            .urgency(answers::urgency::IMMEDIATE)
            .approval_process(answers::approval_process::BOARD)
            .budget_bracket(answers::budget::FROM_10M_TO_30M)
            .build();
        let info = prospect(
            Sector::Insurance,
            RevenueBracket::From2000MTo10000M,
            HeadcountBracket::From201To500,
        );
        let score = ScoringEngine::calculate_full_score(&responses, &info);

        let archetype = ArchetypeClassifier::classify(&score, &responses, &info);
        let max = ArchetypeId::PRIORITY_ORDER
            .iter()
            .map(|&id| ArchetypeClassifier::compatibility(id, &score, &responses, &info))
            .fold(f64::NEG_INFINITY, f64::max);

        assert!((archetype.confidence.value() - max).abs() < 1e-9);
    }

    #[test]
    fn ties_resolve_by_priority_order() {
        // Traditional Giant and Digital Beginner both land on 0.2 here;
        // the earlier entry in priority order must win.
        let responses = DiagnosticResponses::builder()
            .motivations([answers::motivation::COST_REDUCTION])
            .decision_making(answers::decision_making::AUTOMATED_REPORTS)
            .critical_processes(answers::critical_processes::DOCUMENTED)
            .repetitive_tasks(answers::repetitive_tasks::UNDER_20)
            .information_sharing(answers::information_sharing::CONNECTED_SYSTEMS)
            .technical_team(answers::technical_team::FULL_TEAM)
            .implementation_capacity(answers::implementation_capacity::BUDGET_READY)
            .recent_investment(answers::recent_investment::NONE)
            .primary_frustration(answers::primary_frustration::NO_VISIBILITY)
            .urgency(answers::urgency::THIS_YEAR)
            .approval_process(answers::approval_process::PARTNERS)
            .budget_bracket(answers::budget::FROM_10M_TO_30M)
            .build();
        let info = prospect(
            Sector::Education,
            RevenueBracket::Over10000M,
            HeadcountBracket::From21To50,
        );
        let score = ScoringEngine::calculate_full_score(&responses, &info);

        let values: Vec<f64> = ArchetypeId::PRIORITY_ORDER
            .iter()
            .map(|&id| ArchetypeClassifier::compatibility(id, &score, &responses, &info))
            .collect();
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let first_max = ArchetypeId::PRIORITY_ORDER
            [values.iter().position(|&v| (v - max).abs() < 1e-12).unwrap()];

        let archetype = ArchetypeClassifier::classify(&score, &responses, &info);
        assert_eq!(archetype.id, first_max);
    }

    #[test]
    fn compatibility_is_clamped_to_one() {
        for id in ArchetypeId::PRIORITY_ORDER {
            let responses = DiagnosticResponses::default();
            let info = prospect(
                Sector::Banking,
                RevenueBracket::Over10000M,
                HeadcountBracket::Over500,
            );
            let score = ScoringEngine::calculate_full_score(&responses, &info);
            let value = ArchetypeClassifier::compatibility(id, &score, &responses, &info);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}

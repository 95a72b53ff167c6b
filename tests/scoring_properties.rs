//! Property tests over the scoring and classification invariants.

use proptest::prelude::*;

use readiness_engine::domain::classification::{ArchetypeClassifier, ArchetypeId};
use readiness_engine::domain::foundation::{
    HeadcountBracket, RevenueBracket, Sector, Tier,
};
use readiness_engine::domain::insight::{InsightGenerator, MAX_QUICK_WINS};
use readiness_engine::domain::prospect::{answers, ContactInfo, DiagnosticResponses, ProspectInfo};
use readiness_engine::domain::scoring::{
    CommercialViability, DigitalMaturity, InvestmentCapacity, ScoringEngine,
};

/// Either a configured option or junk that should degrade to zero.
fn answer(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(options.to_vec()).prop_map(str::to_string),
        1 => "[a-zA-Z ]{0,16}",
    ]
}

prop_compose! {
    fn arb_responses()(
        motivations in proptest::sample::subsequence(
            answers::motivation::ALL.to_vec(),
            0..=answers::motivation::ALL.len(),
        ),
        decision_making in answer(answers::decision_making::ALL),
        critical_processes in answer(answers::critical_processes::ALL),
        repetitive_tasks in answer(answers::repetitive_tasks::ALL),
        information_sharing in answer(answers::information_sharing::ALL),
        technical_team in answer(answers::technical_team::ALL),
        implementation_capacity in answer(answers::implementation_capacity::ALL),
        recent_investment in answer(answers::recent_investment::ALL),
        primary_frustration in answer(answers::primary_frustration::ALL),
        urgency in answer(answers::urgency::ALL),
        approval_process in answer(answers::approval_process::ALL),
        budget_bracket in answer(answers::budget::ALL),
    ) -> DiagnosticResponses {
        DiagnosticResponses::builder()
            .motivations(motivations)
            .decision_making(decision_making)
            .critical_processes(critical_processes)
            .repetitive_tasks(repetitive_tasks)
            .information_sharing(information_sharing)
            .technical_team(technical_team)
            .implementation_capacity(implementation_capacity)
            .recent_investment(recent_investment)
            .primary_frustration(primary_frustration)
            .urgency(urgency)
            .approval_process(approval_process)
            .budget_bracket(budget_bracket)
            .build()
    }
}

prop_compose! {
    fn arb_prospect()(
        sector in proptest::sample::select(Sector::ALL.to_vec()),
        revenue in proptest::sample::select(RevenueBracket::ALL.to_vec()),
        headcount in proptest::sample::select(HeadcountBracket::ALL.to_vec()),
    ) -> ProspectInfo {
        ProspectInfo::new(
            "Empresa Aleatoria S.A.S.",
            sector,
            revenue,
            headcount,
            ContactInfo::new("Contacto", "contacto@ejemplo.co", "", "Otro").unwrap(),
            "Bogotá",
        )
        .unwrap()
    }
}

proptest! {
    #[test]
    fn dimension_totals_stay_within_bounds(
        responses in arb_responses(),
        prospect in arb_prospect(),
    ) {
        let score = ScoringEngine::calculate_full_score(&responses, &prospect);

        let maturity = score.digital_maturity();
        prop_assert!(maturity.total() <= DigitalMaturity::MAX);
        prop_assert_eq!(
            maturity.total(),
            maturity.data_driven_decisions()
                + maturity.standardized_processes()
                + maturity.integrated_systems()
                + maturity.operational_efficiency()
        );

        let capacity = score.investment_capacity();
        prop_assert!(capacity.total() <= InvestmentCapacity::MAX);
        prop_assert_eq!(
            capacity.total(),
            capacity.available_budget() + capacity.investment_history() + capacity.company_size()
        );

        let viability = score.commercial_viability();
        prop_assert!(viability.total() <= CommercialViability::MAX);
        prop_assert_eq!(
            viability.total(),
            viability.clear_problem() + viability.real_urgency() + viability.decision_power()
        );
    }

    #[test]
    fn final_score_is_the_capped_sum(
        responses in arb_responses(),
        prospect in arb_prospect(),
    ) {
        let score = ScoringEngine::calculate_full_score(&responses, &prospect);
        let bonus = ScoringEngine::motivation_bonus(&responses.motivations);

        prop_assert!(bonus <= 5);
        prop_assert_eq!(score.motivation_bonus(), bonus);

        let expected = (u16::from(score.digital_maturity().total())
            + u16::from(score.investment_capacity().total())
            + u16::from(score.commercial_viability().total())
            + u16::from(bonus))
        .min(100) as u8;
        prop_assert_eq!(score.score_final(), expected);
    }

    #[test]
    fn tier_is_a_step_function_of_the_final_score(
        responses in arb_responses(),
        prospect in arb_prospect(),
    ) {
        let score = ScoringEngine::calculate_full_score(&responses, &prospect);
        prop_assert_eq!(score.tier(), Tier::from_score(score.score_final()));
    }

    #[test]
    fn confidence_stays_in_unit_interval(
        responses in arb_responses(),
        prospect in arb_prospect(),
    ) {
        let score = ScoringEngine::calculate_full_score(&responses, &prospect);
        let confidence = score.confidence().value();
        prop_assert!((0.0..=1.0).contains(&confidence));
    }

    #[test]
    fn classification_returns_a_catalogue_archetype_with_max_compatibility(
        responses in arb_responses(),
        prospect in arb_prospect(),
    ) {
        let score = ScoringEngine::calculate_full_score(&responses, &prospect);
        let archetype = ArchetypeClassifier::classify(&score, &responses, &prospect);

        prop_assert!(ArchetypeId::PRIORITY_ORDER.contains(&archetype.id));

        let max = ArchetypeId::PRIORITY_ORDER
            .iter()
            .map(|&id| ArchetypeClassifier::compatibility(id, &score, &responses, &prospect))
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((archetype.confidence.value() - max).abs() < 1e-9);
        prop_assert!((0.0..=1.0).contains(&max));
    }

    #[test]
    fn quick_wins_respect_the_cap(
        responses in arb_responses(),
        prospect in arb_prospect(),
    ) {
        let score = ScoringEngine::calculate_full_score(&responses, &prospect);
        let wins = InsightGenerator::quick_wins(&score, &responses);
        prop_assert!(wins.len() <= MAX_QUICK_WINS);
    }

    #[test]
    fn scoring_is_idempotent(
        responses in arb_responses(),
        prospect in arb_prospect(),
    ) {
        let first = ScoringEngine::evaluate(&responses, &prospect);
        let second = ScoringEngine::evaluate(&responses, &prospect);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn red_flags_are_deterministic(
        responses in arb_responses(),
    ) {
        let first = InsightGenerator::red_flags(&responses);
        let second = InsightGenerator::red_flags(&responses);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn hedged_answers_never_raise_confidence() {
    // The same answer set with both "don't know" style answers swapped in
    // must not score higher confidence than the original.
    let base = DiagnosticResponses::builder()
        .motivations([answers::motivation::SPECIFIC_PROBLEM])
        .decision_making(answers::decision_making::MANUAL_REPORTS)
        .critical_processes(answers::critical_processes::DOCUMENTED)
        .repetitive_tasks(answers::repetitive_tasks::FROM_20_TO_40)
        .information_sharing(answers::information_sharing::AD_HOC)
        .technical_team(answers::technical_team::SMALL_TEAM)
        .implementation_capacity(answers::implementation_capacity::APPROVAL_NEEDED)
        .recent_investment(answers::recent_investment::MODERATE)
        .primary_frustration(answers::primary_frustration::MANUAL_ERRORS)
        .urgency(answers::urgency::THIS_YEAR)
        .approval_process(answers::approval_process::PARTNERS)
        .budget_bracket(answers::budget::FROM_30M_TO_60M)
        .build();

    let mut hedged = base.clone();
    hedged.repetitive_tasks = answers::repetitive_tasks::UNKNOWN.to_string();
    hedged.budget_bracket = answers::budget::UNDISCLOSED.to_string();

    let prospect = ProspectInfo::new(
        "Empresa Prueba S.A.S.",
        Sector::Retail,
        RevenueBracket::From500MTo2000M,
        HeadcountBracket::From51To200,
        ContactInfo::new("Contacto", "contacto@ejemplo.co", "", "Otro").unwrap(),
        "Bogotá",
    )
    .unwrap();

    let base_score = ScoringEngine::calculate_full_score(&base, &prospect);
    let hedged_score = ScoringEngine::calculate_full_score(&hedged, &prospect);

    assert!(hedged_score.confidence() <= base_score.confidence());
}

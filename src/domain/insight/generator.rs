//! Derivation of quick wins, red flags, insights, and meeting prep.

use crate::domain::classification::{Archetype, ArchetypeId};
use crate::domain::prospect::{answers, DiagnosticResponses, ProspectInfo};
use crate::domain::scoring::{DiagnosticScore, InvestmentCapacity, CommercialViability};
use crate::domain::foundation::Tier;

use super::templates::{
    DATA_FOUNDATION, GENERIC_OBJECTION_RESPONSE, OBJECTION_RESPONSES, QUICK_WIN_BY_FRUSTRATION,
    SYSTEMS_INTEGRATION,
};
use super::{Insight, InsightCategory, MeetingPrep, ObjectionResponse, QuickWin, RedFlag, Severity};

/// Quick-win list cap.
pub const MAX_QUICK_WINS: usize = 3;

/// A dimension component at or below this value triggers a follow-up
/// quick win.
pub const LOW_COMPONENT_SCORE: u8 = 5;

/// Investment-capacity total at or above this is a strength.
pub const STRONG_INVESTMENT_THRESHOLD: u8 = 20;

/// Digital-maturity total at or below this is an improvement opportunity.
pub const WEAK_MATURITY_THRESHOLD: u8 = 25;

/// Commercial-viability total at or below this is a closing risk.
pub const WEAK_VIABILITY_THRESHOLD: u8 = 15;

// Close-probability estimate, additive and capped.
pub const BASE_CLOSE_PROBABILITY: u8 = 30;
pub const TIER_A_CLOSE_BONUS: u8 = 40;
pub const TIER_B_CLOSE_BONUS: u8 = 20;
pub const TOP_URGENCY_CLOSE_BONUS: u8 = 20;
pub const SECOND_URGENCY_CLOSE_BONUS: u8 = 10;
pub const SOLE_DECISION_MAKER_CLOSE_BONUS: u8 = 10;
pub const MAX_CLOSE_PROBABILITY: u8 = 95;

/// Template-driven synthesis of sales recommendations.
pub struct InsightGenerator;

impl InsightGenerator {
    /// Generates at most [`MAX_QUICK_WINS`] quick wins in fixed priority
    /// order: primary (by stated frustration), then data foundations,
    /// then systems integration.
    pub fn quick_wins(
        score: &DiagnosticScore,
        responses: &DiagnosticResponses,
    ) -> Vec<QuickWin> {
        let mut wins = Vec::new();

        if let Some(template) =
            QUICK_WIN_BY_FRUSTRATION.get(responses.primary_frustration.as_str())
        {
            wins.push(template.materialize());
        }

        if score.digital_maturity().data_driven_decisions() <= LOW_COMPONENT_SCORE {
            wins.push(DATA_FOUNDATION.materialize());
        }

        if score.digital_maturity().integrated_systems() <= LOW_COMPONENT_SCORE {
            wins.push(SYSTEMS_INTEGRATION.materialize());
        }

        wins.truncate(MAX_QUICK_WINS);
        wins
    }

    /// Identifies red flags. Independent checks, declaration order, no cap.
    pub fn red_flags(responses: &DiagnosticResponses) -> Vec<RedFlag> {
        let mut flags = Vec::new();

        if responses.approval_process == answers::approval_process::COMPLEX {
            flags.push(RedFlag {
                title: "Proceso de Aprobación Complejo".to_string(),
                description: "Múltiples aprobadores pueden alargar el ciclo de ventas \
                              significativamente"
                    .to_string(),
                severity: Severity::Medium,
                mitigation: "Identificar sponsor ejecutivo early, mapear stakeholders, preparar \
                             business case sólido"
                    .to_string(),
            });
        }

        if [answers::budget::UNDER_10M, answers::budget::UNDISCLOSED]
            .contains(&responses.budget_bracket.as_str())
        {
            flags.push(RedFlag {
                title: "Presupuesto Indefinido".to_string(),
                description: "Sin presupuesto claro puede indicar falta de compromiso real"
                    .to_string(),
                severity: Severity::High,
                mitigation: "Validar en primera reunión si hay budget aprobado o timeline de \
                             aprobación"
                    .to_string(),
            });
        }

        if [
            answers::critical_processes::PERSON_DEPENDENT,
            answers::critical_processes::UNDOCUMENTED,
        ]
        .contains(&responses.critical_processes.as_str())
        {
            flags.push(RedFlag {
                title: "Cultura Resistente al Cambio".to_string(),
                description: "Procesos dependientes de personas pueden indicar resistencia a \
                              estandarización"
                    .to_string(),
                severity: Severity::Medium,
                mitigation: "Incluir módulo de change management, identificar champions \
                             internos, piloto pequeño primero"
                    .to_string(),
            });
        }

        let sole_curiosity = responses.motivations.len() == 1
            && responses.motivations[0] == answers::motivation::CURIOSITY;
        if sole_curiosity && responses.urgency == answers::urgency::JUST_LOOKING {
            flags.push(RedFlag {
                title: "Falta de Urgencia Real".to_string(),
                description: "Exploración sin problema específico raramente convierte".to_string(),
                severity: Severity::High,
                mitigation: "Calificar rigurosamente, ofrecer contenido educativo en vez de \
                             consultoría, nutrir para futuro"
                    .to_string(),
            });
        }

        flags
    }

    /// Generates strategic insights: at most one per category.
    pub fn insights(score: &DiagnosticScore) -> Vec<Insight> {
        let mut insights = Vec::new();

        let investment = score.investment_capacity().total();
        if investment >= STRONG_INVESTMENT_THRESHOLD {
            insights.push(Insight {
                category: InsightCategory::Strength,
                title: "Capacidad de Inversión Sólida".to_string(),
                description: format!(
                    "Con score de {}/{} en capacidad de inversión, el prospecto tiene músculo \
                     financiero para proyectos significativos",
                    investment,
                    InvestmentCapacity::MAX
                ),
                recommendation: "Proponer solución robusta ($25K-45K) en vez de aproximación \
                                 minimalista"
                    .to_string(),
            });
        }

        if score.digital_maturity().total() <= WEAK_MATURITY_THRESHOLD {
            insights.push(Insight {
                category: InsightCategory::Opportunity,
                title: "Alto Potencial de Mejora Operativa".to_string(),
                description: "Baja madurez digital significa múltiples oportunidades de quick \
                              wins y ROI alto"
                    .to_string(),
                recommendation: "Empezar con automatización de proceso más doloroso para \
                                 demostrar valor rápido"
                    .to_string(),
            });
        }

        let viability = score.commercial_viability().total();
        if viability <= WEAK_VIABILITY_THRESHOLD {
            insights.push(Insight {
                category: InsightCategory::Risk,
                title: "Viabilidad Comercial Cuestionable".to_string(),
                description: format!(
                    "Score bajo ({}/{}) indica riesgo de que no cierre o ciclo muy largo",
                    viability,
                    CommercialViability::MAX
                ),
                recommendation: "Calificar rigurosamente en primera llamada antes de invertir \
                                 tiempo en propuesta"
                    .to_string(),
            });
        }

        insights
    }

    /// Assembles the meeting-preparation bundle.
    pub fn meeting_prep(
        score: &DiagnosticScore,
        responses: &DiagnosticResponses,
        archetype: &Archetype,
        prospect_info: &ProspectInfo,
    ) -> MeetingPrep {
        let prior_research = vec![
            format!(
                "Buscar '{}' en Google/LinkedIn",
                prospect_info.company_name
            ),
            format!(
                "Identificar competidores principales en sector {}",
                prospect_info.sector
            ),
            "Revisar presencia digital (website, redes sociales)".to_string(),
            "Buscar noticias recientes sobre la empresa".to_string(),
        ];

        let materials = vec![
            format!("Caso de éxito: {}", archetype.ideal_entry_point),
            "Demo relevante según frustración principal".to_string(),
            "One-pager: ROI estimado".to_string(),
            "Propuesta preliminar con rangos de pricing".to_string(),
        ];

        MeetingPrep {
            prior_research,
            materials,
            key_questions: Self::key_questions(archetype, responses),
            likely_objections: Self::likely_objections(archetype),
            key_insight: Self::key_insight(archetype, responses),
            close_probability: Self::close_probability(score, responses),
        }
    }

    /// Base questions plus archetype-specific probes.
    fn key_questions(archetype: &Archetype, responses: &DiagnosticResponses) -> Vec<String> {
        let mut questions = vec![
            format!(
                "¿Cuál es el proceso/área que más le duele hoy? (validar '{}')",
                responses.primary_frustration
            ),
            "¿Ha intentado resolver esto antes? ¿Qué pasó?".to_string(),
            "Si pudiera resolver esto en los próximos 90 días, ¿qué impacto tendría en el \
             negocio?"
                .to_string(),
        ];

        match archetype.id {
            ArchetypeId::TraditionalGiant => {
                questions.push("¿Qué sistemas legacy críticos tenemos que considerar?".to_string());
                questions.push(
                    "¿Cuál es el proceso de aprobación para proyectos de este tipo?".to_string(),
                );
            }
            ArchetypeId::AmbitiousScaler => {
                questions.push("¿Cuánto están creciendo mes a mes?".to_string());
                questions
                    .push("¿Qué proceso les está limitando más el crecimiento?".to_string());
            }
            _ => {}
        }

        questions
    }

    /// Maps the archetype's first three expected objections through the
    /// response table, falling back to the generic response.
    fn likely_objections(archetype: &Archetype) -> Vec<ObjectionResponse> {
        archetype
            .expected_objections
            .iter()
            .take(3)
            .map(|objection| ObjectionResponse {
                objection: objection.clone(),
                response: OBJECTION_RESPONSES
                    .get(objection.as_str())
                    .copied()
                    .unwrap_or(GENERIC_OBJECTION_RESPONSE)
                    .to_string(),
            })
            .collect()
    }

    /// The single framing line for the meeting.
    fn key_insight(archetype: &Archetype, responses: &DiagnosticResponses) -> String {
        match archetype.id {
            ArchetypeId::AmbitiousScaler => {
                "Este cliente está en punto de inflexión: creciendo rápido pero operación no \
                 escala. Tu ángulo: 'No contrates más gente, automatiza lo que ya tienes.'"
                    .to_string()
            }
            ArchetypeId::TraditionalGiant => {
                "Cliente tradicional amenazado por competidores ágiles. Tu ángulo: 'Moderniza \
                 sin romper lo que funciona.'"
                    .to_string()
            }
            ArchetypeId::DistressedFighter => {
                "Cliente bajo presión extrema. Tu ángulo: 'ROI medible en 90 días o menos.'"
                    .to_string()
            }
            _ => format!(
                "Enfocarse en resolver el problema específico: {}",
                responses.primary_frustration
            ),
        }
    }

    /// Close-probability estimate in [0, MAX_CLOSE_PROBABILITY].
    pub fn close_probability(score: &DiagnosticScore, responses: &DiagnosticResponses) -> u8 {
        let mut probability = BASE_CLOSE_PROBABILITY;

        match score.tier() {
            Tier::A => probability += TIER_A_CLOSE_BONUS,
            Tier::B => probability += TIER_B_CLOSE_BONUS,
            Tier::C => {}
        }

        if responses.urgency == answers::urgency::IMMEDIATE {
            probability += TOP_URGENCY_CLOSE_BONUS;
        } else if responses.urgency == answers::urgency::THIS_YEAR {
            probability += SECOND_URGENCY_CLOSE_BONUS;
        }

        if responses.approval_process == answers::approval_process::SOLE_DECISION_MAKER {
            probability += SOLE_DECISION_MAKER_CLOSE_BONUS;
        }

        probability.min(MAX_CLOSE_PROBABILITY)
    }
}

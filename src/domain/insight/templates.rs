//! Recommendation templates.
//!
//! Static content for quick wins and objection handling. Templates are
//! data so sales content can be retuned without touching the generator.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::prospect::answers;

use super::QuickWin;

/// A quick-win recommendation before materialization.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuickWinTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_impact: &'static str,
    pub implementation_time: &'static str,
    pub approximate_investment: &'static str,
}

impl QuickWinTemplate {
    pub(crate) fn materialize(&self) -> QuickWin {
        QuickWin {
            title: self.title.to_string(),
            description: self.description.to_string(),
            estimated_impact: self.estimated_impact.to_string(),
            implementation_time: self.implementation_time.to_string(),
            approximate_investment: self.approximate_investment.to_string(),
        }
    }
}

/// Primary quick win, keyed by the stated primary frustration.
pub(crate) static QUICK_WIN_BY_FRUSTRATION: Lazy<HashMap<&'static str, QuickWinTemplate>> =
    Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert(
            answers::primary_frustration::CANNOT_SCALE,
            QuickWinTemplate {
                title: "Automatización de Proceso Administrativo",
                description: "Automatizar proceso de mayor volumen manual (pedidos, facturación, \
                              o reportes) para reducir 30-40% de carga administrativa",
                estimated_impact: "Equivalente a 2-3 personas FTE",
                implementation_time: "60-90 días",
                approximate_investment: "$15M-25M COP",
            },
        );
        map.insert(
            answers::primary_frustration::SLOW_SERVICE,
            QuickWinTemplate {
                title: "Chatbot de Atención al Cliente",
                description: "Implementar asistente virtual para resolver 60-70% de consultas \
                              frecuentes 24/7",
                estimated_impact: "Reducción 50% tiempo de respuesta",
                implementation_time: "45-60 días",
                approximate_investment: "$12M-20M COP",
            },
        );
        map.insert(
            answers::primary_frustration::MANUAL_ERRORS,
            QuickWinTemplate {
                title: "Validación Automática de Datos",
                description: "Sistema de validación y verificación automática en procesos críticos",
                estimated_impact: "Reducción 80% errores operativos",
                implementation_time: "30-45 días",
                approximate_investment: "$8M-15M COP",
            },
        );
        map.insert(
            answers::primary_frustration::NO_VISIBILITY,
            QuickWinTemplate {
                title: "Dashboard Gerencial en Tiempo Real",
                description: "Panel de control ejecutivo con KPIs críticos actualizados \
                              automáticamente",
                estimated_impact: "Visibilidad inmediata de operación",
                implementation_time: "30-45 días",
                approximate_investment: "$10M-18M COP",
            },
        );
        map.insert(
            answers::primary_frustration::HIGH_COSTS,
            QuickWinTemplate {
                title: "Optimización de Procesos con IA",
                description: "Identificar y automatizar los 3 procesos más costosos",
                estimated_impact: "Reducción 15-25% costos operativos",
                implementation_time: "90-120 días",
                approximate_investment: "$20M-35M COP",
            },
        );
        map
    });

/// Secondary quick win when data-driven decision making is weak.
pub(crate) const DATA_FOUNDATION: QuickWinTemplate = QuickWinTemplate {
    title: "Fundamentos de Business Intelligence",
    description: "Implementar BI básico para consolidar datos dispersos y generar reportes \
                  automáticos",
    estimated_impact: "Base para decisiones data-driven",
    implementation_time: "60 días",
    approximate_investment: "$8M-12M COP",
};

/// Tertiary quick win when systems integration is weak.
pub(crate) const SYSTEMS_INTEGRATION: QuickWinTemplate = QuickWinTemplate {
    title: "Integración de Sistemas Críticos",
    description: "Conectar los 2-3 sistemas más importantes vía APIs para eliminar trabajo \
                  manual",
    estimated_impact: "Reducción 40% tiempo en transferencia de datos",
    implementation_time: "45-60 días",
    approximate_investment: "$10M-15M COP",
};

/// Suggested responses for objections with a prepared answer.
pub(crate) static OBJECTION_RESPONSES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert(
            "¿Cuánto tiempo toma?",
            "Piloto funcional en 90 días, resultados visibles en 45 días",
        );
        map.insert(
            "¿Cuánto riesgo tiene esto?",
            "Implementación gradual con validación en cada hito",
        );
        map.insert(
            "¿Ya está probado en el sector?",
            "[Mostrar caso de éxito comparable]",
        );
        map.insert(
            "¿Podemos hacerlo más barato?",
            "El costo real está en NO hacerlo - [cuantificar costo de inacción]",
        );
        map
    });

/// Fallback response for unmapped objections.
pub(crate) const GENERIC_OBJECTION_RESPONSE: &str =
    "Escuchar, validar preocupación, dar evidencia";

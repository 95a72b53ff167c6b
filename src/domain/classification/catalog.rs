//! The archetype catalogue.
//!
//! Static, read-only descriptive content for the six archetypes. This
//! is the single source of truth shared by the classifier, the insight
//! generator, and tests.

use super::{ArchetypeId, ArchetypeProfile};

static TRADITIONAL_GIANT: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::TraditionalGiant,
    display_name: "🏦 Traditional Giant",
    description: "Empresa grande tradicional con sistemas legacy, bajo presión competitiva",
    typical_frustrations: &[
        "Todo demora semanas en implementarse",
        "Sistemas no hablan entre sí",
        "Perdemos clientes por servicio lento",
        "Competidores más ágiles nos están ganando",
    ],
    motivators: &[
        "Sobrevivencia competitiva",
        "Mandato de junta directiva",
        "Presión regulatoria",
        "Amenaza de fintechs/startups",
    ],
    expected_objections: &[
        "¿Cuánto riesgo tiene esto?",
        "¿Ya está probado en el sector?",
        "¿Cuánto tiempo toma?",
        "¿Qué pasa con nuestros sistemas actuales?",
    ],
    sales_approach: &[
        "Mostrar casos de éxito en su sector",
        "Cuantificar ROI específicamente",
        "Implementación gradual y de bajo riesgo",
        "Énfasis en seguridad y compliance",
        "Integración con sistemas legacy",
    ],
    ideal_entry_point: "Automatización de procesos back-office críticos",
    expansion_potential: "$$$",
};

static AMBITIOUS_SCALER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::AmbitiousScaler,
    display_name: "📈 Ambitious Scaler",
    description: "Empresa en crecimiento que no logra escalar operaciones",
    typical_frustrations: &[
        "No puedo crecer sin contratar más gente",
        "Los márgenes se están reduciendo con el crecimiento",
        "Procesos manuales nos limitan",
        "Cometemos errores por ir muy rápido",
    ],
    motivators: &[
        "Alcanzar objetivos de crecimiento",
        "Mantener márgenes rentables",
        "Superar al líder del mercado",
        "Prepararse para ronda de inversión",
    ],
    expected_objections: &[
        "¿Puedo implementar esto rápido?",
        "¿Funcionará con mi crecimiento acelerado?",
        "¿Cuánto tiempo de mi equipo necesita?",
        "¿Y si cambian mis necesidades?",
    ],
    sales_approach: &[
        "Velocidad de implementación",
        "Automatización de procesos que frenan crecimiento",
        "Quick wins visibles en 60-90 días",
        "Arquitectura escalable",
        "ROI en reducción de contrataciones",
    ],
    ideal_entry_point: "Automatización de operaciones core (pedidos, inventario, atención)",
    expansion_potential: "$$",
};

static DIGITAL_BEGINNER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::DigitalBeginner,
    display_name: "🐣 Digital Beginner",
    description: "Empresa tradicional con procesos manuales, iniciando transformación",
    typical_frustrations: &[
        "Todo es manual y lento",
        "No tenemos visibilidad de la operación",
        "Dependemos de personas clave",
        "Cometemos muchos errores",
    ],
    motivators: &[
        "Modernización necesaria",
        "Cambio generacional en liderazgo",
        "Presión de clientes por mejores servicios",
        "Reducción de costos operativos",
    ],
    expected_objections: &[
        "¿Mi equipo podrá adaptarse?",
        "¿No es muy costoso?",
        "¿Realmente necesitamos IA?",
        "¿Por dónde empezamos?",
    ],
    sales_approach: &[
        "Educación en transformación digital primero",
        "Empezar con digitalización básica",
        "Cambio cultural y gestión del cambio",
        "Hitos pequeños y frecuentes",
        "Capacitación intensiva del equipo",
    ],
    ideal_entry_point: "Digitalización de procesos críticos + BI básico",
    expansion_potential: "$",
};

static INNOVATION_THEATER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::InnovationTheater,
    display_name: "🎭 Innovation Theater",
    description: "Buscan 'hacer IA' sin problema claro, riesgo alto",
    typical_frustrations: &[
        "Tenemos que innovar",
        "Todos hablan de IA",
        "No queremos quedarnos atrás",
        "La competencia ya tiene IA",
    ],
    motivators: &[
        "Presión de stakeholders",
        "FOMO (Fear of Missing Out)",
        "Marketing / relaciones públicas",
        "Experimentación sin ROI claro",
    ],
    expected_objections: &[
        "¿Podemos hacerlo más barato?",
        "¿Qué pueden hacer otras consultoras?",
        "¿Incluye el desarrollo completo?",
        "¿No podemos solo hacer un piloto?",
    ],
    sales_approach: &[
        "Calificar muy bien antes de invertir tiempo",
        "Alinear expectativas con realidad",
        "Definir problema específico primero",
        "Propuesta educativa (workshop) en vez de proyecto",
        "Evitar compromisos de largo plazo",
    ],
    ideal_entry_point: "Diagnóstico $12K para validar si hay caso de negocio real",
    expansion_potential: "⚠️",
};

static DISTRESSED_FIGHTER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::DistressedFighter,
    display_name: "⚔️ Distressed Fighter",
    description: "Bajo presión competitiva extrema, necesita ROI inmediato",
    typical_frustrations: &[
        "Estamos perdiendo participación de mercado",
        "Los competidores son más eficientes",
        "Nuestros costos son muy altos",
        "Clientes se están yendo",
    ],
    motivators: &[
        "Sobrevivencia",
        "Recuperar competitividad",
        "Reducción drástica de costos",
        "Retener clientes clave",
    ],
    expected_objections: &[
        "¿Cuánto tiempo tarda en dar resultados?",
        "¿El ROI es garantizado?",
        "¿Podemos pagar en hitos?",
        "¿Qué pasa si no funciona?",
    ],
    sales_approach: &[
        "ROI medible y rápido (90 días)",
        "Enfoque en reducción de costos inmediata",
        "Quick wins antes que transformación",
        "Modelo de pago por resultados si es posible",
        "Evaluar viabilidad financiera del cliente",
    ],
    ideal_entry_point: "Automatización de proceso más costoso",
    expansion_potential: "$$",
};

static TIRE_KICKER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::TireKicker,
    display_name: "🚫 Tire Kicker",
    description: "Solo cotizando, sin presupuesto ni urgencia real",
    typical_frustrations: &[
        "Curiosidad general",
        "Tarea asignada por jefe",
        "Comparando opciones sin compromiso",
        "Estudiante/investigador disfrazado",
    ],
    motivators: &[
        "Cumplir con tarea asignada",
        "Educación personal",
        "Benchmark de mercado",
        "Posible futuro (sin timeline)",
    ],
    expected_objections: &[
        "Todo objeción es válida",
        "No hay urgencia real",
        "Probablemente no llegue a contratar",
    ],
    sales_approach: &[
        "NO invertir tiempo en reuniones 1-on-1",
        "Respuesta automatizada con recursos",
        "Invitar a webinar/workshop grupal",
        "Nutrir para largo plazo (newsletter)",
    ],
    ideal_entry_point: "Ninguno - Descalificar cortésmente",
    expansion_potential: "🚫",
};

/// All profiles in priority order.
pub static CATALOG: [&ArchetypeProfile; 6] = [
    &TRADITIONAL_GIANT,
    &AMBITIOUS_SCALER,
    &DIGITAL_BEGINNER,
    &INNOVATION_THEATER,
    &DISTRESSED_FIGHTER,
    &TIRE_KICKER,
];

/// Returns the catalogue entry for an archetype.
pub fn profile(id: ArchetypeId) -> &'static ArchetypeProfile {
    match id {
        ArchetypeId::TraditionalGiant => &TRADITIONAL_GIANT,
        ArchetypeId::AmbitiousScaler => &AMBITIOUS_SCALER,
        ArchetypeId::DigitalBeginner => &DIGITAL_BEGINNER,
        ArchetypeId::InnovationTheater => &INNOVATION_THEATER,
        ArchetypeId::DistressedFighter => &DISTRESSED_FIGHTER,
        ArchetypeId::TireKicker => &TIRE_KICKER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_archetype_once() {
        assert_eq!(CATALOG.len(), 6);
        for (entry, id) in CATALOG.iter().zip(ArchetypeId::PRIORITY_ORDER) {
            assert_eq!(entry.id, id);
        }
    }

    #[test]
    fn profile_returns_matching_entry() {
        for id in ArchetypeId::PRIORITY_ORDER {
            assert_eq!(profile(id).id, id);
        }
    }

    #[test]
    fn every_profile_is_fully_described() {
        for entry in CATALOG {
            assert!(!entry.display_name.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.typical_frustrations.is_empty());
            assert!(!entry.motivators.is_empty());
            assert!(entry.expected_objections.len() >= 3);
            assert!(!entry.sales_approach.is_empty());
            assert!(!entry.ideal_entry_point.is_empty());
            assert!(!entry.expansion_potential.is_empty());
        }
    }
}

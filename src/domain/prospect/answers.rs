//! Questionnaire option strings, as defined by the external form
//! configuration.
//!
//! The engine never validates answers against these lists; they are the
//! reference content for the scoring tables and classification rules.
//! An answer outside its list degrades to zero points and is surfaced
//! as an unrecognized-answer warning.

/// Motivation multi-select tags.
pub mod motivation {
    pub const COMPETITIVE_PRESSURE: &str =
        "Mis competidores están usando IA y me están dejando atrás";
    pub const SLOW_PROCESSES: &str =
        "Tengo procesos lentos y costosos que creo que la IA podría mejorar";
    pub const COST_REDUCTION: &str = "Quiero reducir costos operativos";
    pub const SPECIFIC_PROBLEM: &str = "Tengo un problema específico que resolver";
    pub const CURIOSITY: &str = "Curiosidad / exploración general";
    pub const BOARD_MANDATE: &str = "Me mandaron a explorar esto (junta directiva/socios)";

    pub const ALL: &[&str] = &[
        COMPETITIVE_PRESSURE,
        SLOW_PROCESSES,
        COST_REDUCTION,
        SPECIFIC_PROBLEM,
        CURIOSITY,
        BOARD_MANDATE,
    ];
}

/// How decisions are made day to day.
pub mod decision_making {
    pub const AUTOMATED_REPORTS: &str = "Basados en reportes automáticos de sistemas";
    pub const MANUAL_REPORTS: &str = "Basados en reportes que alguien arma manualmente";
    pub const SPREADSHEETS: &str = "Basados en Excel que alimentamos nosotros";
    pub const INTUITION: &str = "Basados en intuición y experiencia";
    pub const ASK_AROUND: &str = "Basados en 'ir preguntando a cada área'";

    pub const ALL: &[&str] = &[
        AUTOMATED_REPORTS,
        MANUAL_REPORTS,
        SPREADSHEETS,
        INTUITION,
        ASK_AROUND,
    ];
}

/// State of the company's critical processes.
pub mod critical_processes {
    pub const DOCUMENTED: &str = "Están documentados y son iguales siempre";
    pub const PERSON_DEPENDENT: &str = "Dependen de quién los ejecute";
    pub const UNDOCUMENTED: &str = "Funcionan pero nadie sabe exactamente cómo";
    pub const EVER_CHANGING: &str = "Cambian constantemente según la situación";

    pub const ALL: &[&str] = &[DOCUMENTED, PERSON_DEPENDENT, UNDOCUMENTED, EVER_CHANGING];
}

/// Share of time spent on repetitive tasks.
pub mod repetitive_tasks {
    pub const UNDER_20: &str = "Menos del 20% del tiempo";
    pub const FROM_20_TO_40: &str = "20-40% del tiempo";
    pub const FROM_40_TO_60: &str = "40-60% del tiempo";
    pub const OVER_60: &str = "Más del 60% del tiempo";
    pub const UNKNOWN: &str = "No tengo idea";

    pub const ALL: &[&str] = &[UNDER_20, FROM_20_TO_40, FROM_40_TO_60, OVER_60, UNKNOWN];
}

/// How information flows between areas.
pub mod information_sharing {
    pub const CONNECTED_SYSTEMS: &str = "Sí, todo está en sistemas conectados";
    pub const AD_HOC: &str = "Más o menos, hay que pedirse cosas por email/WhatsApp";
    pub const SILOED: &str = "No, cada área tiene su propia información";
    pub const SPREADSHEET_CHAOS: &str = "¿Qué información? (Cada uno tiene su Excel)";

    pub const ALL: &[&str] = &[CONNECTED_SYSTEMS, AD_HOC, SILOED, SPREADSHEET_CHAOS];
}

/// Availability of an in-house technical team.
pub mod technical_team {
    pub const FULL_TEAM: &str = "Sí, equipo completo (5+ personas)";
    pub const SMALL_TEAM: &str = "Sí, pequeño (1-4 personas)";
    pub const OUTSOURCED: &str = "No, contratamos externos cuando se necesita";
    pub const IMPROVISED: &str = "No, yo mismo/mi contador/mi sobrino nos ayuda";

    pub const ALL: &[&str] = &[FULL_TEAM, SMALL_TEAM, OUTSOURCED, IMPROVISED];
}

/// Capacity to fund an implementation.
pub mod implementation_capacity {
    pub const BUDGET_READY: &str = "Tenemos presupuesto y podemos decidir";
    pub const APPROVAL_NEEDED: &str = "Tendríamos que aprobar presupuesto (1-3 meses)";
    pub const NEXT_YEAR: &str = "Tendríamos que planificarlo para próximo año";
    pub const NO_BUDGET: &str = "No hay presupuesto disponible";

    pub const ALL: &[&str] = &[BUDGET_READY, APPROVAL_NEEDED, NEXT_YEAR, NO_BUDGET];
}

/// Technology investment over the recent past.
pub mod recent_investment {
    pub const SIGNIFICANT: &str = "Sí, inversiones significativas (>$50M COP)";
    pub const MODERATE: &str = "Sí, inversiones moderadas ($10-50M COP)";
    pub const SMALL: &str = "Sí, inversiones pequeñas (<$10M COP)";
    pub const NONE: &str = "No, seguimos con lo mismo de siempre";

    pub const ALL: &[&str] = &[SIGNIFICANT, MODERATE, SMALL, NONE];
}

/// The prospect's stated primary frustration.
pub mod primary_frustration {
    pub const CANNOT_SCALE: &str = "No puedo escalar sin contratar más gente";
    pub const SLOW_SERVICE: &str = "Perdemos clientes por servicio lento";
    pub const MANUAL_ERRORS: &str = "Cometemos muchos errores manuales";
    pub const NO_VISIBILITY: &str = "No sé qué está pasando en tiempo real";
    pub const HIGH_COSTS: &str = "Los costos operativos están muy altos";
    pub const OTHER: &str = "Otro";

    pub const ALL: &[&str] = &[
        CANNOT_SCALE,
        SLOW_SERVICE,
        MANUAL_ERRORS,
        NO_VISIBILITY,
        HIGH_COSTS,
        OTHER,
    ];
}

/// Urgency to act.
pub mod urgency {
    pub const IMMEDIATE: &str = "Muy urgente, necesito resolver ya (próximos 3 meses)";
    pub const THIS_YEAR: &str = "Importante, quiero avanzar este año";
    pub const EXPLORING: &str = "Exploración, sin apuro";
    pub const JUST_LOOKING: &str = "Solo estoy mirando opciones";

    pub const ALL: &[&str] = &[IMMEDIATE, THIS_YEAR, EXPLORING, JUST_LOOKING];
}

/// Who else must approve a purchase.
pub mod approval_process {
    pub const SOLE_DECISION_MAKER: &str = "Nadie, yo decido";
    pub const PARTNERS: &str = "Mi socio(s)";
    pub const BOARD: &str = "Junta directiva";
    pub const COMPLEX: &str = "Varias personas (complejo)";

    pub const ALL: &[&str] = &[SOLE_DECISION_MAKER, PARTNERS, BOARD, COMPLEX];
}

/// Budget bracket for the initiative (COP).
pub mod budget {
    pub const OVER_60M: &str = "Más de $60M COP";
    pub const FROM_30M_TO_60M: &str = "$30M - $60M COP";
    pub const FROM_10M_TO_30M: &str = "$10M - $30M COP";
    pub const UNDER_10M: &str = "Menos de $10M COP";
    pub const UNDISCLOSED: &str = "Prefiero no decirlo / No lo sé aún";

    pub const ALL: &[&str] = &[
        OVER_60M,
        FROM_30M_TO_60M,
        FROM_10M_TO_30M,
        UNDER_10M,
        UNDISCLOSED,
    ];
}

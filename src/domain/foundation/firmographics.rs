//! Firmographic enumerations for prospect identification.
//!
//! These mirror the fixed option sets of the intake form. Display labels
//! reproduce the form's option strings verbatim so downstream reporting
//! matches what the prospect actually selected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry sector of the prospect's company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Banking,
    Insurance,
    Retail,
    Manufacturing,
    ProfessionalServices,
    Health,
    Education,
    Government,
    Logistics,
    Construction,
    Other,
}

impl Sector {
    /// All sectors, in form declaration order.
    pub const ALL: [Sector; 11] = [
        Sector::Banking,
        Sector::Insurance,
        Sector::Retail,
        Sector::Manufacturing,
        Sector::ProfessionalServices,
        Sector::Health,
        Sector::Education,
        Sector::Government,
        Sector::Logistics,
        Sector::Construction,
        Sector::Other,
    ];

    /// Returns the intake form's display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Banking => "🏦 Banca",
            Sector::Insurance => "🛡️ Seguros",
            Sector::Retail => "🛒 Retail",
            Sector::Manufacturing => "🏭 Manufactura",
            Sector::ProfessionalServices => "💼 Servicios Profesionales",
            Sector::Health => "🏥 Salud",
            Sector::Education => "📚 Educación",
            Sector::Government => "🏛️ Gobierno",
            Sector::Logistics => "🚚 Logística/Transporte",
            Sector::Construction => "🏗️ Construcción",
            Sector::Other => "Otro",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Annual revenue bracket (COP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevenueBracket {
    Under500M,
    From500MTo2000M,
    From2000MTo10000M,
    Over10000M,
}

impl RevenueBracket {
    /// All brackets, smallest first.
    pub const ALL: [RevenueBracket; 4] = [
        RevenueBracket::Under500M,
        RevenueBracket::From500MTo2000M,
        RevenueBracket::From2000MTo10000M,
        RevenueBracket::Over10000M,
    ];

    /// Returns the intake form's display label.
    pub fn label(&self) -> &'static str {
        match self {
            RevenueBracket::Under500M => "Menos de $500M COP",
            RevenueBracket::From500MTo2000M => "$500M - $2,000M COP",
            RevenueBracket::From2000MTo10000M => "$2,000M - $10,000M COP",
            RevenueBracket::Over10000M => "Más de $10,000M COP",
        }
    }
}

impl fmt::Display for RevenueBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Headcount bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadcountBracket {
    UpTo20,
    From21To50,
    From51To200,
    From201To500,
    Over500,
}

impl HeadcountBracket {
    /// All brackets, smallest first.
    pub const ALL: [HeadcountBracket; 5] = [
        HeadcountBracket::UpTo20,
        HeadcountBracket::From21To50,
        HeadcountBracket::From51To200,
        HeadcountBracket::From201To500,
        HeadcountBracket::Over500,
    ];

    /// Returns the intake form's display label.
    pub fn label(&self) -> &'static str {
        match self {
            HeadcountBracket::UpTo20 => "1-20",
            HeadcountBracket::From21To50 => "21-50",
            HeadcountBracket::From51To200 => "51-200",
            HeadcountBracket::From201To500 => "201-500",
            HeadcountBracket::Over500 => "Más de 500",
        }
    }
}

impl fmt::Display for HeadcountBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! Prospect identity and firmographics.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HeadcountBracket, RevenueBracket, Sector, ValidationError};

/// Contact person details captured by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Job title as stated on the form.
    pub role: String,
}

impl ContactInfo {
    /// Creates contact details. The email must be present.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(ValidationError::empty_field("contact_email"));
        }
        Ok(Self {
            name: name.into(),
            email,
            phone: phone.into(),
            role: role.into(),
        })
    }
}

/// Company identity and firmographics. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectInfo {
    pub company_name: String,
    pub sector: Sector,
    pub revenue_bracket: RevenueBracket,
    pub headcount_bracket: HeadcountBracket,
    pub contact: ContactInfo,
    pub city: String,
}

impl ProspectInfo {
    /// Creates prospect info. The company name must be present.
    pub fn new(
        company_name: impl Into<String>,
        sector: Sector,
        revenue_bracket: RevenueBracket,
        headcount_bracket: HeadcountBracket,
        contact: ContactInfo,
        city: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let company_name = company_name.into();
        if company_name.is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        Ok(Self {
            company_name,
            sector,
            revenue_bracket,
            headcount_bracket,
            contact,
            city: city.into(),
        })
    }
}

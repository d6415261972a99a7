use crate::ServiceId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const NAME_MAX_LEN: usize = 120;
pub const SLUG_MAX_LEN: usize = 80;
pub const MESSAGE_MAX_LEN: usize = 4000;
pub const POSTCODE_MAX_LEN: usize = 10;
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const MAX_SEARCH_LIMIT: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Fields of a service listing, used for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub hourly_rate: Option<Decimal>,
    pub is_active: bool,
}

/// Validation result for a service listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceValidation {
    Valid,
    MissingName,
    NameTooLong,
    InvalidSlug,
    NegativeRate,
}

impl ServiceValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::MissingName => Some("Service name is required"),
            Self::NameTooLong => Some("Service name must be at most 120 characters"),
            Self::InvalidSlug => Some(
                "Slug can only contain lowercase letters, numbers, and hyphens",
            ),
            Self::NegativeRate => Some("Hourly rate cannot be negative"),
        }
    }
}

/// Validate a service listing before it is stored.
///
/// Rules:
/// - name is non-empty and at most 120 characters
/// - slug is 1-80 characters of lowercase ASCII letters, digits and hyphens
/// - hourly rate, when present, is not negative
pub fn validate_service(details: &ServiceDetails) -> ServiceValidation {
    let name = details.name.trim();
    if name.is_empty() {
        return ServiceValidation::MissingName;
    }
    if name.chars().count() > NAME_MAX_LEN {
        return ServiceValidation::NameTooLong;
    }

    let slug = &details.slug;
    if slug.is_empty()
        || slug.len() > SLUG_MAX_LEN
        || !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return ServiceValidation::InvalidSlug;
    }

    if let Some(rate) = details.hourly_rate
        && rate.is_sign_negative()
    {
        return ServiceValidation::NegativeRate;
    }

    ServiceValidation::Valid
}

/// Suggested slug for a service name: lowercase words joined by hyphens,
/// other characters dropped.
pub fn slug_from_name(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(SLUG_MAX_LEN)
        .collect::<String>()
        .trim_end_matches('-')
        .to_string()
}

/// A contact form submission from the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEnquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub postcode: Option<String>,
    pub message: String,
}

impl ContactEnquiry {
    /// Returns a user-facing message for the first invalid field.
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("Please enter your name");
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            return Some("Name must be at most 120 characters");
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Some("Please enter your email");
        }
        if email.len() > EMAIL_MAX_LEN || !email.contains('@') {
            return Some("Please enter a valid email address");
        }
        if self.message.trim().is_empty() {
            return Some("Please tell us how we can help");
        }
        if self.message.chars().count() > MESSAGE_MAX_LEN {
            return Some("Message must be at most 4000 characters");
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAvailability {
    pub postcode: String,
    pub service_id: Option<ServiceId>,
}

/// Query string for `GET /locations/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSearch {
    pub q: String,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ServiceDetails {
        ServiceDetails {
            name: "Personal Care".into(),
            slug: "personal-care".into(),
            summary: "Help with daily routines".into(),
            description: "".into(),
            hourly_rate: Some(rust_decimal::dec!(65.50)),
            is_active: true,
        }
    }

    #[test]
    fn test_validate_service() {
        assert!(validate_service(&details()).is_valid());

        let mut d = details();
        d.name = "   ".into();
        assert_eq!(validate_service(&d), ServiceValidation::MissingName);

        let mut d = details();
        d.slug = "Personal Care".into();
        assert_eq!(validate_service(&d), ServiceValidation::InvalidSlug);

        let mut d = details();
        d.hourly_rate = Some(rust_decimal::dec!(-1));
        assert_eq!(validate_service(&d), ServiceValidation::NegativeRate);

        let mut d = details();
        d.hourly_rate = None;
        assert!(validate_service(&d).is_valid());
    }

    #[test]
    fn test_contact_validation() {
        let mut enquiry = ContactEnquiry {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            phone: None,
            postcode: Some("2000".into()),
            message: "Do you cover weekends?".into(),
        };
        assert_eq!(enquiry.validation_error(), None);

        enquiry.email = "not-an-email".into();
        assert_eq!(
            enquiry.validation_error(),
            Some("Please enter a valid email address")
        );

        enquiry.email = "jo@example.com".into();
        enquiry.message = "\n".into();
        assert_eq!(
            enquiry.validation_error(),
            Some("Please tell us how we can help")
        );
    }

    #[test]
    fn test_slug_from_name() {
        assert_eq!(slug_from_name("Dementia & Memory Care"), "dementia-memory-care");
        assert_eq!(slug_from_name("  24/7 Support "), "24-7-support");
        assert_eq!(slug_from_name("Café"), "caf");
        assert_eq!(slug_from_name(""), "");
    }
}

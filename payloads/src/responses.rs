use crate::{LeadId, ServiceId, UserId};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The signed-in administrator, as returned by `GET /me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

/// Response of `POST /login`.
///
/// The token is optional on the wire; a success without one is treated by
/// the client as a failed login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub hourly_rate: Option<Decimal>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A contact enquiry left on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub postcode: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub suburb: String,
    pub state: String,
    pub postcode: String,
}

impl Location {
    pub fn label(&self) -> String {
        format!("{}, {} {}", self.suburb, self.state, self.postcode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub postcode: String,
    pub available: bool,
    pub message: String,
}

/// A stored setting, as returned by `GET /settings/{key}/value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingValue<T> {
    pub key: String,
    pub value: T,
}

/// Content and timing of the one-time promotional toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupConfig {
    pub enabled: bool,
    pub title: String,
    pub message: String,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
    /// Delay before the toast appears, in milliseconds.
    pub delay_ms: u32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Free in-home assessment".into(),
            message: "Book a no-obligation care consultation with our team \
                      this month."
                .into(),
            cta_label: Some("Get in touch".into()),
            cta_href: Some("/contact".into()),
            delay_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}

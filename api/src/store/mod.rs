//! In-memory store for the reference backend.
//!
//! ## Design Decisions
//!
//! ### Single lock
//! - The whole store sits behind one `Mutex` held by the route for the
//!   duration of a synchronous operation. No operation awaits while holding
//!   it.
//!
//! ### Sessions
//! - Bearer tokens are random UUIDs mapped to the admin user and an expiry.
//!   Expired tokens are rejected exactly like unknown ones, and are swept
//!   whenever a new session is created.
//!
//! ### Time
//! - Operations that need the current time take it as an argument so the
//!   routes can read it from the (mockable) `TimeSource`.

mod seed;

use jiff::{Span, Timestamp};
use payloads::{LeadId, ServiceId, UserId, requests, responses};
use secrecy::{ExposeSecret, SecretBox};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Missing or unknown session token")]
    SessionNotFound,
    #[error("Session expired")]
    SessionExpired,
    #[error("Service not found")]
    ServiceNotFound,
    #[error("A service with the slug '{slug}' already exists")]
    SlugNotUnique { slug: String },
    #[error("{0}")]
    Invalid(&'static str),
    #[error("Setting not found")]
    SettingNotFound,
}

struct AdminAccount {
    user: responses::User,
    password: SecretBox<String>,
}

struct SessionRecord {
    user_id: UserId,
    expires_at: Timestamp,
}

pub struct Store {
    admin: AdminAccount,
    token_ttl: Span,
    sessions: HashMap<String, SessionRecord>,
    services: Vec<responses::Service>,
    leads: Vec<responses::Lead>,
    locations: Vec<responses::Location>,
    serviced_postcodes: HashSet<String>,
    settings: HashMap<String, serde_json::Value>,
}

impl Store {
    /// An empty store with a single administrator account.
    pub fn new(admin_email: &str, admin_password: &str, token_ttl: Span) -> Self {
        Self {
            admin: AdminAccount {
                user: responses::User {
                    id: UserId(Uuid::new_v4()),
                    email: admin_email.trim().to_lowercase(),
                    name: "Administrator".into(),
                },
                password: SecretBox::new(Box::new(admin_password.to_string())),
            },
            token_ttl,
            sessions: HashMap::new(),
            services: Vec::new(),
            leads: Vec::new(),
            locations: Vec::new(),
            serviced_postcodes: HashSet::new(),
            settings: HashMap::new(),
        }
    }

    /// A store populated with the catalogue, coverage area and site
    /// settings a fresh deployment starts with.
    pub fn seeded(
        admin_email: &str,
        admin_password: &str,
        token_ttl: Span,
        now: Timestamp,
    ) -> Self {
        let mut store = Self::new(admin_email, admin_password, token_ttl);
        seed::populate(&mut store, now);
        store
    }
}

/// Sessions
impl Store {
    /// Check credentials and open a session, returning the bearer token.
    pub fn login(
        &mut self,
        credentials: &requests::LoginCredentials,
        now: Timestamp,
    ) -> Result<(String, responses::User), StoreError> {
        let email_matches = credentials.email.trim().to_lowercase() == self.admin.user.email;
        let password_matches =
            credentials.password == *self.admin.password.expose_secret();
        if !(email_matches && password_matches) {
            return Err(StoreError::InvalidCredentials);
        }

        self.sessions.retain(|_, session| session.expires_at > now);

        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            SessionRecord {
                user_id: self.admin.user.id,
                expires_at: now + self.token_ttl,
            },
        );
        Ok((token, self.admin.user.clone()))
    }

    /// Resolve a bearer token to its user.
    pub fn session_user(
        &self,
        token: &str,
        now: Timestamp,
    ) -> Result<responses::User, StoreError> {
        let session = self
            .sessions
            .get(token)
            .ok_or(StoreError::SessionNotFound)?;
        if session.expires_at <= now {
            return Err(StoreError::SessionExpired);
        }
        if session.user_id != self.admin.user.id {
            return Err(StoreError::SessionNotFound);
        }
        Ok(self.admin.user.clone())
    }

    pub fn revoke_session(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}

/// Service listings
impl Store {
    pub fn services(&self) -> Vec<responses::Service> {
        self.services.clone()
    }

    pub fn service(
        &self,
        service_id: &ServiceId,
    ) -> Result<&responses::Service, StoreError> {
        self.services
            .iter()
            .find(|s| s.id == *service_id)
            .ok_or(StoreError::ServiceNotFound)
    }

    pub fn create_service(
        &mut self,
        details: requests::ServiceDetails,
        now: Timestamp,
    ) -> Result<responses::Service, StoreError> {
        check_service(&details)?;
        self.check_slug_free(&details.slug, None)?;

        let service = responses::Service {
            id: ServiceId(Uuid::new_v4()),
            name: details.name.trim().to_string(),
            slug: details.slug,
            summary: details.summary,
            description: details.description,
            hourly_rate: details.hourly_rate,
            is_active: details.is_active,
            created_at: now,
            updated_at: now,
        };
        self.services.push(service.clone());
        Ok(service)
    }

    pub fn update_service(
        &mut self,
        service_id: &ServiceId,
        details: requests::ServiceDetails,
        now: Timestamp,
    ) -> Result<responses::Service, StoreError> {
        check_service(&details)?;
        self.check_slug_free(&details.slug, Some(service_id))?;

        let service = self
            .services
            .iter_mut()
            .find(|s| s.id == *service_id)
            .ok_or(StoreError::ServiceNotFound)?;
        service.name = details.name.trim().to_string();
        service.slug = details.slug;
        service.summary = details.summary;
        service.description = details.description;
        service.hourly_rate = details.hourly_rate;
        service.is_active = details.is_active;
        service.updated_at = now;
        Ok(service.clone())
    }

    pub fn delete_service(
        &mut self,
        service_id: &ServiceId,
    ) -> Result<(), StoreError> {
        let before = self.services.len();
        self.services.retain(|s| s.id != *service_id);
        if self.services.len() == before {
            return Err(StoreError::ServiceNotFound);
        }
        Ok(())
    }

    fn check_slug_free(
        &self,
        slug: &str,
        except: Option<&ServiceId>,
    ) -> Result<(), StoreError> {
        let taken = self
            .services
            .iter()
            .any(|s| s.slug == slug && Some(&s.id) != except);
        if taken {
            return Err(StoreError::SlugNotUnique {
                slug: slug.to_string(),
            });
        }
        Ok(())
    }
}

fn check_service(details: &requests::ServiceDetails) -> Result<(), StoreError> {
    match requests::validate_service(details).error_message() {
        Some(message) => Err(StoreError::Invalid(message)),
        None => Ok(()),
    }
}

/// Coverage area
impl Store {
    /// Locations whose postcode, suburb, or any word of the suburb starts
    /// with `query` (case-insensitive).
    pub fn search_locations(
        &self,
        query: &str,
        limit: usize,
    ) -> Vec<responses::Location> {
        let query = query.trim().to_lowercase();
        self.locations
            .iter()
            .filter(|location| {
                let suburb = location.suburb.to_lowercase();
                location.postcode.starts_with(&query)
                    || suburb.starts_with(&query)
                    || suburb.split_whitespace().any(|w| w.starts_with(&query))
            })
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn check_availability(
        &self,
        request: &requests::CheckAvailability,
    ) -> Result<responses::Availability, StoreError> {
        let postcode = request.postcode.trim();
        if postcode.is_empty() {
            return Err(StoreError::Invalid("Postcode is required"));
        }

        if let Some(service_id) = &request.service_id {
            let service = self.service(service_id)?;
            if !service.is_active {
                return Ok(responses::Availability {
                    postcode: postcode.to_string(),
                    available: false,
                    message: format!(
                        "{} is not currently offered.",
                        service.name
                    ),
                });
            }
        }

        let available = self.serviced_postcodes.contains(postcode);
        let message = if available {
            format!("Great news! We provide care in {postcode}.")
        } else {
            format!(
                "We don't cover {postcode} yet. Leave your details and \
                 we'll let you know when we do."
            )
        };
        Ok(responses::Availability {
            postcode: postcode.to_string(),
            available,
            message,
        })
    }
}

/// Settings
impl Store {
    pub fn setting(&self, key: &str) -> Result<serde_json::Value, StoreError> {
        self.settings
            .get(key)
            .cloned()
            .ok_or(StoreError::SettingNotFound)
    }

    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) {
        self.settings.insert(key.to_string(), value);
    }
}

/// Leads
impl Store {
    pub fn create_lead(
        &mut self,
        enquiry: requests::ContactEnquiry,
        now: Timestamp,
    ) -> Result<LeadId, StoreError> {
        if let Some(message) = enquiry.validation_error() {
            return Err(StoreError::Invalid(message));
        }
        let id = LeadId(Uuid::new_v4());
        self.leads.push(responses::Lead {
            id,
            name: enquiry.name.trim().to_string(),
            email: enquiry.email.trim().to_string(),
            phone: non_empty(enquiry.phone),
            postcode: non_empty(enquiry.postcode),
            message: enquiry.message.trim().to_string(),
            created_at: now,
        });
        Ok(id)
    }

    /// All leads, newest first.
    pub fn leads(&self) -> Vec<responses::Lead> {
        let mut leads: Vec<_> = self.leads.iter().rev().cloned().collect();
        // stable sort keeps insertion order among equal timestamps
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leads
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

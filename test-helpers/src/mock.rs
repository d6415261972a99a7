//! Development dataset layered on top of the seeded store.
//!
//! The seed already carries the service catalogue, coverage area and popup
//! setting. This adds what only exists after the site has been running for a
//! while: admin-created listings and a backlog of contact enquiries spread
//! over the past few days.

use crate::TestApp;
use anyhow::Result;
use jiff::{Span, Timestamp};
use payloads::{LeadId, requests, responses};
use rust_decimal::dec;

pub struct DevDataset {
    pub admin: responses::User,
    pub extra_services: Vec<responses::Service>,
    pub leads: Vec<LeadId>,
}

const ENQUIRIES: &[(&str, &str, Option<&str>, &str)] = &[
    (
        "Margaret Nguyen",
        "margaret@example.com",
        Some("2042"),
        "Looking for weekday help for my father after his hip surgery.",
    ),
    (
        "Daniel Okafor",
        "daniel.okafor@example.com",
        Some("3121"),
        "Do you offer overnight respite on weekends?",
    ),
    (
        "Priya Sharma",
        "priya@example.com",
        None,
        "Could someone call me about companionship visits for my aunt?",
    ),
    (
        "Tom Walsh",
        "tom.walsh@example.com",
        Some("4350"),
        "Is Toowoomba in your service area yet?",
    ),
];

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        // start a few days back so leads get realistic timestamps
        let now = Timestamp::now();
        app.time_source.set(now - Span::new().hours(96));

        tracing::info!("👤 Logging in as the administrator");
        let admin = app.login_admin().await?;

        tracing::info!("🧾 Adding admin-created service listings");
        let mut extra_services = Vec::new();
        for details in extra_service_details() {
            extra_services.push(app.client.create_service(&details).await?);
        }

        tracing::info!("📬 Submitting contact enquiries");
        let mut leads = Vec::new();
        for (name, email, postcode, message) in ENQUIRIES {
            let enquiry = requests::ContactEnquiry {
                name: name.to_string(),
                email: email.to_string(),
                phone: None,
                postcode: postcode.map(str::to_string),
                message: message.to_string(),
            };
            leads.push(app.anonymous_client().submit_enquiry(&enquiry).await?);
            app.time_source.advance(Span::new().hours(20));
        }

        app.time_source.set(now);
        Ok(Self {
            admin,
            extra_services,
            leads,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Dataset summary");
        tracing::info!("   Admin: {} ({})", self.admin.name, self.admin.email);
        for service in &self.extra_services {
            tracing::info!("   Added service: {} /{}", service.name, service.slug);
        }
        tracing::info!("   Contact enquiries: {}", self.leads.len());
    }
}

fn extra_service_details() -> Vec<requests::ServiceDetails> {
    vec![
        crate::service_details_a(),
        requests::ServiceDetails {
            name: "Transport & Errands".into(),
            slug: "transport-errands".into(),
            summary: "Lifts to appointments and help with shopping".into(),
            description: "Door-to-door assistance with medical appointments, \
                          pharmacy runs and groceries."
                .into(),
            hourly_rate: Some(dec!(52.00)),
            is_active: true,
        },
    ]
}

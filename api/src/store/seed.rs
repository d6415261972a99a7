use jiff::Timestamp;
use payloads::{POPUP_CONFIG_KEY, requests::ServiceDetails, responses};
use rust_decimal::dec;

use super::Store;

const LOCATIONS: &[(&str, &str, &str)] = &[
    ("Sydney", "NSW", "2000"),
    ("Surry Hills", "NSW", "2010"),
    ("Paddington", "NSW", "2021"),
    ("Bondi", "NSW", "2026"),
    ("Bondi Junction", "NSW", "2022"),
    ("Newtown", "NSW", "2042"),
    ("Parramatta", "NSW", "2150"),
    ("Penrith", "NSW", "2750"),
    ("Chatswood", "NSW", "2067"),
    ("Manly", "NSW", "2095"),
    ("Melbourne", "VIC", "3000"),
    ("Richmond", "VIC", "3121"),
    ("St Kilda", "VIC", "3182"),
    ("Box Hill", "VIC", "3128"),
    ("Geelong", "VIC", "3220"),
    ("Brisbane", "QLD", "4000"),
    ("South Brisbane", "QLD", "4101"),
    ("Paddington", "QLD", "4064"),
    ("Toowoomba", "QLD", "4350"),
    ("Adelaide", "SA", "5000"),
];

// Metro areas only; regional postcodes are not covered yet.
const SERVICED_POSTCODES: &[&str] = &[
    "2000", "2010", "2021", "2022", "2026", "2042", "2067", "2150", "3000",
    "3121", "3182", "4000", "4101", "4064",
];

fn services() -> Vec<ServiceDetails> {
    vec![
        ServiceDetails {
            name: "Personal Care".into(),
            slug: "personal-care".into(),
            summary: "Support with showering, dressing and grooming".into(),
            description: "Respectful help with daily personal routines, \
                          delivered by trained carers at a pace that suits \
                          you."
                .into(),
            hourly_rate: Some(dec!(68.50)),
            is_active: true,
        },
        ServiceDetails {
            name: "Domestic Assistance".into(),
            slug: "domestic-assistance".into(),
            summary: "Cleaning, laundry and meal preparation".into(),
            description: "Keep your home safe and comfortable with regular \
                          help around the house."
                .into(),
            hourly_rate: Some(dec!(59.00)),
            is_active: true,
        },
        ServiceDetails {
            name: "Nursing Care".into(),
            slug: "nursing-care".into(),
            summary: "Clinical care from registered nurses".into(),
            description: "Wound care, medication management and post-hospital \
                          support in the comfort of home."
                .into(),
            hourly_rate: Some(dec!(110.00)),
            is_active: true,
        },
        ServiceDetails {
            name: "Respite Care".into(),
            slug: "respite-care".into(),
            summary: "A break for family carers".into(),
            description: "Short-term in-home care so regular carers can rest \
                          and recharge."
                .into(),
            hourly_rate: Some(dec!(72.00)),
            is_active: true,
        },
        ServiceDetails {
            name: "Companionship".into(),
            slug: "companionship".into(),
            summary: "Social visits, outings and conversation".into(),
            description: "Friendly company for appointments, shopping or a \
                          walk in the park."
                .into(),
            hourly_rate: Some(dec!(55.00)),
            is_active: true,
        },
        ServiceDetails {
            name: "Overnight Care".into(),
            slug: "overnight-care".into(),
            summary: "Active and sleepover night support".into(),
            description: "Peace of mind through the night, currently paused \
                          while we recruit."
                .into(),
            hourly_rate: None,
            is_active: false,
        },
    ]
}

pub(super) fn populate(store: &mut Store, now: Timestamp) {
    for details in services() {
        if let Err(e) = store.create_service(details, now) {
            tracing::error!("invalid seed service: {e}");
        }
    }

    store.locations = LOCATIONS
        .iter()
        .map(|(suburb, state, postcode)| responses::Location {
            suburb: suburb.to_string(),
            state: state.to_string(),
            postcode: postcode.to_string(),
        })
        .collect();

    store.serviced_postcodes = SERVICED_POSTCODES
        .iter()
        .map(|p| p.to_string())
        .collect();

    match serde_json::to_value(responses::PopupConfig::default()) {
        Ok(value) => store.set_setting(POPUP_CONFIG_KEY, value),
        Err(e) => tracing::error!("could not encode popup config: {e}"),
    }
}

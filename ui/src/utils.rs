use jiff::{Timestamp, tz};
use payloads::ClientError;
use rust_decimal::Decimal;
use session::Navigator;
use site::Failure;

use crate::BrowserNavigator;

/// Message for a failed public request.
///
/// Failures that belong on the error page navigate there; the message is
/// still returned for anything that renders before the route changes.
pub fn failure_message(error: &ClientError) -> String {
    let failure = Failure::classify(error);
    if let Some(url) = failure.error_page() {
        tracing::warn!(%url, "request failed, showing error page");
        BrowserNavigator.navigate(&url);
    }
    failure.message()
}

/// "$42.50 / hr", or "Contact us" for services priced on enquiry.
pub fn format_rate(rate: Option<Decimal>) -> String {
    match rate {
        Some(rate) => format!("${:.2} / hr", rate.round_dp(2)),
        None => "Contact us".to_string(),
    }
}

/// A timestamp in the browser's timezone.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%a, %d %b %Y %H:%M")
        .to_string()
}

//! Location search and availability checks.
//!
//! Every failure, local or remote, comes back as a message to show next to
//! the input. Nothing here navigates or panics.

use payloads::requests::{CheckAvailability, LocationSearch, POSTCODE_MAX_LEN};
use payloads::{APIClient, ServiceId, responses};

use crate::Failure;

pub const EMPTY_QUERY: &str = "Please enter a suburb or postcode";
pub const EMPTY_POSTCODE: &str = "Please enter a postcode";
pub const POSTCODE_TOO_LONG: &str = "That postcode doesn't look right";

/// The trimmed query, or the message for an empty one.
pub fn validate_query(query: &str) -> Result<&str, String> {
    match query.trim() {
        "" => Err(EMPTY_QUERY.into()),
        query => Ok(query),
    }
}

pub fn validate_postcode(postcode: &str) -> Result<&str, String> {
    match postcode.trim() {
        "" => Err(EMPTY_POSTCODE.into()),
        postcode if postcode.chars().count() > POSTCODE_MAX_LEN => {
            Err(POSTCODE_TOO_LONG.into())
        }
        postcode => Ok(postcode),
    }
}

pub async fn search_locations(
    client: &APIClient,
    query: &str,
    limit: Option<u32>,
) -> Result<Vec<responses::Location>, String> {
    let query = validate_query(query)?;
    let search = LocationSearch {
        q: query.to_string(),
        limit,
    };
    client.search_locations(&search).await.map_err(|e| {
        tracing::warn!("location search failed: {e}");
        Failure::classify(&e).message()
    })
}

pub async fn check_availability(
    client: &APIClient,
    postcode: &str,
    service_id: Option<ServiceId>,
) -> Result<responses::Availability, String> {
    let postcode = validate_postcode(postcode)?;
    let request = CheckAvailability {
        postcode: postcode.to_string(),
        service_id,
    };
    client.check_availability(&request).await.map_err(|e| {
        tracing::warn!("availability check failed: {e}");
        Failure::classify(&e).message()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query() {
        assert_eq!(validate_query("  bondi "), Ok("bondi"));
        assert_eq!(validate_query("   "), Err(EMPTY_QUERY.to_string()));
    }

    #[test]
    fn test_validate_postcode() {
        assert_eq!(validate_postcode(" 2000"), Ok("2000"));
        assert_eq!(validate_postcode(""), Err(EMPTY_POSTCODE.to_string()));
        assert_eq!(
            validate_postcode("12345678901"),
            Err(POSTCODE_TOO_LONG.to_string())
        );
    }
}

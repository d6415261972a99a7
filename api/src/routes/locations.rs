use actix_web::{HttpResponse, get, post, web};
use payloads::requests::{
    self, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, POSTCODE_MAX_LEN,
};
use std::sync::Mutex;

use crate::store::Store;

use super::{APIError, lock};

#[tracing::instrument(skip(store), fields(q = %search.q))]
#[get("/locations/search")]
pub async fn search_locations(
    search: web::Query<requests::LocationSearch>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    if search.q.trim().is_empty() {
        return Err(APIError::BadRequest(anyhow::anyhow!(
            "Search query is required"
        )));
    }
    let limit = search
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let locations = lock(&store)?.search_locations(&search.q, limit as usize);
    Ok(HttpResponse::Ok().json(locations))
}

#[tracing::instrument(skip(store))]
#[post("/check-availability")]
pub async fn check_availability(
    details: web::Json<requests::CheckAvailability>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    if details.postcode.trim().chars().count() > POSTCODE_MAX_LEN {
        return Err(APIError::BadRequest(anyhow::anyhow!(
            "Postcode is too long"
        )));
    }
    let availability = lock(&store)?.check_availability(&details)?;
    Ok(HttpResponse::Ok().json(availability))
}

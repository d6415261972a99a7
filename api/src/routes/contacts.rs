use actix_web::{HttpRequest, HttpResponse, get, post, web};
use payloads::requests;
use std::sync::Mutex;

use crate::store::Store;
use crate::time::TimeSource;

use super::{APIError, authenticate, lock, private_ok};

#[tracing::instrument(skip(enquiry, store, time_source), fields(lead_id = tracing::field::Empty))]
#[post("/contacts")]
pub async fn create_contact(
    enquiry: web::Json<requests::ContactEnquiry>,
    store: web::Data<Mutex<Store>>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let lead_id =
        lock(&store)?.create_lead(enquiry.into_inner(), time_source.now())?;
    tracing::Span::current().record("lead_id", tracing::field::display(&lead_id));
    Ok(HttpResponse::Ok().json(lead_id))
}

#[tracing::instrument(skip_all, fields(user_id = tracing::field::Empty))]
#[get("/contacts")]
pub async fn list_contacts(
    request: HttpRequest,
    store: web::Data<Mutex<Store>>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let store = lock(&store)?;
    authenticate(&request, &store, time_source.now())?;
    Ok(private_ok().json(store.leads()))
}

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use payloads::{ServiceId, requests};
use std::sync::Mutex;

use crate::store::Store;
use crate::time::TimeSource;

use super::{APIError, authenticate, lock, private_ok};

/// Every listing, active or not. Public pages filter on `is_active`.
#[tracing::instrument(skip_all)]
#[get("/all-services")]
pub async fn all_services(
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let services = lock(&store)?.services();
    Ok(HttpResponse::Ok().json(services))
}

#[tracing::instrument(
    skip(request, store, time_source),
    fields(user_id = tracing::field::Empty)
)]
#[post("/services")]
pub async fn create_service(
    request: HttpRequest,
    details: web::Json<requests::ServiceDetails>,
    store: web::Data<Mutex<Store>>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let now = time_source.now();
    let mut store = lock(&store)?;
    authenticate(&request, &store, now)?;
    let service = store.create_service(details.into_inner(), now)?;
    Ok(private_ok().json(service))
}

#[tracing::instrument(
    skip(request, details, store, time_source),
    fields(user_id = tracing::field::Empty)
)]
#[put("/services/{service_id}")]
pub async fn update_service(
    request: HttpRequest,
    path: web::Path<ServiceId>,
    details: web::Json<requests::ServiceDetails>,
    store: web::Data<Mutex<Store>>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let now = time_source.now();
    let mut store = lock(&store)?;
    authenticate(&request, &store, now)?;
    let service = store.update_service(&path, details.into_inner(), now)?;
    Ok(private_ok().json(service))
}

#[tracing::instrument(
    skip(request, store, time_source),
    fields(user_id = tracing::field::Empty)
)]
#[delete("/services/{service_id}")]
pub async fn delete_service(
    request: HttpRequest,
    path: web::Path<ServiceId>,
    store: web::Data<Mutex<Store>>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let mut store = lock(&store)?;
    authenticate(&request, &store, time_source.now())?;
    store.delete_service(&path)?;
    Ok(HttpResponse::Ok().finish())
}

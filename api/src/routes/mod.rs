pub mod contacts;
pub mod locations;
pub mod login;
pub mod services;
pub mod settings;

use actix_web::{
    HttpRequest, HttpResponse, HttpResponseBuilder, Responder, ResponseError,
    body::BoxBody, dev::HttpServiceFactory, get, http::header, web,
};
use jiff::Timestamp;
use payloads::responses;
use std::sync::{Mutex, MutexGuard};

use crate::store::{Store, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(login::login)
        .service(login::logout)
        .service(login::me)
        .service(services::all_services)
        .service(services::create_service)
        .service(services::update_service)
        .service(services::delete_service)
        .service(locations::search_locations)
        .service(locations::check_availability)
        .service(settings::setting_value)
        .service(contacts::create_contact)
        .service(contacts::list_contacts)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::AuthError(e) => {
                HttpResponse::Unauthorized().body(format!("{self}: {e}"))
            }
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidCredentials
            | StoreError::SessionNotFound
            | StoreError::SessionExpired => APIError::AuthError(e.into()),
            StoreError::ServiceNotFound | StoreError::SettingNotFound => {
                APIError::NotFound(e.into())
            }
            StoreError::SlugNotUnique { .. } | StoreError::Invalid(_) => {
                APIError::BadRequest(e.into())
            }
        }
    }
}

fn lock(store: &Mutex<Store>) -> Result<MutexGuard<'_, Store>, APIError> {
    store
        .lock()
        .map_err(|_| APIError::UnexpectedError(anyhow::anyhow!("store lock poisoned")))
}

/// The token from an `Authorization: Bearer <token>` header.
fn bearer_token(request: &HttpRequest) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve the request's bearer token to the signed-in admin.
fn authenticate(
    request: &HttpRequest,
    store: &Store,
    now: Timestamp,
) -> Result<responses::User, APIError> {
    let token = bearer_token(request).ok_or_else(|| {
        APIError::AuthError(anyhow::anyhow!("Missing bearer token"))
    })?;
    let user = store.session_user(token, now)?;
    // recorded here, but attaches to the span for the api route itself
    tracing::Span::current()
        .record("user_id", tracing::field::display(&user.id));
    Ok(user)
}

/// Responses to authenticated requests must not be cached.
fn private_ok() -> HttpResponseBuilder {
    let mut builder = HttpResponse::Ok();
    builder.insert_header((header::CACHE_CONTROL, "no-store"));
    builder
}

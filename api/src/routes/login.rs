use actix_web::{HttpRequest, HttpResponse, get, post, web};
use payloads::{requests, responses};
use std::sync::Mutex;

use crate::store::{Store, StoreError};
use crate::time::TimeSource;

use super::{APIError, authenticate, bearer_token, lock, private_ok};

#[tracing::instrument(
    skip(credentials, store, time_source),
    fields(email = %credentials.email, user_id = tracing::field::Empty)
)]
#[post("/login")]
pub async fn login(
    credentials: web::Json<requests::LoginCredentials>,
    store: web::Data<Mutex<Store>>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let mut store = lock(&store)?;
    match store.login(&credentials, time_source.now()) {
        Ok((token, user)) => {
            tracing::Span::current()
                .record("user_id", tracing::field::display(&user.id));
            Ok(private_ok().json(responses::LoginResponse {
                token: Some(token),
                user: Some(user),
            }))
        }
        Err(e @ StoreError::InvalidCredentials) => {
            tracing::info!("rejected login attempt");
            Err(APIError::AuthError(e.into()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Revoke the presented token. Always succeeds so that clients can log out
/// with a token the server has already forgotten.
#[tracing::instrument(skip_all, fields(revoked = tracing::field::Empty))]
#[post("/logout")]
pub async fn logout(
    request: HttpRequest,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let revoked = match bearer_token(&request) {
        Some(token) => lock(&store)?.revoke_session(token),
        None => false,
    };
    tracing::Span::current().record("revoked", revoked);
    Ok(HttpResponse::Ok().json(responses::SuccessMessage {
        message: "Logged out".into(),
    }))
}

#[tracing::instrument(skip_all, fields(user_id = tracing::field::Empty))]
#[get("/me")]
pub async fn me(
    request: HttpRequest,
    store: web::Data<Mutex<Store>>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let store = lock(&store)?;
    let user = authenticate(&request, &store, time_source.now())?;
    Ok(private_ok().json(user))
}

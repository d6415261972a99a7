use actix_web::{HttpResponse, get, web};
use payloads::responses;
use std::sync::Mutex;

use crate::store::Store;

use super::{APIError, lock};

#[tracing::instrument(skip(store))]
#[get("/settings/{key}/value")]
pub async fn setting_value(
    key: web::Path<String>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let key = key.into_inner();
    let value = lock(&store)?.setting(&key)?;
    Ok(HttpResponse::Ok().json(responses::SettingValue { key, value }))
}

use payloads::responses::Lead;
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

/// Contact enquiries, newest first. Admin only.
#[hook]
pub fn use_leads() -> FetchHookReturn<Vec<Lead>> {
    use_fetch((), || async {
        get_api_client().leads().await.map_err(|e| e.to_string())
    })
}

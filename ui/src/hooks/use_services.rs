use payloads::responses::Service;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, FetchState, use_fetch_with_cache},
};

/// Every service listing, active or not, cached in the global store.
///
/// Public pages filter with [`State::active_services`]; the dashboard shows
/// the whole list and writes changes back into the cache.
#[hook]
pub fn use_services() -> FetchHookReturn<Vec<Service>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached = {
        let state = state.clone();
        move || state.services.as_ref().cloned()
    };
    let should_fetch = move || !state.services.is_fetched();
    let fetch_and_cache = move || {
        let dispatch = dispatch.clone();
        async move {
            let services = get_api_client()
                .all_services()
                .await
                .map_err(|e| crate::utils::failure_message(&e))?;
            dispatch.reduce_mut(|state| {
                state.services = FetchState::Fetched(services.clone());
            });
            Ok(services)
        }
    };

    use_fetch_with_cache((), get_cached, should_fetch, fetch_and_cache)
}

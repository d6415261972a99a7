//! Hooks over `site::search`. Results of a superseded request are dropped,
//! so typing quickly cannot leave older results on screen.

use payloads::{
    ServiceId,
    responses::{Availability, Location},
};
use yew::prelude::*;

use crate::get_api_client;

#[derive(Clone, PartialEq)]
pub struct LocationSearch {
    pub results: Option<Vec<Location>>,
    /// Inline message for an empty query or a failed request.
    pub error: Option<String>,
    pub is_loading: bool,
    pub search: Callback<String>,
}

#[hook]
pub fn use_location_search() -> LocationSearch {
    let results = use_state(|| None::<Vec<Location>>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let latest = use_mut_ref(|| 0u64);

    let search = {
        let results = results.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let latest = latest.clone();

        use_callback((), move |query: String, _| {
            *latest.borrow_mut() += 1;
            let request = *latest.borrow();

            let results = results.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let latest = latest.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                let outcome =
                    site::search::search_locations(&get_api_client(), &query, None)
                        .await;
                if *latest.borrow() != request {
                    return;
                }
                match outcome {
                    Ok(found) => {
                        results.set(Some(found));
                        error.set(None);
                    }
                    Err(message) => {
                        results.set(None);
                        error.set(Some(message));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    LocationSearch {
        results: (*results).clone(),
        error: (*error).clone(),
        is_loading: *is_loading,
        search,
    }
}

#[derive(Clone, PartialEq)]
pub struct AvailabilityCheck {
    pub result: Option<Availability>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub check: Callback<(String, Option<ServiceId>)>,
}

#[hook]
pub fn use_availability_check() -> AvailabilityCheck {
    let result = use_state(|| None::<Availability>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let latest = use_mut_ref(|| 0u64);

    let check = {
        let result = result.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let latest = latest.clone();

        use_callback(
            (),
            move |(postcode, service_id): (String, Option<ServiceId>), _| {
                *latest.borrow_mut() += 1;
                let request = *latest.borrow();

                let result = result.clone();
                let error = error.clone();
                let is_loading = is_loading.clone();
                let latest = latest.clone();

                yew::platform::spawn_local(async move {
                    is_loading.set(true);
                    let outcome = site::search::check_availability(
                        &get_api_client(),
                        &postcode,
                        service_id,
                    )
                    .await;
                    if *latest.borrow() != request {
                        return;
                    }
                    match outcome {
                        Ok(availability) => {
                            result.set(Some(availability));
                            error.set(None);
                        }
                        Err(message) => {
                            result.set(None);
                            error.set(Some(message));
                        }
                    }
                    is_loading.set(false);
                });
            },
        )
    };

    AvailabilityCheck {
        result: (*result).clone(),
        error: (*error).clone(),
        is_loading: *is_loading,
        check,
    }
}

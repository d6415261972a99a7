use site::ErrorQuery;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_title};

/// Shows the `status` and `message` query parameters left by a failed
/// request. Missing or garbled parameters get generic text.
#[function_component]
pub fn ErrorPage() -> Html {
    let query = use_location()
        .map(|location| ErrorQuery::parse(location.query_str()))
        .unwrap_or_default();
    use_title(&query.title());

    html! {
        <div class="max-w-3xl mx-auto px-4 py-24 text-center">
            if let Some(status) = query.status {
                <p class="text-sm font-semibold text-teal-700">{status.to_string()}</p>
            }
            <h1 class="mt-2 text-3xl font-bold text-neutral-900">{query.title()}</h1>
            <p class="mt-4 text-neutral-600">{query.description()}</p>
            <div class="mt-8 flex justify-center gap-4">
                <Link<Route> to={Route::Home} classes="px-4 py-2 rounded-md bg-teal-700 text-white">
                    {"Back to home"}
                </Link<Route>>
                <Link<Route> to={Route::Contact} classes="px-4 py-2 rounded-md border border-neutral-300">
                    {"Contact us"}
                </Link<Route>>
            </div>
        </div>
    }
}

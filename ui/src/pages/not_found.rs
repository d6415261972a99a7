use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_title};

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page not found");

    html! {
        <div class="max-w-3xl mx-auto px-4 py-24 text-center">
            <h1 class="text-4xl font-bold text-neutral-900">{"404"}</h1>
            <p class="mt-2 text-neutral-600">{"Page not found"}</p>
            <Link<Route> to={Route::Home} classes="mt-6 inline-block text-teal-700 underline">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}

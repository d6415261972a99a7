use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_location_search;

/// Suburb or postcode lookup with results listed underneath.
#[function_component]
pub fn LocationSearch() -> Html {
    let search = use_location_search();
    let query = use_state(String::new);

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_submit = {
        let query = query.clone();
        let run = search.search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            run.emit((*query).clone());
        })
    };

    html! {
        <div class="space-y-3">
            <form onsubmit={on_submit} class="flex gap-2">
                <input
                    type="text"
                    value={(*query).clone()}
                    oninput={on_input}
                    placeholder="Suburb or postcode"
                    class="flex-1 px-3 py-2 border border-neutral-300 rounded-md"
                />
                <button
                    type="submit"
                    disabled={search.is_loading}
                    class="px-4 py-2 rounded-md bg-teal-700 text-white \
                           disabled:opacity-50"
                >
                    {if search.is_loading { "Searching..." } else { "Search" }}
                </button>
            </form>
            if let Some(error) = &search.error {
                <p class="text-sm text-red-600">{error}</p>
            }
            if let Some(results) = &search.results {
                if results.is_empty() {
                    <p class="text-sm text-neutral-600">
                        {"We couldn't find that area. Try a nearby suburb."}
                    </p>
                } else {
                    <ul class="divide-y divide-neutral-200 border rounded-md">
                        {for results.iter().map(|location| html! {
                            <li key={location.label()} class="px-3 py-2 text-sm">
                                {location.label()}
                            </li>
                        })}
                    </ul>
                }
            }
        </div>
    }
}

use payloads::requests::{ServiceDetails, slug_from_name, validate_service};
use rust_decimal::Decimal;
use std::str::FromStr;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, contexts::use_toast, get_api_client};

#[derive(Clone, PartialEq)]
struct Draft {
    name: String,
    slug: String,
    summary: String,
    description: String,
    hourly_rate: String,
    is_active: bool,
}

impl Draft {
    fn new() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            summary: String::new(),
            description: String::new(),
            hourly_rate: String::new(),
            is_active: true,
        }
    }

    fn details(&self) -> Result<ServiceDetails, String> {
        let hourly_rate = match self.hourly_rate.trim() {
            "" => None,
            rate => Some(
                Decimal::from_str(rate.trim_start_matches('$'))
                    .map_err(|_| "Hourly rate must be a number".to_string())?,
            ),
        };
        let slug = match self.slug.trim() {
            "" => slug_from_name(&self.name),
            slug => slug.to_string(),
        };
        let details = ServiceDetails {
            name: self.name.trim().to_string(),
            slug,
            summary: self.summary.trim().to_string(),
            description: self.description.trim().to_string(),
            hourly_rate,
            is_active: self.is_active,
        };
        match validate_service(&details).error_message() {
            Some(message) => Err(message.to_string()),
            None => Ok(details),
        }
    }
}

/// Form for adding a service listing.
#[function_component]
pub fn ServiceForm() -> Html {
    let dispatch = use_dispatch::<State>();
    let toast = use_toast();
    let draft = use_state(Draft::new);
    let error = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let text_input = |apply: fn(&mut Draft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(Draft {
                description: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_active = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(Draft {
                is_active: input.checked(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let is_saving = is_saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let details = match draft.details() {
                Ok(details) => details,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            let draft = draft.clone();
            let error = error.clone();
            let is_saving = is_saving.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                error.set(None);

                match get_api_client().create_service(&details).await {
                    Ok(service) => {
                        tracing::info!(slug = %service.slug, "service created");
                        toast.success(format!("Added {}", service.name));
                        dispatch.reduce_mut(|state| state.upsert_service(service));
                        draft.set(Draft::new());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }

                is_saving.set(false);
            });
        })
    };

    let field = "w-full px-3 py-2 border border-neutral-300 rounded-md";

    html! {
        <form onsubmit={on_submit} class="space-y-4 bg-white p-6 rounded-lg shadow-sm">
            <h2 class="text-lg font-semibold">{"Add a service"}</h2>
            <div class="grid grid-cols-2 gap-4">
                <label class="block text-sm">
                    {"Name"}
                    <input
                        type="text"
                        class={field}
                        value={draft.name.clone()}
                        oninput={text_input(|d, v| d.name = v)}
                    />
                </label>
                <label class="block text-sm">
                    {"Slug"}
                    <input
                        type="text"
                        class={field}
                        placeholder={slug_from_name(&draft.name)}
                        value={draft.slug.clone()}
                        oninput={text_input(|d, v| d.slug = v)}
                    />
                </label>
                <label class="block text-sm col-span-2">
                    {"Summary"}
                    <input
                        type="text"
                        class={field}
                        value={draft.summary.clone()}
                        oninput={text_input(|d, v| d.summary = v)}
                    />
                </label>
                <label class="block text-sm col-span-2">
                    {"Description"}
                    <textarea
                        rows="4"
                        class={field}
                        value={draft.description.clone()}
                        oninput={on_description}
                    />
                </label>
                <label class="block text-sm">
                    {"Hourly rate (AUD)"}
                    <input
                        type="text"
                        inputmode="decimal"
                        class={field}
                        placeholder="Leave blank to quote on enquiry"
                        value={draft.hourly_rate.clone()}
                        oninput={text_input(|d, v| d.hourly_rate = v)}
                    />
                </label>
                <label class="flex items-center gap-2 text-sm mt-6">
                    <input
                        type="checkbox"
                        checked={draft.is_active}
                        onchange={on_active}
                    />
                    {"Show on the public site"}
                </label>
            </div>
            if let Some(message) = &*error {
                <p class="text-sm text-red-600">{message}</p>
            }
            <button
                type="submit"
                disabled={*is_saving}
                class="px-4 py-2 rounded-md bg-teal-700 text-white disabled:opacity-50"
            >
                {if *is_saving { "Saving..." } else { "Add service" }}
            </button>
        </form>
    }
}

use payloads::{ServiceId, responses::Service};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_availability_check;

#[derive(Properties, PartialEq)]
pub struct AvailabilityCheckerProps {
    /// Services to offer in the picker; the check is for any service when
    /// none is picked.
    #[prop_or_default]
    pub services: Vec<Service>,
}

/// "Do you service my area?" form.
#[function_component]
pub fn AvailabilityChecker(props: &AvailabilityCheckerProps) -> Html {
    let availability = use_availability_check();
    let postcode = use_state(String::new);
    let service_id = use_state(|| None::<ServiceId>);

    let on_postcode = {
        let postcode = postcode.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            postcode.set(input.value());
        })
    };

    let on_service = {
        let service_id = service_id.clone();
        let services = props.services.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let picked = services
                .iter()
                .find(|s| s.id.to_string() == select.value())
                .map(|s| s.id);
            service_id.set(picked);
        })
    };

    let on_submit = {
        let postcode = postcode.clone();
        let service_id = service_id.clone();
        let check = availability.check.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            check.emit(((*postcode).clone(), *service_id));
        })
    };

    html! {
        <div class="space-y-3">
            <form onsubmit={on_submit} class="flex flex-wrap gap-2">
                <input
                    type="text"
                    inputmode="numeric"
                    value={(*postcode).clone()}
                    oninput={on_postcode}
                    placeholder="Postcode"
                    class="w-32 px-3 py-2 border border-neutral-300 rounded-md"
                />
                if !props.services.is_empty() {
                    <select
                        onchange={on_service}
                        class="px-3 py-2 border border-neutral-300 rounded-md"
                    >
                        <option value="" selected={service_id.is_none()}>
                            {"Any service"}
                        </option>
                        {for props.services.iter().map(|service| html! {
                            <option
                                key={service.id.to_string()}
                                value={service.id.to_string()}
                                selected={*service_id == Some(service.id)}
                            >
                                {&service.name}
                            </option>
                        })}
                    </select>
                }
                <button
                    type="submit"
                    disabled={availability.is_loading}
                    class="px-4 py-2 rounded-md bg-teal-700 text-white \
                           disabled:opacity-50"
                >
                    {"Check availability"}
                </button>
            </form>
            if let Some(error) = &availability.error {
                <p class="text-sm text-red-600">{error}</p>
            }
            if let Some(result) = &availability.result {
                <p class={classes!(
                    "text-sm",
                    if result.available { "text-green-700" } else { "text-amber-700" }
                )}>
                    {&result.message}
                </p>
            }
        </div>
    }
}

use payloads::requests::ContactEnquiry;
use site::Failure;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    contexts::use_toast, get_api_client, hooks::use_title,
    utils::failure_message,
};

#[derive(Clone, Default, PartialEq)]
struct Fields {
    name: String,
    email: String,
    phone: String,
    postcode: String,
    message: String,
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Fields {
    fn enquiry(&self) -> ContactEnquiry {
        ContactEnquiry {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            postcode: optional(&self.postcode),
            message: self.message.trim().to_string(),
        }
    }
}

#[function_component]
pub fn ContactPage() -> Html {
    use_title("Contact us");
    let toast = use_toast();
    let fields = use_state(Fields::default);
    let error = use_state(|| None::<String>);
    let is_sending = use_state(|| false);
    let sent = use_state(|| false);

    let input = |apply: fn(&mut Fields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            apply(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            fields.set(Fields {
                message: input.value(),
                ..(*fields).clone()
            });
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let error = error.clone();
        let is_sending = is_sending.clone();
        let sent = sent.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let enquiry = fields.enquiry();
            if let Some(message) = enquiry.validation_error() {
                error.set(Some(message.to_string()));
                return;
            }

            let fields = fields.clone();
            let error = error.clone();
            let is_sending = is_sending.clone();
            let sent = sent.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_sending.set(true);
                error.set(None);

                match get_api_client().submit_enquiry(&enquiry).await {
                    Ok(lead_id) => {
                        tracing::info!(%lead_id, "enquiry sent");
                        toast.success("Thanks, we'll be in touch shortly.");
                        fields.set(Fields::default());
                        sent.set(true);
                    }
                    Err(e) => match Failure::classify(&e) {
                        Failure::Invalid(message) => error.set(Some(message)),
                        _ => error.set(Some(failure_message(&e))),
                    },
                }

                is_sending.set(false);
            });
        })
    };

    let field = "w-full mt-1 px-3 py-2 border border-neutral-300 rounded-md";

    html! {
        <div class="max-w-2xl mx-auto px-4 py-12">
            <div class="animate-on-scroll fadeInDown">
                <h1 class="text-3xl font-bold text-neutral-900">{"Contact us"}</h1>
                <p class="mt-2 text-neutral-600">
                    {"Tell us a little about the support you're looking for and a care coordinator will call you back."}
                </p>
            </div>
            if *sent {
                <div class="mt-6 p-4 rounded-md bg-green-50 border border-green-200 text-green-800">
                    {"Your enquiry has been sent."}
                </div>
            }
            <form onsubmit={on_submit} class="mt-8 space-y-4">
                <label class="block text-sm">
                    {"Your name"}
                    <input type="text" class={field} value={fields.name.clone()}
                        oninput={input(|f, v| f.name = v)} />
                </label>
                <label class="block text-sm">
                    {"Email"}
                    <input type="email" class={field} value={fields.email.clone()}
                        oninput={input(|f, v| f.email = v)} />
                </label>
                <div class="grid grid-cols-2 gap-4">
                    <label class="block text-sm">
                        {"Phone (optional)"}
                        <input type="tel" class={field} value={fields.phone.clone()}
                            oninput={input(|f, v| f.phone = v)} />
                    </label>
                    <label class="block text-sm">
                        {"Postcode (optional)"}
                        <input type="text" class={field} value={fields.postcode.clone()}
                            oninput={input(|f, v| f.postcode = v)} />
                    </label>
                </div>
                <label class="block text-sm">
                    {"How can we help?"}
                    <textarea rows="5" class={field} value={fields.message.clone()}
                        oninput={on_message} />
                </label>
                if let Some(message) = &*error {
                    <p class="text-sm text-red-600">{message}</p>
                }
                <button
                    type="submit"
                    disabled={*is_sending}
                    class="px-5 py-3 rounded-md bg-teal-700 text-white disabled:opacity-50"
                >
                    {if *is_sending { "Sending..." } else { "Send enquiry" }}
                </button>
            </form>
        </div>
    }
}

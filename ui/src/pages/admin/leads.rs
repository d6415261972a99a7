use yew::prelude::*;

use crate::{
    hooks::{use_leads, use_title},
    utils::format_timestamp,
};

#[function_component]
pub fn LeadsPage() -> Html {
    use_title("Enquiries");
    let leads = use_leads();
    let on_refresh = {
        let refetch = leads.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold">{"Enquiries"}</h1>
                <button onclick={on_refresh} class="text-sm text-teal-700 underline">
                    {"Refresh"}
                </button>
            </div>
            {leads.render("enquiries", |leads, is_loading, error| html! {
                <>
                    if let Some(error) = error {
                        <p class="text-sm text-red-600">{error}</p>
                    }
                    if leads.is_empty() {
                        <p class="text-neutral-600">{"No enquiries yet."}</p>
                    } else {
                        <table class={classes!(
                            "w-full", "bg-white", "rounded-lg", "shadow-sm", "text-sm",
                            is_loading.then_some("opacity-60")
                        )}>
                            <thead class="text-left text-neutral-500">
                                <tr>
                                    <th class="px-4 py-2">{"Received"}</th>
                                    <th class="px-4 py-2">{"Name"}</th>
                                    <th class="px-4 py-2">{"Contact"}</th>
                                    <th class="px-4 py-2">{"Postcode"}</th>
                                    <th class="px-4 py-2">{"Message"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-neutral-100">
                                {for leads.iter().map(|lead| html! {
                                    <tr key={lead.id.to_string()}>
                                        <td class="px-4 py-2 whitespace-nowrap">
                                            {format_timestamp(lead.created_at)}
                                        </td>
                                        <td class="px-4 py-2">{&lead.name}</td>
                                        <td class="px-4 py-2">
                                            <a href={format!("mailto:{}", lead.email)} class="text-teal-700">
                                                {&lead.email}
                                            </a>
                                            if let Some(phone) = &lead.phone {
                                                <div class="text-neutral-500">{phone}</div>
                                            }
                                        </td>
                                        <td class="px-4 py-2">
                                            {lead.postcode.clone().unwrap_or_default()}
                                        </td>
                                        <td class="px-4 py-2 max-w-md">{&lead.message}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    }
                </>
            })}
        </div>
    }
}

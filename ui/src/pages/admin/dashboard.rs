use payloads::{ServiceId, requests::ServiceDetails, responses::Service};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State,
    components::ServiceForm,
    contexts::use_toast,
    get_api_client,
    hooks::{use_services, use_title},
    utils::format_rate,
};

fn details_of(service: &Service) -> ServiceDetails {
    ServiceDetails {
        name: service.name.clone(),
        slug: service.slug.clone(),
        summary: service.summary.clone(),
        description: service.description.clone(),
        hourly_rate: service.hourly_rate,
        is_active: service.is_active,
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Service listings: add, show or hide, and remove.
#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Services");
    let services = use_services();
    let dispatch = use_dispatch::<State>();
    let toast = use_toast();
    let busy = use_state(|| None::<ServiceId>);

    let on_toggle = {
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let busy = busy.clone();
        Callback::from(move |service: Service| {
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let busy = busy.clone();
            let details = ServiceDetails {
                is_active: !service.is_active,
                ..details_of(&service)
            };

            yew::platform::spawn_local(async move {
                busy.set(Some(service.id));
                match get_api_client().update_service(&service.id, &details).await
                {
                    Ok(updated) => {
                        tracing::info!(
                            slug = %updated.slug,
                            is_active = updated.is_active,
                            "service updated"
                        );
                        dispatch.reduce_mut(|state| state.upsert_service(updated));
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                busy.set(None);
            });
        })
    };

    let on_delete = {
        let busy = busy.clone();
        Callback::from(move |service: Service| {
            if !confirm(&format!("Delete {}? This cannot be undone.", service.name))
            {
                return;
            }
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let busy = busy.clone();

            yew::platform::spawn_local(async move {
                busy.set(Some(service.id));
                match get_api_client().delete_service(&service.id).await {
                    Ok(()) => {
                        tracing::info!(slug = %service.slug, "service deleted");
                        dispatch.reduce_mut(|state| state.remove_service(service.id));
                        toast.success(format!("Deleted {}", service.name));
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                busy.set(None);
            });
        })
    };

    html! {
        <div class="space-y-8">
            <h1 class="text-2xl font-semibold">{"Services"}</h1>
            {services.render("services", |services, _, error| html! {
                <>
                    if let Some(error) = error {
                        <p class="text-sm text-red-600">{error}</p>
                    }
                    <table class="w-full bg-white rounded-lg shadow-sm text-sm">
                        <thead class="text-left text-neutral-500">
                            <tr>
                                <th class="px-4 py-2">{"Name"}</th>
                                <th class="px-4 py-2">{"Slug"}</th>
                                <th class="px-4 py-2">{"Rate"}</th>
                                <th class="px-4 py-2">{"Status"}</th>
                                <th class="px-4 py-2" />
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-neutral-100">
                            {for services.iter().map(|service| {
                                let disabled = *busy == Some(service.id);
                                let toggle = {
                                    let service = service.clone();
                                    on_toggle.reform(move |_: MouseEvent| service.clone())
                                };
                                let delete = {
                                    let service = service.clone();
                                    on_delete.reform(move |_: MouseEvent| service.clone())
                                };
                                html! {
                                    <tr key={service.id.to_string()}>
                                        <td class="px-4 py-2 font-medium">{&service.name}</td>
                                        <td class="px-4 py-2 text-neutral-500">{&service.slug}</td>
                                        <td class="px-4 py-2">{format_rate(service.hourly_rate)}</td>
                                        <td class="px-4 py-2">
                                            if service.is_active {
                                                <span class="text-green-700">{"Active"}</span>
                                            } else {
                                                <span class="text-neutral-400">{"Hidden"}</span>
                                            }
                                        </td>
                                        <td class="px-4 py-2 text-right space-x-3">
                                            <button onclick={toggle} {disabled} class="text-teal-700 disabled:opacity-50">
                                                {if service.is_active { "Hide" } else { "Show" }}
                                            </button>
                                            <button onclick={delete} {disabled} class="text-red-600 disabled:opacity-50">
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </>
            })}
            <ServiceForm />
        </div>
    }
}

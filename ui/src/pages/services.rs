use payloads::responses::Service;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    hooks::{use_services, use_title},
    utils::format_rate,
};

#[function_component]
pub fn ServicesPage() -> Html {
    use_title("Our services");
    let services = use_services();

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="animate-on-scroll fadeInDown">
                <h1 class="text-3xl font-bold text-neutral-900">{"Our services"}</h1>
                <p class="mt-2 text-neutral-600">
                    {"Flexible support at home, from a few hours a week to around-the-clock care."}
                </p>
            </div>
            <div class="mt-8">
                {services.render("services", |services, _, _| {
                    let active: Vec<&Service> =
                        services.iter().filter(|s| s.is_active).collect();
                    if active.is_empty() {
                        return html! {
                            <p class="text-neutral-600">
                                {"No services are listed right now. Please get in touch."}
                            </p>
                        };
                    }
                    html! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {for active.into_iter().map(|service| html! {
                                <ServiceCard key={service.id.to_string()} service={service.clone()} />
                            })}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component]
pub fn ServiceCard(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <div class="p-6 rounded-lg border border-neutral-200 bg-white shadow-sm flex flex-col">
            <h2 class="text-xl font-semibold text-neutral-900">{&service.name}</h2>
            <p class="mt-2 text-neutral-700">{&service.summary}</p>
            if !service.description.is_empty() {
                <p class="mt-3 text-sm text-neutral-600">{&service.description}</p>
            }
            <div class="mt-auto pt-4 flex items-center justify-between">
                <span class="text-sm font-medium text-teal-800">
                    {format_rate(service.hourly_rate)}
                </span>
                <Link<Route> to={Route::Contact} classes="text-sm text-teal-700 underline">
                    {"Enquire"}
                </Link<Route>>
            </div>
        </div>
    }
}

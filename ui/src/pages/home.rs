use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{
    Route, State,
    components::{AvailabilityChecker, LocationSearch},
    hooks::{use_services, use_title},
};

const STATS: &[(&str, &str)] = &[
    ("15K+", "Care visits each year"),
    ("4.9", "Average family rating"),
    ("98%", "Clients who stay with us"),
    ("120+", "Qualified carers"),
];

const REASONS: &[(&str, &str, &str)] = &[
    (
        "fadeInLeft",
        "Carers matched to you",
        "We introduce your carer before the first visit, and keep the same \
         faces week to week.",
    ),
    (
        "fadeInUp",
        "Plans that change with you",
        "Start with a few hours and adjust at any time, with no lock-in \
         contracts.",
    ),
    (
        "fadeInRight",
        "A local team",
        "A care coordinator in your area answers the phone, day or night.",
    ),
];

#[function_component]
pub fn HomePage() -> Html {
    use_title("Care at home");
    // warm the cache for the availability picker
    use_services();
    let (state, _) = use_store::<State>();
    let services = state.active_services().unwrap_or_default();

    html! {
        <>
            <section class="bg-teal-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 grid gap-10 lg:grid-cols-2 items-center">
                    <div class="animate-on-scroll fadeInLeft">
                        <h1 class="text-4xl font-bold text-teal-900">
                            {"Care at home, on your terms"}
                        </h1>
                        <p class="mt-4 text-lg text-neutral-700">
                            {"Personal care, companionship and nursing support from people who live in your community."}
                        </p>
                        <div class="mt-8 flex gap-4">
                            <Link<Route> to={Route::Contact} classes="px-5 py-3 rounded-md bg-teal-700 text-white">
                                {"Book a free assessment"}
                            </Link<Route>>
                            <Link<Route> to={Route::Services} classes="px-5 py-3 rounded-md border border-teal-700 text-teal-800">
                                {"Our services"}
                            </Link<Route>>
                        </div>
                    </div>
                    <figure class="reveal-image">
                        <img
                            src="/assets/carer-and-client.jpg"
                            alt="A carer sharing a cup of tea with a client"
                            class="rounded-xl shadow-lg"
                        />
                    </figure>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid gap-8 grid-cols-2 lg:grid-cols-4 text-center">
                    {for STATS.iter().enumerate().map(|(i, (value, label))| html! {
                        <div
                            class="animate-on-scroll zoomIn"
                            data-delay={(i * 150).to_string()}
                        >
                            <p class="counter text-4xl font-bold text-teal-800">{*value}</p>
                            <p class="mt-2 text-sm text-neutral-600">{*label}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="bg-neutral-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 grid gap-8 md:grid-cols-3">
                    {for REASONS.iter().enumerate().map(|(i, (family, title, body))| html! {
                        <div
                            class={classes!("animate-on-scroll", *family, "p-6", "bg-white", "rounded-lg", "shadow-sm")}
                            data-delay={format!("{}ms", i * 100)}
                        >
                            <h2 class="text-lg font-semibold text-neutral-900">{*title}</h2>
                            <p class="mt-2 text-neutral-600">{*body}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 grid gap-12 md:grid-cols-2">
                <div class="animate-on-scroll">
                    <h2 class="text-2xl font-bold text-neutral-900">{"Do we cover your area?"}</h2>
                    <p class="mt-2 text-neutral-600">
                        {"Enter your postcode to check whether our carers visit you."}
                    </p>
                    <div class="mt-4">
                        <AvailabilityChecker {services} />
                    </div>
                </div>
                <div class="animate-on-scroll" data-delay="150">
                    <h2 class="text-2xl font-bold text-neutral-900">{"Find your suburb"}</h2>
                    <p class="mt-2 text-neutral-600">
                        {"Not sure of your postcode? Search by suburb."}
                    </p>
                    <div class="mt-4">
                        <LocationSearch />
                    </div>
                </div>
            </section>
        </>
    }
}

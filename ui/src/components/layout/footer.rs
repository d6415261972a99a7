use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="bg-neutral-50 border-t border-neutral-200 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex justify-between text-sm text-neutral-600">
                    <span>{"Care at home, on your terms."}</span>
                    <Link<Route> to={Route::Contact} classes="hover:text-neutral-900">
                        {"Get in touch"}
                    </Link<Route>>
                </div>
            </div>
        </footer>
    }
}

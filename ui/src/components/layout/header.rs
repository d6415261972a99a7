use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let link_classes = "text-sm font-medium text-neutral-700 hover:text-teal-700";

    html! {
        <header class="bg-white border-b border-neutral-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-teal-800">
                        {"Home Care"}
                    </Link<Route>>
                    <nav class="flex items-center space-x-6">
                        <Link<Route> to={Route::Services} classes={link_classes}>
                            {"Services"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contact} classes={link_classes}>
                            {"Contact"}
                        </Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}

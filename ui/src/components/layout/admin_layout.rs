use yew::prelude::*;
use yew_router::prelude::*;

use crate::{AdminRoute, contexts::use_auth};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
}

/// The admin shell: sidebar navigation and the signed-in user.
#[function_component]
pub fn AdminLayout(props: &AdminLayoutProps) -> Html {
    let auth = use_auth();
    let current = use_route::<AdminRoute>();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| auth.logout())
    };

    let nav_link = |route: AdminRoute, label: &'static str| {
        let classes = if current.as_ref() == Some(&route) {
            "block px-3 py-2 rounded-md text-sm font-medium bg-teal-700 text-white"
        } else {
            "block px-3 py-2 rounded-md text-sm font-medium text-teal-100 \
             hover:bg-teal-700"
        };
        html! {
            <Link<AdminRoute> to={route} {classes}>{label}</Link<AdminRoute>>
        }
    };

    html! {
        <div class="flex min-h-screen">
            <aside class="w-60 bg-teal-800 text-white flex flex-col">
                <div class="px-4 py-5 text-lg font-semibold">{"Admin"}</div>
                <nav class="flex-1 px-2 space-y-1">
                    {nav_link(AdminRoute::Dashboard, "Services")}
                    {nav_link(AdminRoute::Leads, "Enquiries")}
                </nav>
                <div class="px-4 py-4 border-t border-teal-700">
                    if let Some(user) = auth.user() {
                        <p class="text-sm truncate">{&user.name}</p>
                        <p class="text-xs text-teal-200 truncate">{&user.email}</p>
                    }
                    <button
                        onclick={on_logout}
                        class="mt-3 w-full px-3 py-2 rounded-md text-sm bg-teal-900 \
                               hover:bg-teal-950"
                    >
                        {"Log out"}
                    </button>
                </div>
            </aside>
            <main class="flex-1 bg-neutral-50 p-8">
                {for props.children.iter()}
            </main>
        </div>
    }
}

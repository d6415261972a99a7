use payloads::{APIClient, TokenStore};
use std::sync::Arc;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod navigation;
mod pages;
mod state;
mod storage;
mod utils;

pub use logs::init_logging;
pub use navigation::BrowserNavigator;
pub use state::State;
pub use storage::LocalStorageTokenStore;

use components::{
    RequireAdmin, ScrollAnimator, ToastContainer,
    layout::{AdminLayout, SiteLayout},
};
use contexts::{AuthProvider, ToastProvider};
use session::{AuthSignal, SessionExpiry};

thread_local! {
    static AUTH_SIGNAL: AuthSignal = AuthSignal::new();
}

/// The admin session state shared by the `AuthProvider` and the 401
/// interceptor of every client this app builds.
pub fn auth_signal() -> AuthSignal {
    AUTH_SIGNAL.with(AuthSignal::clone)
}

// Global API client - configurable via environment or same-origin fallback.
// Every client carries the stored admin token and the expiry interceptor.
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    let tokens: Arc<dyn TokenStore> = Arc::new(LocalStorageTokenStore);
    let expiry = SessionExpiry::new(
        tokens.clone(),
        Arc::new(BrowserNavigator),
        auth_signal(),
    );
    APIClient::new(address)
        .with_tokens(tokens)
        .with_unauthorized_handler(Arc::new(expiry))
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-white text-neutral-900">
                    <Switch<Route> render={switch} />
                </div>
                <ScrollAnimator />
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[at("/error")]
    Error,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Clone, Routable, PartialEq)]
pub enum AdminRoute {
    #[at("/admin/login")]
    Login,
    #[at("/admin/dashboard")]
    Dashboard,
    #[at("/admin/leads")]
    Leads,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SiteLayout><pages::HomePage /></SiteLayout> },
        Route::Services => {
            html! { <SiteLayout><pages::ServicesPage /></SiteLayout> }
        }
        Route::Contact => {
            html! { <SiteLayout><pages::ContactPage /></SiteLayout> }
        }
        Route::Error => html! { <SiteLayout><pages::ErrorPage /></SiteLayout> },
        // Both admin arms render the same provider so it survives moves
        // between admin pages
        Route::AdminRoot => html! {
            <AuthProvider>
                <Redirect<AdminRoute> to={AdminRoute::Dashboard} />
            </AuthProvider>
        },
        Route::Admin => html! {
            <AuthProvider>
                <Switch<AdminRoute> render={switch_admin} />
            </AuthProvider>
        },
        Route::NotFound => {
            html! { <SiteLayout><pages::NotFoundPage /></SiteLayout> }
        }
    }
}

fn switch_admin(routes: AdminRoute) -> Html {
    match routes {
        AdminRoute::Login => html! {
            <RequireAdmin><pages::admin::LoginPage /></RequireAdmin>
        },
        AdminRoute::Dashboard => html! {
            <RequireAdmin>
                <AdminLayout><pages::admin::DashboardPage /></AdminLayout>
            </RequireAdmin>
        },
        AdminRoute::Leads => html! {
            <RequireAdmin>
                <AdminLayout><pages::admin::LeadsPage /></AdminLayout>
            </RequireAdmin>
        },
        AdminRoute::NotFound => {
            html! { <SiteLayout><pages::NotFoundPage /></SiteLayout> }
        }
    }
}

use session::Navigator;
use session::guard::{self, Admission, GuardDecision};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{BrowserNavigator, LocalStorageTokenStore, contexts::use_auth};

/// Renders its children only once the admin session allows it.
///
/// Without a stored token an admin page redirects straight away. With one,
/// nothing but a spinner renders until the auth check settles, so no admin
/// page flashes for a visitor who turns out to be logged out.
#[derive(Properties, PartialEq)]
pub struct RequireAdminProps {
    pub children: Children,
}

#[function_component]
pub fn RequireAdmin(props: &RequireAdminProps) -> Html {
    let auth = use_auth();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let decision = match guard::admit(&path, LocalStorageTokenStore.has_token())
    {
        Admission::Redirect(to) => GuardDecision::Redirect(to),
        Admission::Proceed => guard::decide(&auth.state, &path),
    };

    use_effect_with(decision.clone(), |decision| {
        if let GuardDecision::Redirect(to) = decision {
            tracing::debug!(%to, "not signed in");
            BrowserNavigator.navigate(to);
        }
    });

    match decision {
        GuardDecision::Render => html! { <>{for props.children.iter()}</> },
        GuardDecision::Pending => html! { <Spinner /> },
        GuardDecision::Redirect(_) => html! {},
    }
}

#[function_component]
pub fn Spinner() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen">
            <div class="h-10 w-10 rounded-full border-4 border-teal-200 \
                        border-t-teal-600 animate-spin" />
        </div>
    }
}

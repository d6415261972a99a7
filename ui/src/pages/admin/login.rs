use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{AdminRoute, contexts::use_auth, hooks::use_title};

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Admin sign in");
    let auth = use_auth();

    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let auth = auth.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let email = value(&email_ref);
            let password = value(&password_ref);

            if email.trim().is_empty() || password.is_empty() {
                error_message.set(Some(
                    "Please enter both email and password".to_string(),
                ));
                return;
            }

            let auth = auth.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);
                // on success the session navigates away
                if let Err(e) = auth.login(&email, &password).await {
                    error_message.set(Some(e.to_string()));
                }
                is_loading.set(false);
            });
        })
    };

    if let Some(user) = auth.user() {
        return html! {
            <div class="flex min-h-screen items-center justify-center bg-neutral-50">
                <div class="text-center">
                    <p class="text-neutral-700">{format!("Signed in as {}", user.email)}</p>
                    <Link<AdminRoute> to={AdminRoute::Dashboard} classes="mt-4 inline-block text-teal-700 underline">
                        {"Go to the dashboard"}
                    </Link<AdminRoute>>
                </div>
            </div>
        };
    }

    let field = "w-full mt-1 px-3 py-2 border border-neutral-300 rounded-md";

    html! {
        <div class="flex min-h-screen items-center justify-center bg-neutral-50">
            <form
                onsubmit={on_submit}
                class="max-w-md w-full bg-white p-8 rounded-lg shadow-md space-y-4"
            >
                <h1 class="text-2xl font-semibold text-neutral-900">{"Admin sign in"}</h1>
                <label class="block text-sm">
                    {"Email"}
                    <input id="email" ref={email_ref} type="email" autocomplete="username" class={field} />
                </label>
                <label class="block text-sm">
                    {"Password"}
                    <input
                        id="password"
                        ref={password_ref}
                        type="password"
                        autocomplete="current-password"
                        class={field}
                    />
                </label>
                if let Some(message) = &*error_message {
                    <p class="text-sm text-red-600">{message}</p>
                }
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full px-4 py-2 rounded-md bg-teal-700 text-white disabled:opacity-50"
                >
                    {if *is_loading { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

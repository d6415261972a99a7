use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let (tone_classes, icon) = match toast.toast_type {
        ToastType::Error => ("bg-red-50 border-red-200 text-red-700", "✕"),
        ToastType::Success => {
            ("bg-green-50 border-green-200 text-green-700", "✓")
        }
        ToastType::Promo => ("bg-teal-50 border-teal-300 text-teal-900", "★"),
    };

    let on_close = {
        let toast_id = toast.id;
        let toast_handle = toast_handle.clone();
        Callback::from(move |_| toast_handle.remove(toast_id))
    };

    html! {
        <div class={classes!(
            "relative", "p-4", "rounded-lg", "border", "shadow-lg",
            "animate__animated", "animate__fadeInUp",
            tone_classes
        )}>
            <div class="flex items-start space-x-3">
                <span class="flex-shrink-0 text-sm font-medium">{icon}</span>
                <div class="flex-1 min-w-0">
                    if let Some(title) = &toast.title {
                        <p class="text-sm font-semibold">{title}</p>
                    }
                    <p class="text-sm leading-5">{&toast.message}</p>
                    if let Some(action) = &toast.action {
                        <a
                            href={action.href.clone()}
                            class="mt-2 inline-block text-sm font-semibold underline"
                        >
                            {&action.label}
                        </a>
                    }
                </div>
                <button
                    onclick={on_close}
                    class="flex-shrink-0 text-neutral-400 hover:text-neutral-600"
                    title="Dismiss"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}

use gloo_timers::future::TimeoutFuture;
use jiff::Timestamp;
use site::popup::{self, SHOWN_AT_KEY};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::{
    contexts::{Toast, use_toast},
    get_api_client, storage,
};

/// Schedules the promotional toast, at most once per 24 hours per browser.
#[function_component]
pub fn PromoPopup() -> Html {
    let toast = use_toast();

    use_effect_with((), move |_| {
        let cancelled = Rc::new(Cell::new(false));

        {
            let cancelled = cancelled.clone();
            yew::platform::spawn_local(async move {
                let config = popup::load_config(&get_api_client()).await;
                let last_shown = storage::get_item(SHOWN_AT_KEY);
                if !popup::is_due(&config, last_shown.as_deref(), Timestamp::now())
                {
                    return;
                }

                TimeoutFuture::new(config.delay_ms).await;
                if cancelled.get() {
                    return;
                }
                // another tab may have shown it while we waited
                let last_shown = storage::get_item(SHOWN_AT_KEY);
                let now = Timestamp::now();
                if !popup::should_show(last_shown.as_deref(), now) {
                    return;
                }
                storage::set_item(SHOWN_AT_KEY, &popup::mark_shown(now));

                let mut promo =
                    Toast::promo(config.title, config.message).no_auto_dismiss();
                if let (Some(label), Some(href)) = (config.cta_label, config.cta_href)
                {
                    promo = promo.action(label, href);
                }
                tracing::debug!("showing promotional popup");
                toast.add(promo);
            });
        }

        move || cancelled.set(true)
    });

    html! {}
}

use yew::prelude::*;

use crate::components::{
    PromoPopup,
    layout::{Footer, Header},
};

#[derive(Properties, PartialEq)]
pub struct SiteLayoutProps {
    pub children: Children,
}

/// Chrome of the public pages.
#[function_component]
pub fn SiteLayout(props: &SiteLayoutProps) -> Html {
    html! {
        <div class="flex flex-col min-h-screen">
            <Header />
            <main class="flex-1">
                {for props.children.iter()}
            </main>
            <Footer />
            <PromoPopup />
        </div>
    }
}

use crate::shared::icons::icon;
use contracts::shared::config::shop_config;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__content">
                <p class="footer__note">
                    {icon("sparkles")}
                    {shop_config().footer_note.clone()}
                </p>
            </div>
        </footer>
    }
}

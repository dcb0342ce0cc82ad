use crate::routes::routes::{CATALOG_PATH, PROFILE_PATH};
use crate::shared::icons::icon;
use contracts::shared::config::shop_config;
use leptos::prelude::*;
use leptos_router::components::A;

/// Catalog header: shop name on the left, profile link on the right.
#[component]
pub fn CatalogHeader() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content container">
                <h1 class="header__title">{shop_config().shop_name.clone()}</h1>
                <A href=PROFILE_PATH attr:class="button button--ghost button--icon" attr:aria-label="Профиль">
                    {icon("user")}
                </A>
            </div>
        </header>
    }
}

/// Profile header: back arrow, centered title, spacer to keep it centered.
#[component]
pub fn ProfileHeader() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content container">
                <A href=CATALOG_PATH attr:class="button button--ghost button--icon" attr:aria-label="В каталог">
                    {icon("arrow-left")}
                </A>
                <h1 class="header__title">"Личный профиль"</h1>
                <div class="header__spacer" />
            </div>
        </header>
    }
}

use crate::domain::a002_order::ui::list::OrderList;
use crate::layout::header::ProfileHeader;
use crate::layout::Shell;
use crate::shared::components::CardAnimated;
use crate::shared::icons::{icon, icon_sized};
use contracts::domain::a002_order::history::orders;
use contracts::shared::config::shop_config;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let config = shop_config();

    view! {
        <Shell header=|| view! { <ProfileHeader /> }.into_any() main_class="container--narrow">
            <CardAnimated class="guest-card">
                <div class="guest-card__row">
                    <div class="guest-card__avatar">{icon_sized("user", 40)}</div>
                    <div>
                        <h2 class="guest-card__name">{config.guest_name.clone()}</h2>
                        <p class="guest-card__greeting">
                            {format!("Добро пожаловать в {}", config.shop_name)}
                        </p>
                    </div>
                </div>
            </CardAnimated>

            <section class="orders-section">
                <h3 class="orders-section__title">
                    {icon("package")}
                    "Мои заказы"
                </h3>
                <OrderList orders=orders() />
            </section>
        </Shell>
    }
}

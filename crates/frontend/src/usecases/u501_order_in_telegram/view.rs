use super::api;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon_sized;
use contracts::domain::a001_product::Product;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_order_in_telegram::OrderInTelegram;
use leptos::prelude::*;

/// Кнопка «Заказать в Telegram» на карточке товара
#[component]
pub fn OrderButton(product: &'static Product) -> impl IntoView {
    let on_click = Callback::new(move |_| {
        log::info!(
            "{}: product #{} \"{}\"",
            OrderInTelegram::full_name(),
            product.id.0,
            product.name
        );
        if let Err(e) = api::open_order_intent(product) {
            log::warn!("{}: {}", OrderInTelegram::full_name(), e);
        }
    });

    view! {
        <Button size="lg" block=true class="order-button" on_click=on_click>
            <span class="order-button__icon">{icon_sized("send", 18)}</span>
            {OrderInTelegram::display_name()}
        </Button>
    }
}

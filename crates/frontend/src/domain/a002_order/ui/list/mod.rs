use crate::routes::routes::CATALOG_PATH;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::ui::Badge;
use crate::shared::components::EmptyState;
use crate::shared::icons::icon_sized;
use contracts::domain::a002_order::{order_history, Order, OrderCard, OrderHistoryView};
use contracts::shared::config::shop_config;
use leptos::prelude::*;
use leptos_router::components::A;

/// «Мои заказы»: карточки заказов или приглашение в каталог, если заказов нет.
#[component]
#[allow(non_snake_case)]
pub fn OrderList(orders: &'static [Order]) -> impl IntoView {
    match order_history(orders, &shop_config().currency_sign) {
        OrderHistoryView::Empty => view! {
            <EmptyState icon="shopping-bag" message="У вас пока нет заказов">
                <A href=CATALOG_PATH attr:class="button button--primary">
                    {icon_sized("store", 18)}
                    "Перейти в каталог"
                </A>
            </EmptyState>
        }
        .into_any(),
        OrderHistoryView::Orders(cards) => view! {
            <div class="order-list">
                {cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| view! { <OrderRow card=card index=index /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn OrderRow(card: OrderCard, index: usize) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="order-card">
            <div class="order-card__row">
                <div class="order-card__info">
                    <div class="order-card__title">
                        <h4 class="order-card__name">{card.product_name}</h4>
                        <Badge variant=card.status.variant>{card.status.label}</Badge>
                    </div>
                    <div class="order-card__meta">
                        <span class="order-card__meta-item">
                            {icon_sized("calendar", 14)}
                            {card.date}
                        </span>
                        <span class="order-card__meta-item">
                            {icon_sized("hash", 14)}
                            {card.number}
                        </span>
                    </div>
                </div>
                <p class="order-card__price">{card.price}</p>
            </div>
        </CardAnimated>
    }
}

use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::ui::Badge;
use crate::usecases::u501_order_in_telegram::OrderButton;
use contracts::domain::a001_product::Product;
use contracts::shared::config::shop_config;
use contracts::shared::format::format_price;
use leptos::prelude::*;

#[component]
pub fn ProductCard(product: &'static Product, index: usize) -> impl IntoView {
    let price = format_price(product.price, &shop_config().currency_sign);

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="product-card">
            <div class="product-card__media">
                <img
                    class="product-card__image"
                    src=product.image.clone()
                    alt=product.name.clone()
                    loading="lazy"
                />
                <div class="product-card__category">
                    <Badge>{product.category.clone()}</Badge>
                </div>
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__price">{price}</p>
                <OrderButton product=product />
            </div>
        </CardAnimated>
    }
}

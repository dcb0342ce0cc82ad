//! Ссылка «поделиться» в Telegram с текстом заказа.
//!
//! Формат ссылки разбирает внешний сервис, поэтому он должен совпадать
//! побайтно с тем, что даёт `encodeURIComponent` в браузере.

use crate::domain::a001_product::Product;

/// Текст сообщения о заказе
pub fn order_message(product: &Product) -> String {
    format!(
        "Здравствуйте! Хочу заказать \"{}\" за {}₽",
        product.name, product.price
    )
}

/// Percent-encoding как у JavaScript `encodeURIComponent`.
///
/// `urlencoding::encode` оставляет без кодирования только `A-Z a-z 0-9 - _ . ~`,
/// а `encodeURIComponent` ещё и `! ' ( ) *`.
pub fn encode_uri_component(input: &str) -> String {
    let encoded = urlencoding::encode(input);
    if !encoded.contains("%2") {
        return encoded.into_owned();
    }

    encoded
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Ссылка вида `<share_base_url>?url=<page_url>&text=<сообщение>`
pub fn build_order_intent(share_base_url: &str, page_url: &str, product: &Product) -> String {
    format!(
        "{}?url={}&text={}",
        share_base_url,
        encode_uri_component(page_url),
        encode_uri_component(&order_message(product))
    )
}

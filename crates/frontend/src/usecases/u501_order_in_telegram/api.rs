use contracts::domain::a001_product::Product;
use contracts::shared::config::shop_config;
use contracts::usecases::u501_order_in_telegram::build_order_intent;
use web_sys::window;

/// Адрес текущей страницы, он уходит в ссылку вместе с текстом заказа
fn current_page_url() -> Result<String, String> {
    let window = window().ok_or("No window object")?;
    window
        .location()
        .href()
        .map_err(|e| format!("Failed to read location: {:?}", e))
}

/// Открывает Telegram с сообщением о заказе в новой вкладке.
///
/// Ответа от Telegram нет: результат говорит только о том, удалось ли
/// браузеру открыть окно.
pub fn open_order_intent(product: &Product) -> Result<(), String> {
    let page_url = current_page_url()?;
    let url = build_order_intent(&shop_config().share.base_url, &page_url, product);

    let window = window().ok_or("No window object")?;
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("Popup was blocked".to_string()),
        Err(e) => Err(format!("Failed to open window: {:?}", e)),
    }
}

pub mod intent;

pub use intent::{build_order_intent, encode_uri_component, order_message};

use crate::usecases::common::UseCaseMetadata;

pub struct OrderInTelegram;

impl UseCaseMetadata for OrderInTelegram {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "order_in_telegram"
    }

    fn display_name() -> &'static str {
        "Заказать в Telegram"
    }

    fn description() -> &'static str {
        "Открывает Telegram с готовым сообщением о заказе товара"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(OrderInTelegram::full_name(), "u501_order_in_telegram");
    }
}

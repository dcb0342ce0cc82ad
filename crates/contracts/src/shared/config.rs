use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShopConfig {
    pub shop_name: String,
    pub tagline: String,
    pub description: String,
    pub footer_note: String,
    pub guest_name: String,
    pub currency_sign: String,
    pub share: ShareConfig,
}

/// Куда уходит сообщение с заказом
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShareConfig {
    pub base_url: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shop_name: "Natura Deco".to_string(),
            tagline: "Декор ручной работы".to_string(),
            description:
                "Украшения с настоящими цветами, эпоксидные изделия и предметы интерьера"
                    .to_string(),
            footer_note: "Natura Deco — изделия ручной работы с душой".to_string(),
            guest_name: "Гость".to_string(),
            currency_sign: "₽".to_string(),
            share: ShareConfig::default(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://t.me/share/url".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
shop_name = "Natura Deco"
tagline = "Декор ручной работы"
description = "Украшения с настоящими цветами, эпоксидные изделия и предметы интерьера"
footer_note = "Natura Deco — изделия ручной работы с душой"
guest_name = "Гость"
currency_sign = "₽"

[share]
base_url = "https://t.me/share/url"
"#;

/// Parse a TOML configuration document
///
/// Missing keys take their values from `ShopConfig::default()`.
pub fn load_config(source: &str) -> anyhow::Result<ShopConfig> {
    let config: ShopConfig = toml::from_str(source).context("invalid shop configuration")?;
    Ok(config)
}

static SHOP_CONFIG: Lazy<ShopConfig> = Lazy::new(|| {
    load_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::warn!("Falling back to built-in shop configuration: {:#}", e);
        ShopConfig::default()
    })
});

/// Process-wide configuration, parsed once on first access
pub fn shop_config() -> &'static ShopConfig {
    &SHOP_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.share.base_url, "https://t.me/share/url");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = load_config("shop_name = \"Test Shop\"\n").unwrap();
        assert_eq!(config.shop_name, "Test Shop");
        assert_eq!(config.currency_sign, "₽");
        assert_eq!(config.share, ShareConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(load_config("shop_name = ").is_err());
        assert!(load_config("currency_sign = 5").is_err());
    }

    #[test]
    fn test_shop_config_is_embedded_default() {
        assert_eq!(shop_config().shop_name, "Natura Deco");
    }
}

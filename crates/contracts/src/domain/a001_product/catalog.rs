//! Каталог товаров, зашитый в приложение.
//!
//! Список создаётся один раз при первом обращении и дальше не меняется.

use super::aggregate::Product;
use once_cell::sync::Lazy;

const CDN: &str = "https://cdn.poehali.dev/files";

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(
            1,
            "Кулон с лавандой",
            1200,
            format!("{CDN}/7fa34d6b-2cca-4259-9a55-7ba901416d9e.jpeg"),
            "Украшения",
        ),
        Product::new(
            2,
            "Подвеска с папоротником",
            1350,
            format!("{CDN}/b2453c3c-05b1-4b60-887a-104ee1f2f6c2.jpeg"),
            "Украшения",
        ),
        Product::new(
            3,
            "Ароматическая свеча",
            2500,
            format!("{CDN}/11f6225c-88ae-420f-b8d0-52343cefb3ee.jpeg"),
            "Декор",
        ),
        Product::new(
            4,
            "Постер \"Морской бриз\"",
            1800,
            format!("{CDN}/d7c445ce-7b11-4858-958a-4deb6b8f69e7.jpeg"),
            "Постеры",
        ),
        Product::new(
            5,
            "Цветочная люстра",
            8500,
            format!("{CDN}/4c20fda3-c813-4926-9a11-76ddbc92df8f.jpeg"),
            "Люстры",
        ),
        Product::new(
            6,
            "Серьги с ромашкой",
            990,
            format!("{CDN}/7fa34d6b-2cca-4259-9a55-7ba901416d9e.jpeg"),
            "Украшения",
        ),
    ]
});

/// Все товары каталога в порядке показа
pub fn products() -> &'static [Product] {
    PRODUCTS.as_slice()
}

pub mod aggregate;
pub mod catalog;
pub mod filter;

pub use aggregate::{Product, ProductId};
pub use filter::{filter_products, list_categories, CategoryFilter, ALL_CATEGORIES};

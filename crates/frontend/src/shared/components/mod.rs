pub mod card_animated;
pub mod empty_state;
pub mod page_header;
pub mod ui;

pub use card_animated::CardAnimated;
pub use empty_state::EmptyState;
pub use page_header::PageHeader;

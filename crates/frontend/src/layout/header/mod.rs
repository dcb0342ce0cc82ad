pub mod header;

pub use header::{CatalogHeader, ProfileHeader};

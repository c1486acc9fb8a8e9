// Domain models (shell state and view content)
// Pure Rust, no framework dependencies

pub mod view;
pub mod checklist;
pub mod catalog;

pub use view::ViewId;
pub use checklist::{Checklist, ChecklistItem};
pub use catalog::{Feature, NewsItem, Product, FEATURES, NEWS, PRODUCTS};

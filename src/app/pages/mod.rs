pub mod shell;
pub mod home;
pub mod products;
pub mod news;
pub mod tasks;

pub use shell::{App, VIEW_REGISTRY};
pub use home::HomeView;
pub use products::ProductsView;
pub use news::NewsView;
pub use tasks::TasksView;

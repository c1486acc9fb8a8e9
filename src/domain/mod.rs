// Shell state model, independent of the UI framework
pub mod models;
pub mod navigation;
pub mod registry;
pub mod view_state;

pub use navigation::{NavAction, NavigationState, Transition};
pub use registry::{Destination, ViewEntry, ViewRegistry};
pub use view_state::ViewStateArena;

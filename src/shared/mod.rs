pub mod errors;
pub mod logging;

// Platform connectivity signal and its sensor
pub mod connectivity;

// Dioxus hooks (shell state, connectivity, view-local state)
pub mod hooks;

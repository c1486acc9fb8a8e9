// Public API exports
pub mod domain;
pub mod shared;
pub mod config;

// Dioxus UI (shell, layouts, views)
pub mod app;

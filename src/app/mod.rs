pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the shell root component
pub use pages::App;

//! PWA Shop - Main Entry Point
//!
//! Browser builds mount the shell directly. Native builds (desktop renderer)
//! read an optional JSON config and set up the tracing subscriber first.

use pwa_shop::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] PWA Shop - WASM initialized!".into());
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser)]
#[command(name = "pwa-shop")]
#[command(about = "PWA Shop app shell (desktop renderer)")]
struct Args {
    /// JSON configuration file (title, tagline, footer note, log filter)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// tracing filter directive, overrides the config file
    #[arg(long)]
    log_filter: Option<String>,
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use pwa_shop::config::{self, ShellConfig};

    let args = Args::parse();

    let shell_config = match &args.config {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ShellConfig::default(),
    };

    let filter = args
        .log_filter
        .clone()
        .unwrap_or_else(|| shell_config.log_filter.clone());

    // Initialize tracing BEFORE launching the renderer
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .init();

    tracing::info!(title = %shell_config.title, "Starting PWA Shop...");
    config::install(shell_config);

    dioxus::launch(App);
    Ok(())
}

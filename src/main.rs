//! Past Searches Viewer - Main Entry Point
//!
//! Web builds read their configuration at compile time; desktop builds take
//! it from the command line or environment. Either way the resolved
//! `AppConfig` is handed to the app as context before launch.

use past_searches_viewer::app::App;
use past_searches_viewer::config::AppConfig;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Past Searches Viewer - WASM initialized!".into());

    match AppConfig::from_build_env() {
        Ok(config) => dioxus::LaunchBuilder::new().with_context(config).launch(App),
        Err(e) => {
            web_sys::console::error_1(&format!("[WASM] Invalid configuration: {}", e).into());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "past-searches-viewer", about = "Browse your past property searches")]
struct Args {
    /// Base URL of the history service
    #[arg(long, env = "API_BASE_URL")]
    api_base_url: String,

    /// Directory holding the stored auth token (defaults to the platform data dir)
    #[arg(long)]
    credential_dir: Option<std::path::PathBuf>,
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::new(args.api_base_url)?;
    if let Some(dir) = args.credential_dir {
        config = config.with_credential_dir(dir);
    }

    tracing::info!(
        api_base_url = %config.api_base_url,
        "Starting Past Searches Viewer..."
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}

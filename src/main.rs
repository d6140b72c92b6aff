#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod data;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use pmde_core::SiteConfig;

/// Global site configuration, set once at launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (loaded at launch or defaults)
pub fn site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Load the configuration file, falling back to defaults on any problem.
///
/// An explicit path must exist; the default location is optional.
fn load_config(explicit: Option<PathBuf>) -> SiteConfig {
    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => (SiteConfig::default_path(), false),
    };

    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "no site config, using defaults");
        return SiteConfig::default();
    }

    match SiteConfig::load(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded site config");
            config
        }
        Err(e) => {
            tracing::error!("Failed to load site config {}: {}", path.display(), e);
            SiteConfig::default()
        }
    }
}

/// PMDE - independent consultancy to the minerals industry
#[cfg(feature = "desktop")]
#[derive(clap::Parser, Debug)]
#[command(name = "pmde-site")]
#[command(about = "PMDE marketing site - native preview window")]
struct Args {
    /// Site configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

#[cfg(feature = "desktop")]
fn main() {
    use clap::Parser;
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(args.config);
    let title = config.site_name.clone();
    tracing::info!("Starting '{}' ({})", title, config.site_url);

    // Store configuration globally
    let _ = SITE_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(window).launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    // Browser builds have no config file; defaults apply
    let _ = SITE_CONFIG.set(load_config(None));
    dioxus::launch(app::App);
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_explicit_config_falls_back_to_defaults() {
        let config = load_config(Some(PathBuf::from("/definitely/not/here/site.json")));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rotation": {{"hero_interval_ms": 7000}}}}"#).unwrap();
        let config = load_config(Some(file.path().to_path_buf()));
        assert_eq!(config.rotation.hero_interval_ms, 7000);
    }
}

mod anchor;
mod app;
mod config;
mod content;
mod error;
mod fonts;
mod input;
mod nav;
mod route;
mod state;
mod style;
mod view;

use app::Guide;
use config::Config;
use content::Catalog;
use eframe::egui;
use route::Location;
use tracing_subscriber::EnvFilter;

/// Command-line argument first, then the configured start page, then the root.
fn start_location(arg: Option<String>, config: &Config) -> Location {
    if let Some(arg) = arg {
        match Location::parse(&arg) {
            Ok(location) => return location,
            Err(e) => tracing::warn!(target = %arg, error = %e, "ignoring start location argument"),
        }
    }
    Location::parse(&config.ui.start_location).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid start_location in config, opening the home page");
        Location::root()
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not create default config file");
    }
    let config = Config::load();
    let catalog = Catalog::load()?;
    let start = start_location(std::env::args().nth(1), &config);
    tracing::info!(start = %start, records = catalog.record_count(), "starting guide");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("TypeScript → Java 教學平台"),
        ..Default::default()
    };

    eframe::run_native(
        "tsjava-guide",
        options,
        Box::new(move |cc| {
            let guide = Guide::new(config, catalog, start);
            guide.setup(&cc.egui_ctx);
            Ok(Box::new(guide))
        }),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_config() {
        let mut config = Config::default();
        config.ui.start_location = "/comparison/oop".into();
        let start = start_location(Some("/comparison/springboot#di".into()), &config);
        assert_eq!(start.to_string(), "/comparison/springboot#di");
        assert_eq!(start_location(None, &config).path(), "/comparison/oop");
    }

    #[test]
    fn malformed_values_fall_back() {
        let mut config = Config::default();
        config.ui.start_location = "/types-detail".into();
        assert_eq!(start_location(Some("not a path".into()), &config).path(), "/types-detail");

        config.ui.start_location = "relative".into();
        assert_eq!(start_location(None, &config), Location::root());
    }
}

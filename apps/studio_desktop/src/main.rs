use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::{default_settings_path, load_settings, Settings, ThemeChoice};
use crate::ui::StudioApp;

#[derive(Parser, Debug)]
#[command(name = "studio_desktop", about = "Design Studio showcase window")]
struct Args {
    /// Settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,
    /// Disable slide and fade animations.
    #[arg(long)]
    reduce_motion: bool,
    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if self.reduce_motion {
            settings.reduce_motion = true;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let path = args.config.clone().unwrap_or_else(default_settings_path);

    let loaded = load_settings(&path, |name| std::env::var(name).ok());
    let mut settings = loaded.settings;
    args.apply(&mut settings);

    init_tracing(&settings.log_level);
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        source = %loaded
            .source
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".into()),
        theme = settings.theme.label(),
        reduce_motion = settings.reduce_motion,
        transition_secs = settings.transition_secs,
        "starting showcase"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.studio_name.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([config::MIN_WINDOW_WIDTH, config::MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };
    let app_name = settings.studio_name.clone();

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(StudioApp::new(&settings)))),
    )
    .map_err(|err| anyhow::anyhow!("showcase window failed: {err}"))
}

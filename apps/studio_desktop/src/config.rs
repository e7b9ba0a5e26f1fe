use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use serde::Deserialize;
use studio_core::{transition, MotionSettings};

pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;
const MAX_WINDOW_WIDTH: f32 = 7680.0;
const MAX_WINDOW_HEIGHT: f32 = 4320.0;
const MAX_TRANSITION_SECS: f64 = 5.0;
const MAX_SLIDE_DISTANCE: f32 = 4000.0;

const ENV_PREFIX: &str = "STUDIO__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn label(self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
        }
    }
}

impl FromStr for ThemeChoice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeChoice::Light),
            "dark" => Ok(ThemeChoice::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub reduce_motion: bool,
    pub transition_secs: f64,
    pub slide_distance: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: String,
    pub studio_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Light,
            reduce_motion: false,
            transition_secs: transition::DEFAULT_SLIDE_SECS,
            slide_distance: transition::DEFAULT_SLIDE_DISTANCE,
            window_width: 1100.0,
            window_height: 760.0,
            log_level: "info".into(),
            studio_name: "Design Studio".into(),
        }
    }
}

impl Settings {
    pub fn motion(&self) -> MotionSettings {
        MotionSettings {
            enabled: !self.reduce_motion,
            duration_secs: self.transition_secs,
            distance: self.slide_distance,
        }
    }

    pub fn clamped(mut self) -> Self {
        let defaults = Settings::default();

        self.transition_secs = if self.transition_secs.is_finite() {
            self.transition_secs.clamp(0.0, MAX_TRANSITION_SECS)
        } else {
            defaults.transition_secs
        };
        self.slide_distance = if self.slide_distance.is_finite() {
            self.slide_distance.clamp(0.0, MAX_SLIDE_DISTANCE)
        } else {
            defaults.slide_distance
        };
        self.window_width = clamp_or(
            self.window_width,
            MIN_WINDOW_WIDTH,
            MAX_WINDOW_WIDTH,
            defaults.window_width,
        );
        self.window_height = clamp_or(
            self.window_height,
            MIN_WINDOW_HEIGHT,
            MAX_WINDOW_HEIGHT,
            defaults.window_height,
        );

        if self.studio_name.trim().is_empty() {
            self.studio_name = defaults.studio_name;
        }
        if self.log_level.trim().is_empty() {
            self.log_level = defaults.log_level;
        }
        self
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: Option<PathBuf>,
    /// Problems that were skipped over; logged once tracing is up.
    pub warnings: Vec<String>,
}

pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("design_studio").join("settings.toml"))
        .unwrap_or_else(|| PathBuf::from("design_studio.toml"))
}

/// Reads a settings file. A missing file is `Ok(None)`.
pub fn read_settings_file(path: &Path) -> anyhow::Result<Option<Settings>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    };

    let settings = toml::from_str::<Settings>(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    Ok(Some(settings))
}

/// File, then `STUDIO__*` variables from `lookup`. Never fails; problems end up in `warnings`.
pub fn load_settings(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> LoadedSettings {
    let mut warnings = Vec::new();

    let (mut settings, source) = match read_settings_file(path) {
        Ok(Some(settings)) => (settings, Some(path.to_path_buf())),
        Ok(None) => (Settings::default(), None),
        Err(err) => {
            warnings.push(format!("{err:#}; using defaults"));
            (Settings::default(), None)
        }
    };

    apply_env_overrides(&mut settings, lookup, &mut warnings);

    LoadedSettings {
        settings: settings.clamped(),
        source,
        warnings,
    }
}

pub fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<String>,
) {
    if let Some((key, v)) = env_value(&lookup, warnings, "THEME") {
        match v.parse::<ThemeChoice>() {
            Ok(theme) => settings.theme = theme,
            Err(err) => warnings.push(format!("{key}: {err}")),
        }
    }
    if let Some((key, v)) = env_value(&lookup, warnings, "REDUCE_MOTION") {
        match parse_flag(&v) {
            Some(flag) => settings.reduce_motion = flag,
            None => warnings.push(format!("{key}: expected a boolean, got '{v}'")),
        }
    }
    if let Some((key, v)) = env_value(&lookup, warnings, "TRANSITION_SECS") {
        match v.trim().parse::<f64>() {
            Ok(secs) => settings.transition_secs = secs,
            Err(err) => warnings.push(format!("{key}: {err}")),
        }
    }
    if let Some((key, v)) = env_value(&lookup, warnings, "SLIDE_DISTANCE") {
        match v.trim().parse::<f32>() {
            Ok(distance) => settings.slide_distance = distance,
            Err(err) => warnings.push(format!("{key}: {err}")),
        }
    }
    if let Some((_, v)) = env_value(&lookup, warnings, "LOG_LEVEL") {
        settings.log_level = v;
    }
    if let Some((_, v)) = env_value(&lookup, warnings, "STUDIO_NAME") {
        settings.studio_name = v;
    }
}

fn env_value(
    lookup: &impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<String>,
    name: &str,
) -> Option<(String, String)> {
    let key = format!("{ENV_PREFIX}{name}");
    match lookup(&key) {
        Some(value) if value.trim().is_empty() => {
            warnings.push(format!("{key} was set but empty"));
            None
        }
        Some(value) => Some((key, value)),
        None => None,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

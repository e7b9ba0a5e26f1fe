use super::*;

use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

fn write_settings(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, contents).expect("write settings");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults_without_warnings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loaded = load_settings(&dir.path().join("absent.toml"), no_env);

    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.source, None);
    assert!(loaded.warnings.is_empty());
}

#[test]
fn file_values_are_applied() {
    let (_dir, path) = write_settings(
        r#"
theme = "dark"
reduce_motion = true
transition_secs = 0.8
studio_name = "North Studio"
"#,
    );

    let loaded = load_settings(&path, no_env);
    assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    assert_eq!(loaded.settings.theme, ThemeChoice::Dark);
    assert!(loaded.settings.reduce_motion);
    assert_eq!(loaded.settings.transition_secs, 0.8);
    assert_eq!(loaded.settings.studio_name, "North Studio");
    assert_eq!(loaded.settings.slide_distance, Settings::default().slide_distance);
}

#[test]
fn out_of_range_values_are_clamped() {
    let (_dir, path) = write_settings(
        r#"
transition_secs = 60.0
slide_distance = -5.0
window_width = 100.0
window_height = 100000.0
studio_name = "   "
"#,
    );

    let settings = load_settings(&path, no_env).settings;
    assert_eq!(settings.transition_secs, 5.0);
    assert_eq!(settings.slide_distance, 0.0);
    assert_eq!(settings.window_width, MIN_WINDOW_WIDTH);
    assert_eq!(settings.window_height, 4320.0);
    assert_eq!(settings.studio_name, "Design Studio");
}

#[test]
fn env_overrides_file() {
    let (_dir, path) = write_settings("theme = \"dark\"\ntransition_secs = 0.8\n");
    let env = env_of(&[
        ("STUDIO__THEME", "light"),
        ("STUDIO__TRANSITION_SECS", "0.25"),
        ("STUDIO__REDUCE_MOTION", "yes"),
    ]);

    let loaded = load_settings(&path, env);
    assert_eq!(loaded.settings.theme, ThemeChoice::Light);
    assert_eq!(loaded.settings.transition_secs, 0.25);
    assert!(loaded.settings.reduce_motion);
    assert!(loaded.warnings.is_empty());
}

#[test]
fn bad_env_values_are_reported_and_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let env = env_of(&[
        ("STUDIO__THEME", "neon"),
        ("STUDIO__SLIDE_DISTANCE", "far"),
        ("STUDIO__LOG_LEVEL", "  "),
    ]);

    let loaded = load_settings(&dir.path().join("absent.toml"), env);
    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.warnings.len(), 3);
    assert!(loaded.warnings.iter().any(|w| w.contains("STUDIO__THEME")));
    assert!(loaded.warnings.iter().any(|w| w.contains("was set but empty")));
}

#[test]
fn malformed_file_is_an_error_for_strict_reader_only() {
    let (_dir, path) = write_settings("theme = [not toml");

    let err = read_settings_file(&path).expect_err("malformed settings");
    assert!(format!("{err:#}").contains("failed to parse settings file"));

    let loaded = load_settings(&path, no_env);
    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.source, None);
    assert_eq!(loaded.warnings.len(), 1);
}

#[test]
fn motion_follows_reduce_motion_flag() {
    let settings = Settings {
        reduce_motion: true,
        transition_secs: 0.3,
        ..Settings::default()
    };
    let motion = settings.motion();
    assert!(!motion.enabled);
    assert_eq!(motion.duration_secs, 0.3);
}

#[test]
fn theme_names_parse_case_insensitively() {
    assert_eq!(" Dark ".parse::<ThemeChoice>(), Ok(ThemeChoice::Dark));
    assert!("sepia".parse::<ThemeChoice>().is_err());
    assert_eq!(ThemeChoice::Light.label(), "light");
}

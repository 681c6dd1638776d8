//! Planner settings file and log directory resolution.
//!
//! Settings resolution: `--settings <file>` > `~/.config/studyplan/settings.toml`
//! (when present) > built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use studyplan_core::PlannerSettings;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Return the studyplan config directory (`$XDG_CONFIG_HOME/studyplan` or
/// `~/.config/studyplan`).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.trim().is_empty() {
            return PathBuf::from(xdg).join("studyplan");
        }
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("studyplan")
}

pub fn default_settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE_NAME)
}

/// Load planner settings.
///
/// An explicit path must exist. The default path is optional and falls back
/// to `PlannerSettings::default()`.
pub fn load_settings(explicit: Option<&Path>) -> Result<PlannerSettings> {
    let settings = match explicit {
        Some(path) => read_settings_file(path)?,
        None => {
            let path = default_settings_path();
            if path.is_file() {
                read_settings_file(&path)?
            } else {
                PlannerSettings::default()
            }
        }
    };
    settings.validate().context("invalid planner settings")?;
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<PlannerSettings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file at {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse settings file at {}", path.display()))
}

/// Make a log directory absolute relative to the working directory.
pub fn absolute_log_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(dir))
}

#[cfg(test)]
mod tests {
    use super::{absolute_log_dir, load_settings};
    use std::path::Path;

    #[test]
    fn partial_settings_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "long_block_minutes = 120\nexam_horizon_days = 7\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.long_block_minutes, 120);
        assert_eq!(settings.exam_horizon_days, 7);
        assert_eq!(settings.mixed_block_minutes, 60);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "min_block_minutes = 0\n").unwrap();

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("min_block_minutes"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read settings file"));
    }

    #[test]
    fn relative_log_dir_is_anchored() {
        let resolved = absolute_log_dir(Path::new("logs")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("logs"));
    }
}

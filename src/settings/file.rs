//! Settings file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::Result;

impl Settings {
    /// Load settings from `path`. A missing file yields defaults, which are
    /// written back so the user has something to edit.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no settings at {}, writing defaults", path.display());
            let settings = Settings::default();
            settings.save(path)?;
            return Ok(settings);
        }

        let data = fs::read_to_string(path)?;
        let settings = toml::from_str(&data)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

pub fn default_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config")
    });
    base.join("passforge").join("settings.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::rand::SourceKind;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings {
            length: 24,
            symbols: false,
            count: 3,
            source: SourceKind::Hw,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "length = 30\ndigits = false\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.length, 30);
        assert!(!settings.digits);
        assert!(settings.uppercase);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "length = \"long\"").unwrap();
        assert!(matches!(Settings::load(&path), Err(Error::ConfigRead(_))));
    }
}

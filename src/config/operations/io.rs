use crate::config::types::OverlayConfig;
use crate::paths::PATH_SETTINGS;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> OverlayConfig {
    load_cfg_from(&PATH_SETTINGS)
}

pub fn save_cfg(config: &OverlayConfig) -> Result<(), Box<dyn Error>> {
    save_cfg_to(&PATH_SETTINGS, config)
}

/// Read settings from `path`, falling back to defaults if the file is missing or malformed
pub fn load_cfg_from(path: &Path) -> OverlayConfig {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            log::info!("config: no settings at {}, using defaults", path.display());
            return OverlayConfig::default();
        }
    };

    match serde_json::from_reader::<_, OverlayConfig>(BufReader::new(file)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config: ignoring malformed {}: {}", path.display(), e);
            OverlayConfig::default()
        }
    }
}

pub fn save_cfg_to(path: &Path, config: &OverlayConfig) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_cfg_from(&dir.path().join("settings.json"));
        assert_eq!(config, OverlayConfig::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_cfg_from(&path), OverlayConfig::default());
    }

    #[test]
    fn test_saved_settings_are_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");

        let mut config = OverlayConfig::default();
        config.cores_dir = PathBuf::from("/opt/cores");
        config.input_cooldown_frames = 6;
        save_cfg_to(&path, &config).unwrap();

        assert_eq!(load_cfg_from(&path), config);
    }
}

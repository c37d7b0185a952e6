//! CLI Configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub access_token: Option<String>,
    pub default_format: Option<String>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self, String> {
        Self::load_from(&Self::config_path(profile)?)
    }

    pub fn save(&self, profile: Option<&str>) -> Result<(), String> {
        self.save_to(&Self::config_path(profile)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
            toml::from_str(&content).map_err(|e| e.to_string())
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, content).map_err(|e| e.to_string())
    }

    /// Load, modify and save a profile; a file that fails to load is left untouched
    pub fn update(profile: Option<&str>, edit: impl FnOnce(&mut Self) -> Result<(), String>) -> Result<(), String> {
        Self::update_at(&Self::config_path(profile)?, edit)
    }

    pub fn update_at(path: &Path, edit: impl FnOnce(&mut Self) -> Result<(), String>) -> Result<(), String> {
        let mut config = Self::load_from(path)?;
        edit(&mut config)?;
        config.save_to(path)
    }

    /// Set a key by name; unknown keys are rejected
    pub fn set(&mut self, key: &str, value: String) -> Result<(), String> {
        match key {
            "api_url" => self.api_url = Some(value),
            "access_token" => self.access_token = Some(value),
            "default_format" => self.default_format = Some(value),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// Read a key by name, masking the token
    pub fn get(&self, key: &str) -> Result<Option<String>, String> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "access_token" => Ok(self.access_token.as_deref().map(mask)),
            "default_format" => Ok(self.default_format.clone()),
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn config_path(profile: Option<&str>) -> Result<PathBuf, String> {
        let home = dirs::home_dir().ok_or("Cannot find home directory")?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".storefront").join(filename))
    }
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(8).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("api_url", "http://shop.internal:8080".into()).unwrap();
        config.set("default_format", "json".into()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_update_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"http://shop.internal:8080\"\n").unwrap();

        Config::update_at(&path, |c| c.set("default_format", "yaml".into())).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("http://shop.internal:8080"));
        assert_eq!(loaded.default_format.as_deref(), Some("yaml"));
    }

    #[test]
    fn test_malformed_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let broken = "api_url = \"http://shop.internal:8080\"\ndefault_format = json\n";
        fs::write(&path, broken).unwrap();

        let result = Config::update_at(&path, |c| {
            c.access_token = Some("jwt".into());
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_keys() {
        let mut config = Config::default();
        assert!(config.set("tenant", "x".into()).is_err());
        config.set("access_token", "eyJhbGciOiJIUzI1NiJ9.payload".into()).unwrap();
        assert_eq!(config.get("access_token").unwrap().as_deref(), Some("eyJhbGci****"));
        assert_eq!(config.get("api_url").unwrap(), None);
    }
}

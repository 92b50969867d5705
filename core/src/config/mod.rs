use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "skillport.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: PathBuf::from(".claude").join("agents"),
            dest_dir: PathBuf::from("src").join("templates").join("skills"),
            output_file: "OUTPUT.md".to_string(),
        }
    }
}

impl Config {
    /// Loads `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            load_config(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Makes relative directories absolute against `root`.
    pub fn resolve(mut self, root: &Path) -> Self {
        if self.source_dir.is_relative() {
            self.source_dir = root.join(&self.source_dir);
        }
        if self.dest_dir.is_relative() {
            self.dest_dir = root.join(&self.dest_dir);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let name = self.output_file.trim();
        if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
            anyhow::bail!("Invalid output_file: {:?}", self.output_file);
        }
        Ok(())
    }
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_default(&config_path(tmp.path())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_file, "OUTPUT.md");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = config_path(tmp.path());
        std::fs::write(&path, "dest_dir = \"out/skills\"\n").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.dest_dir, PathBuf::from("out/skills"));
        assert_eq!(config.source_dir, Config::default().source_dir);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = config_path(tmp.path());
        std::fs::write(&path, "dest_dir = [").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn rejects_output_file_with_separator() {
        let tmp = TempDir::new().unwrap();
        let path = config_path(tmp.path());
        std::fs::write(&path, "output_file = \"nested/SKILL.md\"\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn resolve_only_touches_relative_dirs() {
        let root = Path::new("/project");
        let config = Config {
            source_dir: PathBuf::from("agents"),
            dest_dir: PathBuf::from("/abs/skills"),
            output_file: "SKILL.md".to_string(),
        }
        .resolve(root);

        assert_eq!(config.source_dir, PathBuf::from("/project/agents"));
        assert_eq!(config.dest_dir, PathBuf::from("/abs/skills"));
    }
}

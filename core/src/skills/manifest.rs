use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::frontmatter::split_frontmatter;

#[derive(Debug, Deserialize)]
struct FrontMatter {
    name: String,
    description: String,
    #[serde(rename = "allowed-tools", default)]
    allowed_tools: Vec<String>,
}

/// A converted skill as read back from disk.
#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub allowed_tools: Vec<String>,
    pub location: PathBuf,
}

impl Skill {
    /// First line of the description block, which carries the agent's own summary.
    pub fn summary(&self) -> &str {
        self.description.lines().next().unwrap_or("").trim()
    }
}

pub fn load_skill(path: &Path) -> Result<Skill> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let Some((header, _)) = split_frontmatter(&content) else {
        anyhow::bail!("No frontmatter found in {}", path.display());
    };

    let frontmatter: FrontMatter = serde_yaml::from_str(header)
        .with_context(|| format!("Invalid frontmatter in {}", path.display()))?;

    Ok(Skill {
        name: frontmatter.name,
        description: frontmatter.description,
        allowed_tools: frontmatter.allowed_tools,
        location: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_converted_skill() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("OUTPUT.md");
        fs::write(
            &path,
            "---\nname: steering\ndescription: |\n  Keeps context fresh\n\n  Trigger terms: steering\n\n  Use when: User requests involve steering tasks.\nallowed-tools: [Read, Write]\n---\n# Steering\n",
        )
        .unwrap();

        let skill = load_skill(&path).unwrap();
        assert_eq!(skill.name, "steering");
        assert_eq!(skill.summary(), "Keeps context fresh");
        assert!(skill.description.contains("Trigger terms: steering"));
        assert_eq!(skill.allowed_tools, vec!["Read", "Write"]);
        assert_eq!(skill.location, path);
    }

    #[test]
    fn missing_frontmatter_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("OUTPUT.md");
        fs::write(&path, "# Just markdown\n").unwrap();

        assert!(load_skill(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_skill(&tmp.path().join("nope.md")).is_err());
    }
}

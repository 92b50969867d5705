pub mod catalog;
pub mod frontmatter;
pub mod manifest;

pub use catalog::{ResolvedMetadata, SKILL_METADATA, SkillMetadata, metadata_for};
pub use manifest::{Skill, load_skill};

use std::path::{Path, PathBuf};

pub const AGENT_EXTENSION: &str = "md";

pub fn agent_path(source_dir: &Path, name: &str) -> PathBuf {
    source_dir.join(format!("{}.{}", name, AGENT_EXTENSION))
}

pub fn skill_path(dest_dir: &Path, name: &str, file_name: &str) -> PathBuf {
    dest_dir.join(name).join(file_name)
}

/// `requirements-analyst` -> `requirements analyst`
pub fn humanize(name: &str) -> String {
    name.replace('-', " ")
}

pub fn is_unsafe_skill_name(name: &str) -> bool {
    name.contains("..")
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
        || name.trim().is_empty()
}

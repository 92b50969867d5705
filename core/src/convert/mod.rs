pub mod runner;

pub use runner::{ConversionReport, EntryStatus, run, verify};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::skills::frontmatter::{
    extract_description, fallback_description, render_frontmatter, split_frontmatter,
};
use crate::skills::{agent_path, is_unsafe_skill_name, metadata_for, skill_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Converted(PathBuf),
    SourceMissing(PathBuf),
}

/// Rewrites an agent file's content into skill format.
///
/// The existing header, if any, only contributes its quoted description;
/// the body is carried over unchanged.
pub fn convert_content(name: &str, content: &str) -> String {
    let (description, body) = match split_frontmatter(content) {
        Some((header, body)) => {
            let description = extract_description(header)
                .map(str::to_string)
                .unwrap_or_else(|| fallback_description(name));
            (description, body)
        }
        None => (fallback_description(name), content),
    };

    let metadata = metadata_for(name);
    let header = render_frontmatter(name, &description, &metadata);

    let mut out = String::with_capacity(header.len() + 1 + body.len());
    out.push_str(&header);
    out.push('\n');
    out.push_str(body);
    out
}

/// Converts `source_dir/<name>.md` into `dest_dir/<name>/<file_name>`.
///
/// A missing source is reported as [`Conversion::SourceMissing`] and leaves
/// the destination untouched.
pub fn convert_agent(
    name: &str,
    source_dir: &Path,
    dest_dir: &Path,
    file_name: &str,
) -> Result<Conversion> {
    if is_unsafe_skill_name(name) {
        anyhow::bail!("Invalid skill name: {:?}", name);
    }

    let source = agent_path(source_dir, name);
    if !source.exists() {
        tracing::debug!(source = %source.display(), "Source file not found");
        return Ok(Conversion::SourceMissing(source));
    }

    let content = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    let converted = convert_content(name, &content);

    let dest = skill_path(dest_dir, name, file_name);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(&dest, converted).with_context(|| format!("Failed to write {}", dest.display()))?;

    tracing::info!(name, dest = %dest.display(), "Converted");
    Ok(Conversion::Converted(dest))
}

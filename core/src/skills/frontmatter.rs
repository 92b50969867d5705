//! Frontmatter scanning for agent files and rendering for skill files.

use super::catalog::ResolvedMetadata;
use super::humanize;

const FENCE: &str = "---";

/// Splits `content` into `(header, body)`.
///
/// The file must open with a `---` line. The header runs up to the first
/// following `---` line; the body is everything after that line, untouched.
/// Splitting at the first closing line is what a lazy `^---\n(.*?)\n---\n`
/// match does; a greedy match would run on to the last `---` line instead.
/// Fence lines may end in `\n` or `\r\n`. A trailing `\r` on the last header
/// line is dropped; body bytes are never rewritten.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    while let Some(pos) = rest[offset..].find("\n---") {
        let start = offset + pos;
        let after = &rest[start + 1 + FENCE.len()..];
        let body = after
            .strip_prefix('\n')
            .or_else(|| after.strip_prefix("\r\n"));
        if let Some(body) = body {
            let header = &rest[..start];
            return Some((header.strip_suffix('\r').unwrap_or(header), body));
        }
        offset = start + 1;
    }
    None
}

/// Finds the first `description: "..."` value in a header.
pub fn extract_description(header: &str) -> Option<&str> {
    header
        .match_indices("description:")
        .find_map(|(idx, key)| {
            let rest = header[idx + key.len()..].trim_start();
            let quoted = rest.strip_prefix('"')?;
            let end = quoted.find('"')?;
            (end > 0).then(|| &quoted[..end])
        })
}

pub fn fallback_description(name: &str) -> String {
    format!("{} skill", name)
}

/// Renders the skill header, fences included, without a trailing newline.
pub fn render_frontmatter(name: &str, description: &str, metadata: &ResolvedMetadata) -> String {
    format!(
        "---\n\
         name: {name}\n\
         description: |\n  \
         {description}\n\
         \n  \
         Trigger terms: {triggers}\n\
         \n  \
         Use when: User requests involve {topic} tasks.\n\
         allowed-tools: [{tools}]\n\
         ---",
        triggers = metadata.trigger_terms,
        topic = humanize(name),
        tools = metadata.allowed_tools.join(", "),
    )
}

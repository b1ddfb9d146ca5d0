//! Table of contents from second-level headings

const TOC_HEADING: &str = "Table of Contents";

/// Build a markdown link list from the `## ` headings of `text`.
///
/// The table of contents heading itself is skipped. Headings inside fenced
/// code blocks are ignored.
///
/// # Example
/// ```
/// use forge_template::table_of_contents;
///
/// let toc = table_of_contents("# Forge\n## Table of Contents\n## API Reference\n");
/// assert_eq!(toc, "- [API Reference](#api-reference)");
/// ```
pub fn table_of_contents(text: &str) -> String {
    let mut in_fence = false;
    let mut entries = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(title) = line.strip_prefix("## ") {
            let title = title.trim();
            if title.is_empty() || title == TOC_HEADING {
                continue;
            }
            entries.push(format!("- [{}](#{})", title, anchor(title)));
        }
    }

    entries.join("\n")
}

/// GitHub-style heading anchor.
pub fn anchor(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

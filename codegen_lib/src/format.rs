//! Formatting options threaded through all generators.

use serde::{Deserialize, Serialize};

/// Section header comment style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionMarker {
    /// Xcode-style `// MARK: - Title` headers.
    Mark,
    /// Plain `// Title` headers.
    Plain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    pub indent_width: usize,
    pub section_marker: SectionMarker,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            section_marker: SectionMarker::Mark,
        }
    }
}

impl FormatOptions {
    /// Padding for `level` levels of indentation.
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent_width * level)
    }

    /// Render a section header comment.
    pub fn section(&self, title: &str) -> String {
        match self.section_marker {
            SectionMarker::Mark => format!("// MARK: - {}", title),
            SectionMarker::Plain => format!("// {}", title),
        }
    }
}

/// Uppercase the first character and lowercase the remainder.
///
/// `lastUpdated` becomes `Lastupdated`, not `LastUpdated`. Accessor names in
/// the actor generator depend on this exact rule, so it stays a single pure
/// transform rather than a general-purpose casing utility.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

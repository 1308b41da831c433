//! Normalization of raw .gitignore lines

use serde::Serialize;

/// A single pattern line with comment, escape and negation markers resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitignoreLine {
    /// Pattern body; anchor slashes and trailing directory slashes are kept
    pub line: String,
    /// Whether the line started with `!`
    pub negated: bool,
}

impl GitignoreLine {
    pub fn new(line: impl Into<String>, negated: bool) -> Self {
        Self {
            line: line.into(),
            negated,
        }
    }
}

/// Normalize one raw line of a .gitignore file.
///
/// Returns `None` for blank lines and comments. A byte-order mark is trimmed
/// like whitespace. A leading `\#` or `\!` loses its backslash so the `#`/`!`
/// is kept as a literal character; a leading `!` marks the line as negated
/// and is stripped.
pub fn normalize_gitignore_line(raw_line: &str) -> Option<GitignoreLine> {
    let trimmed = raw_line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let negated = trimmed.starts_with('!');
    let unescaped = if trimmed.starts_with("\\#") || trimmed.starts_with("\\!") {
        &trimmed[1..]
    } else {
        trimmed
    };
    let line = if negated { &unescaped[1..] } else { unescaped };

    Some(GitignoreLine::new(line, negated))
}

//! Last-match-wins evaluation of an expanded pattern list
//!
//! This mirrors how a lint tool consumes the flat list: patterns are tried in
//! order, a plain match ignores the path and a `!` match re-includes it.

use crate::core::error::{ExpandError, Result};
use glob::{MatchOptions, Pattern};
use serde::Serialize;

/// Result of checking a path against an [`IgnoreList`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "pattern", rename_all = "snake_case")]
pub enum IgnoreResult {
    /// No pattern excluded the path
    Included,
    /// Excluded by the given pattern
    Ignored(String),
    /// Excluded earlier but re-included by the given negated pattern
    IncludedByNegation(String),
}

impl IgnoreResult {
    pub fn is_ignored(&self) -> bool {
        matches!(self, IgnoreResult::Ignored(_))
    }
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    original: String,
    pattern: Pattern,
    negated: bool,
}

/// An ordered, compiled list of root-relative ignore patterns
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    patterns: Vec<CompiledPattern>,
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

impl IgnoreList {
    /// Compile patterns as produced by the expander
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|raw| compile(raw.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check a root-relative, `/`-separated path
    pub fn check(&self, relative_path: &str) -> IgnoreResult {
        let path = relative_path.trim_start_matches("./").trim_start_matches('/');
        let mut result = IgnoreResult::Included;

        for compiled in &self.patterns {
            if !compiled.pattern.matches_with(path, MATCH_OPTIONS) {
                continue;
            }
            result = if compiled.negated {
                match result {
                    IgnoreResult::Included => IgnoreResult::Included,
                    _ => IgnoreResult::IncludedByNegation(compiled.original.clone()),
                }
            } else {
                IgnoreResult::Ignored(compiled.original.clone())
            };
        }

        result
    }

    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.check(relative_path).is_ignored()
    }
}

fn compile(raw: &str) -> Result<CompiledPattern> {
    let (negated, body) = match raw.strip_prefix('!') {
        Some(body) => (true, body),
        None => (false, raw),
    };
    let pattern = Pattern::new(body).map_err(|source| ExpandError::InvalidPattern {
        pattern: raw.to_string(),
        source,
    })?;
    Ok(CompiledPattern {
        original: raw.to_string(),
        pattern,
        negated,
    })
}

//! Parameterized document-path patterns
//!
//! Trigger registrations name a collection path with placeholder segments,
//! e.g. `items/{itemId}`. Matching a concrete document path against the
//! pattern yields the extracted parameters.

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::fmt;

/// One segment of a path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must match the concrete segment exactly
    Literal(String),
    /// Captures the concrete segment under this parameter name
    Param(String),
}

/// A parsed path pattern such as `items/{itemId}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string
    ///
    /// Segments are `/`-separated; a segment wrapped in `{...}` captures a
    /// parameter. Empty segments, empty parameter names, and duplicate
    /// parameter names are rejected.
    pub fn parse(pattern: &str) -> CoreResult<Self> {
        if pattern.is_empty() {
            return Err(CoreError::invalid_pattern("pattern cannot be empty"));
        }

        let mut segments = Vec::new();
        let mut seen_params: Vec<&str> = Vec::new();

        for part in pattern.split('/') {
            if part.is_empty() {
                return Err(CoreError::invalid_pattern(format!(
                    "empty segment in pattern: {pattern}"
                )));
            }

            if let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                if name.is_empty() {
                    return Err(CoreError::invalid_pattern(format!(
                        "empty parameter name in pattern: {pattern}"
                    )));
                }
                if seen_params.contains(&name) {
                    return Err(CoreError::invalid_pattern(format!(
                        "duplicate parameter {name} in pattern: {pattern}"
                    )));
                }
                seen_params.push(name);
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern string as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a concrete document path, returning the extracted parameters
    ///
    /// Fails when the segment counts differ, a literal segment differs, or
    /// the concrete path contains an empty segment.
    pub fn match_path(&self, path: &str) -> CoreResult<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return Err(self.mismatch(path));
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            if part.is_empty() {
                return Err(self.mismatch(path));
            }
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return Err(self.mismatch(path)),
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }

        Ok(params)
    }

    /// Whether a concrete path matches without extracting parameters
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.match_path(path).is_ok()
    }

    fn mismatch(&self, path: &str) -> CoreError {
        CoreError::PathMismatch {
            pattern: self.raw.clone(),
            path: path.to_string(),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

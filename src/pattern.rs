use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

const SCHEME_PREFIXES: [&str; 2] = ["https://", "http://"];
const WILDCARD_PREFIX: &str = "*.";

pub const MAX_PATTERN_LENGTH: usize = 4_096;
pub const MAX_ORIGIN_LENGTH: usize = 4_096;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile wildcard pattern")]
    Build(#[source] Box<BuildError>),
    #[error("pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Strips one leading `http://` or `https://` and one trailing `/`.
///
/// Comparison downstream is literal, so neither the scheme nor the host is case folded.
pub fn normalize(value: &str) -> &str {
    let without_scheme = SCHEME_PREFIXES
        .iter()
        .find_map(|scheme| value.strip_prefix(scheme))
        .unwrap_or(value);
    without_scheme.strip_suffix('/').unwrap_or(without_scheme)
}

/// A single entry of the allow-list, stored in normalized form.
#[derive(Debug, Clone)]
pub enum DomainPattern {
    /// Literal host, compared byte for byte against the normalized origin.
    Exact(String),
    /// `*.suffix`: one or more labels followed by `.suffix`. Never matches the bare suffix.
    Wildcard { suffix: String, regex: Regex },
}

impl DomainPattern {
    /// Parses a raw configuration entry. Blank entries yield `Ok(None)`.
    pub fn parse(raw: &str) -> Result<Option<Self>, PatternError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if trimmed.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: trimmed.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let normalized = normalize(trimmed);
        let pattern = match normalized.strip_prefix(WILDCARD_PREFIX) {
            Some(suffix) => Self::Wildcard {
                suffix: suffix.to_owned(),
                regex: compile_wildcard(suffix)?,
            },
            None => Self::Exact(normalized.to_owned()),
        };

        Ok(Some(pattern))
    }

    pub fn matches(&self, normalized_origin: &str) -> bool {
        match self {
            DomainPattern::Exact(value) => value == normalized_origin,
            DomainPattern::Wildcard { regex, .. } => regex.is_match(normalized_origin.as_bytes()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, DomainPattern::Wildcard { .. })
    }
}

impl fmt::Display for DomainPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainPattern::Exact(value) => f.write_str(value),
            DomainPattern::Wildcard { suffix, .. } => write!(f, "{WILDCARD_PREFIX}{suffix}"),
        }
    }
}

fn compile_wildcard(suffix: &str) -> Result<Regex, PatternError> {
    let expression = format!(r"^.+\.{}$", regex_syntax::escape(suffix));
    Regex::new(&expression).map_err(|err| PatternError::Build(Box::new(err)))
}

/// Returns `true` when `origin` matches any entry of `patterns`.
///
/// Entries are parsed lazily and evaluation stops at the first match. Entries that fail
/// to compile never match.
pub fn is_allowed<I, S>(origin: &str, patterns: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if origin.len() > MAX_ORIGIN_LENGTH {
        return false;
    }

    let candidate = normalize(origin);
    patterns
        .into_iter()
        .any(|raw| match DomainPattern::parse(raw.as_ref()) {
            Ok(Some(pattern)) => pattern.matches(candidate),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unusable origin pattern");
                false
            }
        })
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

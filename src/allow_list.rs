use crate::pattern::{DomainPattern, MAX_ORIGIN_LENGTH, normalize};
use std::sync::Arc;

/// Ordered set of domain patterns, in configuration order.
///
/// Blank and unusable entries are dropped while parsing, so a malformed configuration
/// degrades to an empty list that allows no origin.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    patterns: Arc<[DomainPattern]>,
}

impl AllowList {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_patterns<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = entries
            .into_iter()
            .filter_map(|entry| match DomainPattern::parse(entry.as_ref()) {
                Ok(pattern) => pattern,
                Err(err) => {
                    tracing::warn!(error = %err, "dropping unusable allow-list entry");
                    None
                }
            })
            .collect::<Vec<_>>();

        Self {
            patterns: patterns.into(),
        }
    }

    /// Parses the newline separated configuration field.
    pub fn parse(config_text: &str) -> Self {
        Self::from_patterns(config_text.lines())
    }

    /// First pattern matching `origin`, if any.
    pub fn find_match(&self, origin: &str) -> Option<&DomainPattern> {
        if origin.len() > MAX_ORIGIN_LENGTH {
            return None;
        }
        let candidate = normalize(origin);
        self.patterns
            .iter()
            .find(|pattern| pattern.matches(candidate))
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.find_match(origin).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;

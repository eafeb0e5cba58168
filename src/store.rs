use crate::allow_list::AllowList;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Read side of the allow-list configuration.
///
/// The gatekeeper calls [`snapshot`](AllowListSource::snapshot) at most once per decision
/// and works on the returned value only.
pub trait AllowListSource: Send + Sync {
    fn snapshot(&self) -> Arc<AllowList>;
}

impl AllowListSource for AllowList {
    fn snapshot(&self) -> Arc<AllowList> {
        Arc::new(self.clone())
    }
}

impl<T> AllowListSource for Arc<T>
where
    T: AllowListSource + ?Sized,
{
    fn snapshot(&self) -> Arc<AllowList> {
        (**self).snapshot()
    }
}

/// Adapts a closure into an [`AllowListSource`].
pub struct SnapshotFn<F>(pub F);

impl<F> AllowListSource for SnapshotFn<F>
where
    F: Fn() -> Arc<AllowList> + Send + Sync,
{
    fn snapshot(&self) -> Arc<AllowList> {
        (self.0)()
    }
}

/// Holds the newline separated allow-list field and hands out parsed snapshots.
///
/// Writers swap the whole text atomically. Every snapshot parses the current text, so an
/// update is visible to the next decision without any cache invalidation.
#[derive(Debug)]
pub struct AllowListStore {
    config_text: ArcSwap<String>,
}

impl AllowListStore {
    pub fn new() -> Self {
        Self::from_config_text("")
    }

    pub fn from_config_text(text: &str) -> Self {
        Self {
            config_text: ArcSwap::from_pointee(canonicalize(text).join("\n")),
        }
    }

    /// Replaces the stored field and returns the entries that were kept.
    ///
    /// Entries are trimmed and blank lines removed. Nothing else is rewritten, so every kept
    /// entry reads back exactly as accepted.
    pub fn replace(&self, text: &str) -> Vec<String> {
        let entries = canonicalize(text);
        self.config_text.store(Arc::new(entries.join("\n")));
        tracing::info!(entries = entries.len(), "allow-list replaced");
        entries
    }

    pub fn config_text(&self) -> Arc<String> {
        self.config_text.load_full()
    }

    pub fn entries(&self) -> Vec<String> {
        canonicalize(&self.config_text.load())
    }
}

impl Default for AllowListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AllowListSource for AllowListStore {
    fn snapshot(&self) -> Arc<AllowList> {
        let text = self.config_text.load();
        Arc::new(AllowList::parse(text.as_str()))
    }
}

fn canonicalize(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

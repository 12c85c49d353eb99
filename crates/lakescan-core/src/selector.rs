//! Selector filters bounding which subtrees a crawl descends into.
//!
//! Both filters are pure predicates applied only at SOURCE and FOLDER (or
//! SPACE) boundaries, never per-dataset: a dataset inside a rejected folder
//! is simply never visited.

use std::collections::BTreeSet;

/// Path-prefix filter for sources and folders.
///
/// A path is selected iff any configured prefix is a prefix of the path, or
/// the path itself is a prefix of a configured prefix. The second direction
/// lets the crawl pass through ancestor folders that are shorter than a
/// configured target, e.g. selector `["srcA", "db1"]` still admits the
/// source `["srcA"]` so traversal can reach `db1` underneath it.
#[derive(Debug, Clone)]
pub struct SourceSelector {
    prefixes: Vec<Vec<String>>,
}

impl SourceSelector {
    /// Creates a selector from explicit path prefixes.
    #[must_use]
    pub fn new(prefixes: Vec<Vec<String>>) -> Self {
        Self { prefixes }
    }

    /// The match-everything sentinel: a single empty prefix, which is a
    /// prefix of every path.
    #[must_use]
    pub fn match_all() -> Self {
        Self {
            prefixes: vec![Vec::new()],
        }
    }

    /// Returns true if the given path should be traversed.
    #[must_use]
    pub fn matches(&self, path: &[String]) -> bool {
        self.prefixes.iter().any(|prefix| {
            let shared = prefix.len().min(path.len());
            prefix[..shared] == path[..shared]
        })
    }
}

impl Default for SourceSelector {
    fn default() -> Self {
        Self::match_all()
    }
}

/// Space-name filter applied to the first path segment of top-level spaces.
///
/// An empty selector admits every space.
#[derive(Debug, Clone, Default)]
pub struct SpaceSelector {
    names: BTreeSet<String>,
}

impl SpaceSelector {
    /// Creates a selector from explicit space names.
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Returns true if a space whose path starts with `name` should be
    /// traversed.
    #[must_use]
    pub fn matches(&self, name: Option<&String>) -> bool {
        if self.names.is_empty() {
            return true;
        }
        name.is_some_and(|n| self.names.contains(n))
    }
}

//! Runtime helper bookkeeping.
//!
//! Compiled templates rely on three capabilities of the templating runtime.
//! The compiler records which ones a tree needs so the host can decide what
//! to import; the set is returned with each compile result and merged by
//! the caller across trees.

use rustc_hash::FxHashSet;

/// A capability of the templating runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RuntimeHelper {
    /// The tagging primitive that joins a template's literals with its
    /// escaped expression values.
    Html,
    /// Marks a value as raw HTML so it bypasses escaping.
    UnsafeHtml,
    /// Renders and joins the key/value pairs of a spread attribute list.
    JoinHtml,
}

impl RuntimeHelper {
    /// Returns the default runtime name of this helper.
    pub fn name(&self) -> &'static str {
        match self {
            RuntimeHelper::Html => "html",
            RuntimeHelper::UnsafeHtml => "unsafeHtml",
            RuntimeHelper::JoinHtml => "joinHtml",
        }
    }
}

impl std::fmt::Display for RuntimeHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of runtime helpers used by compiled output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeHelpers {
    used: FxHashSet<RuntimeHelper>,
}

impl RuntimeHelpers {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a helper as used.
    pub fn insert(&mut self, helper: RuntimeHelper) {
        self.used.insert(helper);
    }

    /// Returns true if the helper was used.
    pub fn contains(&self, helper: RuntimeHelper) -> bool {
        self.used.contains(&helper)
    }

    /// Adds every helper used by `other`.
    pub fn merge(&mut self, other: &RuntimeHelpers) {
        self.used.extend(other.used.iter().copied());
    }

    /// Returns true if no helper was used.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Returns the used helpers in a stable order.
    pub fn sorted(&self) -> Vec<RuntimeHelper> {
        let mut helpers: Vec<_> = self.used.iter().copied().collect();
        helpers.sort();
        helpers
    }
}

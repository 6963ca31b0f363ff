use rustc_hash::FxHashMap;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::CategoryItem;

/// Sibling indices from the root list down to a category.
pub type ItemPath = SmallVec<[usize; 8]>;

/// Expanded/collapsed overrides for categories, keyed by [`ItemPath`].
///
/// The host owns this value and decides how long it lives; the renderer only
/// reads overrides. Categories without an override fall back to auto-expansion
/// and their `collapsed` default.
#[derive(Clone, Debug, Default)]
pub struct SidebarExpandedState {
    // Explicit user choices; `true` means expanded.
    overrides: FxHashMap<ItemPath, bool>,
}

/// Snapshot of expansion overrides.
///
/// With the `serde` feature enabled, this type derives `Serialize`/`Deserialize`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarExpandedSnapshot {
    /// Overrides as `(path, expanded)` pairs, sorted by path.
    pub overrides: Vec<(ItemPath, bool)>,
}

impl SidebarExpandedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the category at `path` open or closed.
    pub fn set_expanded(&mut self, path: &[usize], expanded: bool) {
        self.overrides.insert(ItemPath::from_slice(path), expanded);
    }

    /// Flips the override at `path`; starts from `current` when none exists.
    pub fn toggle(&mut self, path: &[usize], current: bool) {
        let entry = self
            .overrides
            .entry(ItemPath::from_slice(path))
            .or_insert(current);
        *entry = !*entry;
    }

    /// Drops the override at `path`.
    pub fn reset(&mut self, path: &[usize]) {
        self.overrides.remove(path);
    }

    /// Drops every override.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    /// Returns the explicit override at `path`, if any.
    pub fn get(&self, path: &[usize]) -> Option<bool> {
        self.overrides.get(path).copied()
    }

    pub fn snapshot(&self) -> SidebarExpandedSnapshot {
        let mut overrides: Vec<_> = self
            .overrides
            .iter()
            .map(|(path, expanded)| (path.clone(), *expanded))
            .collect();
        overrides.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
        SidebarExpandedSnapshot { overrides }
    }

    pub fn restore(&mut self, snapshot: SidebarExpandedSnapshot) {
        self.overrides = snapshot.overrides.into_iter().collect();
    }
}

/// Expansion bookkeeping for one sibling list.
///
/// Created when the walker enters a level and dropped when it leaves, so the
/// scope never outlives the subtree it belongs to.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpandedScope {
    auto_collapse: bool,
    // Sibling elected to stay open when auto-collapse is on.
    expanded_item: Option<usize>,
}

impl ExpandedScope {
    pub const fn new(auto_collapse: bool) -> Self {
        Self {
            auto_collapse,
            expanded_item: None,
        }
    }

    /// Scope for a level whose open sibling was already elected, e.g. by a
    /// previous [`render`](crate::SidebarItems::render) of the same list.
    pub const fn with_expanded_item(auto_collapse: bool, expanded_item: Option<usize>) -> Self {
        Self {
            auto_collapse,
            expanded_item,
        }
    }

    /// Elects `index` as the open sibling unless one is already elected.
    pub const fn elect(&mut self, index: usize) {
        if self.expanded_item.is_none() {
            self.expanded_item = Some(index);
        }
    }

    pub const fn expanded_item(&self) -> Option<usize> {
        self.expanded_item
    }

    /// Decides whether the category at `index` (reached via `path`) is open.
    pub fn is_expanded(
        &self,
        state: &SidebarExpandedState,
        path: &[usize],
        index: usize,
        category: &CategoryItem,
        subtree_active: bool,
    ) -> bool {
        if !category.collapsible {
            return true;
        }
        if let Some(expanded) = state.get(path) {
            return expanded;
        }
        if self.auto_collapse
            && let Some(elected) = self.expanded_item
        {
            return elected == index;
        }
        subtree_active || !category.collapsed
    }
}

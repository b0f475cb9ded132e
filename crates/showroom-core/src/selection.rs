use indexmap::IndexSet;
use tracing::debug;

/// What a [`SelectionSet::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The id was new but the selection already held `max_selected` entries.
    /// The selection is unchanged; the hosting screen decides whether to
    /// surface a transient message.
    AtCapacity,
    /// The id is not in the current catalog snapshot. Ignored, because
    /// persisted selections can outlive a catalog refresh.
    UnknownId,
}

/// Direction of a successful selection change, for change listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Added,
    Removed,
}

/// Bounded, ordered, duplicate-free set of entity ids chosen for comparison.
///
/// Backed by an [`IndexSet`], so membership tests are O(1) and insertion
/// order survives arbitrary add/remove sequences.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: IndexSet<String>,
    max_selected: usize,
}

impl SelectionSet {
    pub fn new(max_selected: usize) -> Self {
        Self {
            ids: IndexSet::new(),
            max_selected,
        }
    }

    pub fn max_selected(&self) -> usize {
        self.max_selected
    }

    /// Lowers or raises the bound, e.g. when the layout class changes.
    /// Shrinking truncates from the end, keeping the earliest selections.
    pub fn set_max_selected(&mut self, max_selected: usize) {
        self.max_selected = max_selected;
        if self.ids.len() > max_selected {
            self.ids.truncate(max_selected);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Adds `id` if absent (and under the bound), removes it if present.
    ///
    /// `shift_remove` keeps the relative order of the remaining ids, which is
    /// what the column layout of every comparison surface expects.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if self.ids.shift_remove(id) {
            debug!(id, len = self.ids.len(), "selection toggle removed");
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= self.max_selected {
            debug!(id, max = self.max_selected, "selection toggle at capacity");
            return ToggleOutcome::AtCapacity;
        }
        self.ids.insert(id.to_string());
        debug!(id, len = self.ids.len(), "selection toggle added");
        ToggleOutcome::Added
    }

    pub fn clear_all(&mut self) {
        self.ids.clear();
    }

    /// Replaces the selection with an externally persisted id list, keeping
    /// the given order, deduplicating, and truncating to the bound.
    pub fn set_from_external<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.clear();
        for id in ids {
            if self.ids.len() >= self.max_selected {
                break;
            }
            self.ids.insert(id.into());
        }
        debug!(len = self.ids.len(), "selection seeded from external list");
    }
}

use std::fmt;

use tracing::debug;

use crate::catalog::{Catalog, ComparableEntity};
use crate::config::{LayoutClass, SurfaceConfig};
use crate::schema::{AttributeSchema, Section};
use crate::selection::{SelectionEvent, SelectionSet, ToggleOutcome};
use crate::view::{self, SortKey, ViewMode};
use crate::window::WindowState;

/// Fire-and-forget observer invoked after every successful toggle.
pub type SelectionListener = Box<dyn FnMut(&str, SelectionEvent)>;

/// The single state container a comparison screen owns.
///
/// Wraps one catalog snapshot, one attribute schema, the bounded selection,
/// and the view state, and threads them through the pure engine functions.
/// Everything here is synchronous and recomputed in full on each read; the
/// compared set is at most a few entities, so incremental caching would buy
/// nothing.
pub struct ComparisonSurface {
    catalog: Catalog,
    schema: AttributeSchema,
    config: SurfaceConfig,
    selection: SelectionSet,
    window: WindowState,
    mode: ViewMode,
    sort_by: SortKey,
    listener: Option<SelectionListener>,
}

impl fmt::Debug for ComparisonSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonSurface")
            .field("schema", &self.schema.id)
            .field("selection", &self.selection)
            .field("window", &self.window)
            .field("mode", &self.mode)
            .field("sort_by", &self.sort_by)
            .finish_non_exhaustive()
    }
}

impl ComparisonSurface {
    pub fn open(catalog: Catalog, schema: AttributeSchema, config: SurfaceConfig) -> Self {
        let selection = SelectionSet::new(config.max_selected);
        let window = WindowState::new(config.window_size);
        let mode = config.mode;
        let sort_by = config.sort_by;
        Self {
            catalog,
            schema,
            config,
            selection,
            window,
            mode,
            sort_by,
            listener: None,
        }
    }

    /// Opens a surface seeded from an externally persisted id list (e.g. the
    /// ids a user compared last visit). Stale ids are dropped.
    pub fn open_seeded<I, S>(
        catalog: Catalog,
        schema: AttributeSchema,
        config: SurfaceConfig,
        seed: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut surface = Self::open(catalog, schema, config);
        surface.set_from_external(seed);
        surface
    }

    pub fn set_listener(&mut self, listener: SelectionListener) {
        self.listener = Some(listener);
    }

    // --- selection ---------------------------------------------------------

    /// Adds or removes `id` from the comparison.
    ///
    /// Removal works even for an id the current catalog no longer knows, so
    /// a stale column can always be dismissed. Adding an unknown id is a
    /// no-op, as is adding beyond the bound. The window offset is re-clamped
    /// after every successful mutation.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if !self.selection.contains(id) && !self.catalog.contains(id) {
            debug!(id, "toggle ignored: id not in catalog snapshot");
            return ToggleOutcome::UnknownId;
        }

        let outcome = self.selection.toggle(id);
        match outcome {
            ToggleOutcome::Added => self.notify(id, SelectionEvent::Added),
            ToggleOutcome::Removed => {
                self.window.reclamp(self.selection.len());
                self.notify(id, SelectionEvent::Removed);
            }
            ToggleOutcome::AtCapacity | ToggleOutcome::UnknownId => {}
        }
        outcome
    }

    pub fn clear_all(&mut self) {
        self.selection.clear_all();
        self.window.reclamp(0);
    }

    /// Replaces the selection, keeping order, dropping ids absent from the
    /// catalog snapshot, deduplicating, and truncating to the bound.
    pub fn set_from_external<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = ids
            .into_iter()
            .filter(|id| self.catalog.contains(id.as_ref()))
            .map(|id| id.as_ref().to_string())
            .collect();
        self.selection.set_from_external(ids);
        self.window.reclamp(self.selection.len());
    }

    pub fn current_selection(&self) -> Vec<&str> {
        self.selection.ids().collect()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    fn notify(&mut self, id: &str, event: SelectionEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(id, event);
        }
    }

    // --- view state --------------------------------------------------------

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
    }

    /// Applies a layout-class change (device rotation, breakpoint crossing):
    /// both the selection bound and the window size follow the new class.
    pub fn apply_layout(&mut self, layout: LayoutClass) {
        self.config.max_selected = layout.max_selected();
        self.config.window_size = layout.window_size();
        self.selection.set_max_selected(layout.max_selected());
        self.window
            .set_size(layout.window_size(), self.selection.len());
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    // --- window ------------------------------------------------------------

    pub fn next(&mut self) {
        self.window.next(self.selection.len());
    }

    pub fn prev(&mut self) {
        self.window.prev();
    }

    pub fn go_to(&mut self, index: usize) {
        self.window.go_to(index, self.selection.len());
    }

    pub fn can_go_next(&self) -> bool {
        self.window.can_go_next(self.selection.len())
    }

    pub fn can_go_prev(&self) -> bool {
        self.window.can_go_prev()
    }

    pub fn window_offset(&self) -> usize {
        self.window.offset()
    }

    // --- derived views -----------------------------------------------------

    /// The full selection resolved against the catalog, in display order.
    pub fn sorted_selection(&self) -> Vec<&ComparableEntity> {
        let picked = self.catalog.resolve(self.selection.ids());
        view::sort_entities(&picked, self.sort_by)
    }

    /// The sorted, windowed subset currently rendered side by side.
    pub fn visible_entities(&self) -> Vec<&ComparableEntity> {
        let sorted = self.sorted_selection();
        self.window.visible(&sorted).to_vec()
    }

    /// Sections/fields for the active view mode, diffed over the visible
    /// window only. With nothing selected there is nothing to compare, so no
    /// sections are produced in any mode.
    pub fn filtered_schema(&self) -> Vec<Section> {
        let visible = self.visible_entities();
        if visible.is_empty() {
            return Vec::new();
        }
        view::filter_sections(&self.schema, self.mode, &visible)
    }
}

use tracing::trace;

/// A fixed-size view sliding over the sorted selection.
///
/// Every operation is total: navigation past either end clamps instead of
/// failing, and [`WindowState::reclamp`] re-establishes the offset invariant
/// after the selection shrinks. The invariant is
/// `offset <= max(0, len - size)` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    offset: usize,
    size: usize,
}

impl WindowState {
    pub fn new(size: usize) -> Self {
        Self { offset: 0, size }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn max_offset(&self, len: usize) -> usize {
        len.saturating_sub(self.size)
    }

    /// Changes the window size (e.g. on a layout-class change) and re-clamps
    /// against the current selection length.
    pub fn set_size(&mut self, size: usize, len: usize) {
        self.size = size;
        self.reclamp(len);
    }

    pub fn next(&mut self, len: usize) {
        self.offset = (self.offset + 1).min(self.max_offset(len));
        trace!(offset = self.offset, "window next");
    }

    pub fn prev(&mut self) {
        self.offset = self.offset.saturating_sub(1);
        trace!(offset = self.offset, "window prev");
    }

    pub fn go_to(&mut self, index: usize, len: usize) {
        self.offset = index.min(self.max_offset(len));
    }

    /// Clamps the offset back into range after any selection mutation.
    pub fn reclamp(&mut self, len: usize) {
        let max = self.max_offset(len);
        if self.offset > max {
            trace!(from = self.offset, to = max, "window reclamped");
            self.offset = max;
        }
    }

    pub fn can_go_next(&self, len: usize) -> bool {
        self.offset < self.max_offset(len)
    }

    pub fn can_go_prev(&self) -> bool {
        self.offset > 0
    }

    /// The currently visible slice of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = (self.offset + self.size).min(items.len());
        &items[start..end]
    }
}

//! Cursor offset and selection range.

/// A selection between an anchor and a moving extent.
///
/// `anchor` is where the selection started, `extent` where it currently ends;
/// either may be the larger. Use [`start`](Self::start)/[`end`](Self::end)
/// for the normalized range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub extent: usize,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub fn new(anchor: usize, extent: usize) -> Self {
        Self { anchor, extent }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.anchor.min(self.extent)
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.anchor.max(self.extent)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.extent
    }

    /// Number of selected characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Check if position is within selection.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start() && pos < self.end()
    }
}

/// Insertion offset plus an optional selection.
///
/// Every method takes the current content length and clamps to it, so
/// `cursor <= len` and `start <= end <= len` hold after each call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorModel {
    cursor: usize,
    selection: Option<Selection>,
}

impl CursorModel {
    /// A cursor at offset 0 with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current insertion offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// The active selection, if it is non-empty.
    ///
    /// A selection whose ends coincide is reported as no selection.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection.filter(|sel| !sel.is_empty())
    }

    /// Normalized `(start, end)` of the active selection.
    #[must_use]
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection().map(|sel| (sel.start(), sel.end()))
    }

    /// Move one character left, clearing any selection.
    pub fn move_left(&mut self, len: usize) {
        self.cursor = self.cursor.min(len).saturating_sub(1);
        self.selection = None;
    }

    /// Move one character right, clearing any selection.
    pub fn move_right(&mut self, len: usize) {
        self.cursor = (self.cursor + 1).min(len);
        self.selection = None;
    }

    /// Place the cursor, clamped to `len`. Selection is left as is.
    pub fn set_cursor(&mut self, offset: usize, len: usize) {
        self.cursor = offset.min(len);
    }

    /// Select `[0, len]` and put the cursor at the end.
    pub fn select_all(&mut self, len: usize) {
        self.selection = Some(Selection::new(0, len));
        self.cursor = len;
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Extend the selection to `offset` and move the cursor there.
    ///
    /// With no selection yet, the current cursor becomes the anchor.
    pub fn extend_selection_to(&mut self, offset: usize, len: usize) {
        let offset = offset.min(len);
        let anchor = self
            .selection
            .map_or(self.cursor.min(len), |sel| sel.anchor.min(len));
        self.selection = Some(Selection::new(anchor, offset));
        self.cursor = offset;
    }

    /// Re-clamp after the content shrank underneath the model.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len);
        if let Some(sel) = &mut self.selection {
            sel.anchor = sel.anchor.min(len);
            sel.extent = sel.extent.min(len);
        }
    }
}

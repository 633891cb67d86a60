//! Fixed-size windows over a filtered record sequence, for raw-row inspection.

use crate::types::TripRecord;

/// Rows returned per window unless configured otherwise.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Sequential cursor over a borrowed record slice.
///
/// Each call to [`RawRowPaginator::next_window`] returns up to `window_size` records and
/// advances the cursor. Past the end the window is short, then empty; it never fails.
/// A paginator belongs to one filtered sequence: build a new one (or [`reset`](Self::reset))
/// when the sequence changes.
#[derive(Debug, Clone)]
pub struct RawRowPaginator<'a> {
    records: &'a [TripRecord],
    cursor: usize,
    window_size: usize,
}

impl<'a> RawRowPaginator<'a> {
    pub fn new(records: &'a [TripRecord]) -> Self {
        Self {
            records,
            cursor: 0,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// Use `size` rows per window (at least 1).
    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size.max(1);
        self
    }

    /// The next window of up to `window_size` records, starting at the cursor.
    pub fn next_window(&mut self) -> &'a [TripRecord] {
        let start = self.cursor.min(self.records.len());
        let end = self.cursor.saturating_add(self.window_size).min(self.records.len());
        self.cursor = self.cursor.saturating_add(self.window_size);
        &self.records[start..end]
    }

    /// Offset of the first record the next window will return.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// `true` once every record has been returned.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.records.len()
    }

    /// Move the cursor back to the first record.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

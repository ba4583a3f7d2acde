//! A snapshot together with the selection a user has in it.

use crate::{
    layout::{Layout, Momentum},
    mismatches::Mismatches,
    offset::Scheme,
    snapshot::Snapshot,
};
use std::ops::Range;
use tracing::trace;

/// Editable content and selection, measured for widgets in scheme `S`.
///
/// The selection is stored as symbol indices and is always a preferred selection
/// for the current snapshot.
#[derive(Debug, Clone)]
pub struct Field<S: Scheme> {
    layout: Layout<S>,
    selection: Range<usize>,
}

impl<S: Scheme> Field<S> {
    /// Field with the caret at the preferred end position.
    pub fn new(snapshot: Snapshot) -> Self {
        let layout = Layout::new(snapshot);
        let end = layout.end_index();
        let selection = layout.selection(end..end, Momentum::none());
        Self { layout, selection }
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.layout.snapshot()
    }

    pub fn layout(&self) -> &Layout<S> {
        &self.layout
    }

    /// Selection as symbol indices.
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Selection as widget positions.
    pub fn positions(&self) -> Range<usize> {
        self.layout.positions(&self.selection)
    }

    /// Convert widget positions to symbol indices in the current snapshot.
    pub fn indices(&self, positions: &Range<usize>) -> Range<usize> {
        self.layout.indices(positions)
    }

    /// Replace the snapshot and carry the selection over to it.
    pub fn update_snapshot(&mut self, snapshot: Snapshot) {
        let old = std::mem::replace(&mut self.layout, Layout::new(snapshot));
        let past = old.snapshot().symbols();
        let present = self.layout.snapshot().symbols();

        let upper = present.len() - Mismatches::backwards(&past[self.selection.end..], present);
        let lower = if self.selection.is_empty() || upper == self.layout.start_index() {
            upper
        } else {
            Mismatches::forwards(&past[..self.selection.start], present).min(upper)
        };

        let selection = self.layout.selection(lower..upper, Momentum::none());
        trace!(from = ?self.selection, to = ?selection, "carried selection over");
        self.selection = selection;
    }

    /// Replace the snapshot after the symbols in `replaced` were edited.
    ///
    /// The caret is first collapsed behind the edit, which is where a widget leaves it
    /// after typing or pasting.
    pub fn update_snapshot_after_edit(&mut self, replaced: Range<usize>, snapshot: Snapshot) {
        let end = replaced.end.min(self.layout.end_index());
        self.selection = end..end;
        self.update_snapshot(snapshot);
    }

    /// Apply a selection reported by a widget.
    ///
    /// With `momentum` the direction each bound moved in is taken into account, which
    /// is what arrow keys need to cross formatting characters.
    pub fn update_selection(&mut self, positions: Range<usize>, momentum: bool) {
        let requested = self.layout.indices(&positions);
        let momentum = if momentum {
            Momentum::new(&self.selection, &requested)
        } else {
            Momentum::none()
        };

        let selection = self.layout.selection(requested, momentum);
        trace!(?positions, ?selection, ?momentum, "corrected selection");
        self.selection = selection;
    }
}

//! Caret addressing over a [`Snapshot`] and the preferred-caret search.
//!
//! A caret index `i` sits between symbol `i - 1` and symbol `i`. Indices `0` and
//! `len` are always valid. Not every index is a good place for a caret though: a
//! caret should rest against content, not against decoration the style inserted. The
//! search in [`Layout::caret`] finds the nearest index that does, honoring which way the
//! user was moving.

use crate::{
    offset::{self, Scheme},
    snapshot::Snapshot,
    symbol::Symbol,
};
use std::{marker::PhantomData, ops::Range};

/// Which way a caret moves or looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forwards,
    Backwards,
}

impl Direction {
    /// Direction of travel from `from` to `to`, if the caret moved at all.
    pub fn between(from: usize, to: usize) -> Option<Self> {
        match from.cmp(&to) {
            std::cmp::Ordering::Less => Some(Self::Forwards),
            std::cmp::Ordering::Greater => Some(Self::Backwards),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forwards => Self::Backwards,
            Self::Backwards => Self::Forwards,
        }
    }
}

/// Which way each selection bound was travelling when the user moved it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Momentum {
    pub lower: Option<Direction>,
    pub upper: Option<Direction>,
}

impl Momentum {
    pub fn none() -> Self {
        Self::default()
    }

    /// Momentum of a selection change from `old` to `new`.
    pub fn new(old: &Range<usize>, new: &Range<usize>) -> Self {
        Self {
            lower: Direction::between(old.start, new.start),
            upper: Direction::between(old.end, new.end),
        }
    }
}

/// A snapshot plus its caret boundaries measured in scheme `S`.
#[derive(Debug, Clone)]
pub struct Layout<S: Scheme> {
    snapshot: Snapshot,
    positions: Vec<usize>,
    _scheme: PhantomData<S>,
}

impl<S: Scheme> Layout<S> {
    pub fn new(snapshot: Snapshot) -> Self {
        let mut positions = Vec::with_capacity(snapshot.len() + 1);
        offset::boundaries::<S>(snapshot.iter().map(|symbol| symbol.character), &mut positions);
        Self {
            snapshot,
            positions,
            _scheme: PhantomData,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    pub fn start_index(&self) -> usize {
        0
    }

    pub fn end_index(&self) -> usize {
        self.snapshot.len()
    }

    /// Widget position of caret `index`.
    pub fn position(&self, index: usize) -> usize {
        self.positions[index.min(self.end_index())]
    }

    /// Caret index at widget `position`.
    ///
    /// Positions inside a multi-unit character snap to the slot in front of it;
    /// positions past the end snap to the end.
    pub fn index(&self, position: usize) -> usize {
        self.positions
            .partition_point(|&boundary| boundary <= position)
            .saturating_sub(1)
    }

    pub fn positions(&self, range: &Range<usize>) -> Range<usize> {
        self.position(range.start)..self.position(range.end)
    }

    pub fn indices(&self, range: &Range<usize>) -> Range<usize> {
        let start = self.index(range.start);
        let end = self.index(range.end);
        start.min(end)..start.max(end)
    }

    /// The symbol adjoining `index` on the `direction` side.
    pub fn peek(&self, index: usize, direction: Direction) -> Option<&Symbol> {
        match direction {
            Direction::Forwards => self.snapshot.get(index),
            Direction::Backwards => index.checked_sub(1).and_then(|i| self.snapshot.get(i)),
        }
    }

    fn rests_against(&self, index: usize, side: Direction) -> bool {
        self.peek(index, side)
            .is_some_and(|symbol| symbol.is_nonpassthrough())
    }

    /// Preferred caret for `index`.
    ///
    /// `preference` is the side a bound naturally leans on: backwards for an upper
    /// bound, forwards for a lower bound. `momentum` is the direction the user moved
    /// the bound in, when known.
    pub fn caret(&self, index: usize, preference: Direction, momentum: Option<Direction>) -> usize {
        if let Some(anchor) = self.snapshot.anchor() {
            return anchor.min(self.end_index());
        }

        let index = index.min(self.end_index());
        if self.rests_against(index, preference) {
            return index;
        }

        let direction = momentum.unwrap_or(preference);
        let through = direction != preference;

        self.first_caret(index, direction, through)
            .or_else(|| self.first_caret(index, direction.reversed(), false))
            .unwrap_or(self.start_index())
    }

    /// First caret stop scanning from `from` towards `direction`.
    ///
    /// Without `through` the caret stops in front of the first stop-worthy symbol
    /// ahead of it. With `through` it moves past that symbol and stops behind it, so
    /// moving against the bound's preference always crosses one piece of content.
    pub fn first_caret(&self, from: usize, direction: Direction, through: bool) -> Option<usize> {
        let side = if through {
            direction.reversed()
        } else {
            direction
        };

        match direction {
            Direction::Forwards => {
                (from..=self.end_index()).find(|&index| self.rests_against(index, side))
            },
            Direction::Backwards => (self.start_index()..=from)
                .rev()
                .find(|&index| self.rests_against(index, side)),
        }
    }

    /// Preferred selection for `range`.
    ///
    /// The upper bound is resolved first. The lower bound is only resolved for a
    /// non-empty selection whose upper bound did not collapse to the start.
    pub fn selection(&self, range: Range<usize>, momentum: Momentum) -> Range<usize> {
        let upper = self.caret(range.end, Direction::Backwards, momentum.upper);

        if range.is_empty() || upper == self.start_index() {
            return upper..upper;
        }

        let lower = self
            .caret(range.start, Direction::Forwards, momentum.lower)
            .min(upper);
        lower..upper
    }
}

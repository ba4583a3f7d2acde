//! Editing session state for one text field.

use crate::{
    commit::Commit,
    error::{Error, Result},
    field::Field,
    lexicon::Locale,
    offset::{Scheme, Utf16},
    proposal::Proposal,
    snapshot::Snapshot,
    style::DiffableTextStyle,
};
use std::ops::Range;
use tracing::debug;

/// What changed in a [`Context`] call, so a widget adapter knows what to write back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Update {
    pub text: bool,
    pub selection: bool,
    pub value: bool,
}

impl Update {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

/// Style, value and field content of one bound text field.
///
/// While active the field shows the editable snapshot from
/// [`DiffableTextStyle::interpret`]; while inactive it shows the showcase text from
/// [`DiffableTextStyle::format`]. Positions are measured in `S`, UTF-16 code units by
/// default since that is what most widget toolkits report.
#[derive(Debug, Clone)]
pub struct Context<St: DiffableTextStyle, S: Scheme = Utf16> {
    style: St,
    value: St::Value,
    field: Field<S>,
    active: bool,
}

impl<St: DiffableTextStyle, S: Scheme> Context<St, S> {
    /// Context showing `value` formatted for display.
    pub fn inactive(style: St, value: St::Value) -> Self {
        let field = Field::new(Snapshot::content(&style.format(&value)));
        Self {
            style,
            value,
            field,
            active: false,
        }
    }

    /// Context editing `commit`, with the caret at the end.
    pub fn active(style: St, commit: Commit<St::Value>) -> Self {
        Self {
            style,
            value: commit.value,
            field: Field::new(commit.snapshot),
            active: true,
        }
    }

    /// Context editing `value`.
    pub fn focused(style: St, value: St::Value) -> Self {
        let commit = style.interpret(&value);
        Self::active(style, commit)
    }

    pub fn style(&self) -> &St {
        &self.style
    }

    pub fn value(&self) -> &St::Value {
        &self.value
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.field.snapshot()
    }

    pub fn text(&self) -> String {
        self.field.snapshot().characters()
    }

    /// Selection in widget positions.
    pub fn selection(&self) -> Range<usize> {
        self.field.positions()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Switch to editing.
    pub fn focus(&mut self) -> Update {
        if self.active {
            return Update::none();
        }
        let commit = self.style.interpret(&self.value);
        self.transition(|context| {
            context.value = commit.value;
            context.field = Field::new(commit.snapshot);
            context.active = true;
        })
    }

    /// Switch to showing the formatted value.
    pub fn unfocus(&mut self) -> Update {
        if !self.active {
            return Update::none();
        }
        self.transition(|context| {
            let text = context.style.format(&context.value);
            context.field = Field::new(Snapshot::content(&text));
            context.active = false;
        })
    }

    /// Replace `positions` with `text`, as reported by the widget.
    ///
    /// A rejected edit leaves the context as it was.
    pub fn merge(&mut self, positions: Range<usize>, text: &str) -> Result<Update> {
        if !self.active {
            return Err(Error::Inactive);
        }

        let range = self.field.indices(&positions);
        let proposal = Proposal::typing(self.field.snapshot().clone(), range.clone(), text);
        let commit = self.style.merge(proposal).inspect_err(|error| {
            debug!(?positions, text, %error, "rejected edit");
        })?;

        Ok(self.transition(|context| {
            context.value = commit.value;
            context.field.update_snapshot_after_edit(range, commit.snapshot);
        }))
    }

    /// Correct a selection reported by the widget.
    ///
    /// With `momentum`, the direction each bound moved since the last selection decides
    /// which way it skips over formatting.
    pub fn select(&mut self, positions: Range<usize>, momentum: bool) -> Update {
        self.field.update_selection(positions.clone(), momentum);
        Update {
            selection: self.field.positions() != positions,
            ..Update::none()
        }
    }

    /// Programmatic change of style or value.
    pub fn update(&mut self, style: St, value: St::Value) -> Update {
        if style == self.style && value == self.value {
            return Update::none();
        }

        self.transition(|context| {
            context.style = style;
            if context.active {
                let commit = context.style.interpret(&value);
                context.value = commit.value;
                context.field.update_snapshot(commit.snapshot);
            } else {
                let text = context.style.format(&value);
                context.value = value;
                context.field = Field::new(Snapshot::content(&text));
            }
        })
    }

    /// Rebind the style to a new environment locale.
    pub fn environment(&mut self, locale: &Locale) -> Update {
        let style = self.style.clone().locale(locale);
        let value = self.value.clone();
        self.update(style, value)
    }

    fn transition(&mut self, change: impl FnOnce(&mut Self)) -> Update {
        let text = self.text();
        let selection = self.selection();
        let value = self.value.clone();

        change(self);

        Update {
            text: self.text() != text,
            selection: self.selection() != selection,
            value: self.value != value,
        }
    }
}

//! As-you-type formatting for text fields.
//!
//! A widget reports each edit as "replace this range with this text". A
//! [`DiffableTextStyle`] validates the edit and rebuilds the whole field as a
//! [`Snapshot`] of attribute-tagged symbols, and the [`Context`] carries the caret
//! over to the new snapshot so that typing feels stable while grouping separators,
//! labels and pattern literals come and go around it.

pub mod commit;
pub mod context;
pub mod error;
pub mod field;
pub mod layout;
pub mod lexicon;
pub mod mismatches;
pub mod notation;
pub mod number;
pub mod offset;
pub mod pattern;
pub mod proposal;
pub mod snapshot;
pub mod style;
pub mod symbol;

pub use commit::Commit;
pub use context::{Context, Update};
pub use error::{Error, Result};
pub use field::Field;
pub use layout::{Direction, Layout, Momentum};
pub use lexicon::{Currency, Kind, Lexicon, LexiconCache, Locale};
pub use number::{Bounds, Number, NumberTextStyle, NumericValue, Precision};
pub use offset::{Character, Scheme, Utf16, Utf8};
pub use pattern::PatternTextStyle;
pub use proposal::Proposal;
pub use snapshot::Snapshot;
pub use style::{DiffableTextStyle, StyleExt};
pub use symbol::{Attribute, Symbol};

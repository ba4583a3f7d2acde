//! Position schemes used to talk to text widgets.
//!
//! Internally a caret is a symbol index. Widgets count differently: UTF-16 code
//! units, UTF-8 bytes or plain characters. A [`Scheme`] measures one character in the
//! widget's unit so [`Layout`](crate::Layout) can convert in both directions.

use std::fmt::Debug;

/// Unit a widget uses for text offsets.
pub trait Scheme: Debug + Clone + Copy + Default + 'static {
    /// Size of `character` in this unit.
    fn size(character: char) -> usize;
}

/// One unit per character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Character;

/// UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

/// UTF-16 code units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

impl Scheme for Character {
    #[inline]
    fn size(_: char) -> usize {
        1
    }
}

impl Scheme for Utf8 {
    #[inline]
    fn size(character: char) -> usize {
        character.len_utf8()
    }
}

impl Scheme for Utf16 {
    #[inline]
    fn size(character: char) -> usize {
        character.len_utf16()
    }
}

/// Caret boundaries of `characters` in scheme `S`, including `0` and the total size.
///
/// Entry `i` is the position of the caret slot in front of character `i`.
pub fn boundaries<S: Scheme>(characters: impl Iterator<Item = char>, out: &mut Vec<usize>) {
    out.clear();
    out.push(0);
    let mut position = 0;
    for character in characters {
        position += S::size(character);
        out.push(position);
    }
}

//! Terminal display width of Unicode codepoints.
//!
//! Every codepoint is classified into a [`WcWidth`]: width 1, width 2, or one
//! of several categories whose width depends on the renderer (combining
//! marks, East Asian ambiguous, private use, ...). Summing the widths of a
//! string is left to the caller.
//!
//! ```
//! use widechar_width::{classify, WcWidth};
//!
//! assert_eq!(classify('A' as u32), WcWidth::One);
//! assert_eq!(classify(0x3042), WcWidth::Two);
//! assert_eq!(WcWidth::from_char('\u{e000}').code(), -4);
//! ```

#![no_std]

mod table;
#[rustfmt::skip]
mod tables;

pub use crate::table::{Range, Table, TableSet};

/// The tables generated from the Unicode Character Database.
pub static TABLES: TableSet<'static> = TableSet::new([
    &tables::ASCII,
    &tables::PRIVATE_USE,
    &tables::NONPRINT,
    &tables::NONCHARACTER,
    &tables::COMBINING,
    &tables::COMBINING_LETTERS,
    &tables::DOUBLEWIDE,
    &tables::AMBIGUOUS,
    &tables::UNASSIGNED,
    &tables::WIDENED_IN_9,
]);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WcWidth {
    /// The character is single-width.
    One,
    /// The character is double-width.
    Two,
    /// The character is not printable.
    NonPrint,
    /// The character is a zero-width combiner.
    Combining,
    /// The character is East Asian ambiguous width.
    Ambiguous,
    /// The character is for private use.
    PrivateUse,
    /// The character is unassigned.
    Unassigned,
    /// Width is 1 in Unicode 8, 2 in Unicode 9 and later.
    WidenedIn9,
    /// The character is a noncharacter.
    NonCharacter,
}

/// Classify any 32-bit value. Values outside the Unicode codespace are not
/// in any table and come back as [`WcWidth::One`].
pub fn classify(c: u32) -> WcWidth {
    TABLES.classify(c)
}

impl WcWidth {
    pub fn from_char(ch: char) -> Self {
        classify(ch as u32)
    }

    /// The signed integer form used by the C interface: the width itself
    /// for `One` and `Two`, a negative sentinel otherwise.
    pub const fn code(self) -> i32 {
        match self {
            WcWidth::One => 1,
            WcWidth::Two => 2,
            WcWidth::NonPrint => -1,
            WcWidth::Combining => -2,
            WcWidth::Ambiguous => -3,
            WcWidth::PrivateUse => -4,
            WcWidth::Unassigned => -5,
            WcWidth::WidenedIn9 => -6,
            WcWidth::NonCharacter => -7,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => WcWidth::One,
            2 => WcWidth::Two,
            -1 => WcWidth::NonPrint,
            -2 => WcWidth::Combining,
            -3 => WcWidth::Ambiguous,
            -4 => WcWidth::PrivateUse,
            -5 => WcWidth::Unassigned,
            -6 => WcWidth::WidenedIn9,
            -7 => WcWidth::NonCharacter,
            _ => return None,
        })
    }

    /// Column width for applications using Unicode 8 or earlier.
    pub const fn width_unicode_8_or_earlier(self) -> u8 {
        match self {
            WcWidth::One => 1,
            WcWidth::Two => 2,
            WcWidth::NonPrint
            | WcWidth::Combining
            | WcWidth::Unassigned
            | WcWidth::NonCharacter => 0,
            WcWidth::Ambiguous | WcWidth::PrivateUse => 1,
            WcWidth::WidenedIn9 => 1,
        }
    }

    /// Column width for applications using Unicode 9 or later.
    pub const fn width_unicode_9_or_later(self) -> u8 {
        match self {
            WcWidth::WidenedIn9 => 2,
            _ => self.width_unicode_8_or_earlier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WcWidth; 9] = [
        WcWidth::One,
        WcWidth::Two,
        WcWidth::NonPrint,
        WcWidth::Combining,
        WcWidth::Ambiguous,
        WcWidth::PrivateUse,
        WcWidth::Unassigned,
        WcWidth::WidenedIn9,
        WcWidth::NonCharacter,
    ];

    #[test]
    fn basics() {
        assert_eq!(WcWidth::from_char('w'), WcWidth::One);
        assert_eq!(WcWidth::from_char('\x1f'), WcWidth::NonPrint);
        assert_eq!(WcWidth::from_char('\u{e001}'), WcWidth::PrivateUse);
        assert_eq!(WcWidth::from_char('\u{2716}'), WcWidth::One);
        assert_eq!(WcWidth::from_char('\u{270a}'), WcWidth::WidenedIn9);
        assert_eq!(WcWidth::from_char('\u{3fffd}'), WcWidth::Two);
    }

    #[test]
    fn codes() {
        for width in ALL {
            assert_eq!(WcWidth::from_code(width.code()), Some(width));
        }
        assert_eq!(WcWidth::from_code(0), None);
        assert_eq!(WcWidth::from_code(3), None);
        assert_eq!(WcWidth::from_code(-8), None);
    }

    #[test]
    fn unicode_9_only_widens_emoji() {
        for width in ALL {
            let before = width.width_unicode_8_or_earlier();
            let after = width.width_unicode_9_or_later();
            if width == WcWidth::WidenedIn9 {
                assert_eq!((before, after), (1, 2));
            } else {
                assert_eq!(before, after, "{:?}", width);
            }
        }
    }

    #[test]
    fn outside_codespace() {
        assert_eq!(classify(0x110000), WcWidth::One);
        assert_eq!(classify(u32::MAX), WcWidth::One);
    }
}

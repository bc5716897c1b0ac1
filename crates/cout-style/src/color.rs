#![forbid(unsafe_code)]

//! Symbolic foreground colors and their SGR/CSS mappings.

use std::borrow::Cow;

use crate::Intensity;

/// Symbolic ANSI foreground color.
///
/// Each color carries a numeric SGR code digit (the final digit of the escape
/// parameter), a lowercase name for case-insensitive lookup, and the CSS
/// declaration used by the HTML converter. Code 8 is an unassigned gap in the
/// SGR table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Black (code 0).
    Black,
    /// Red (code 1).
    Red,
    /// Green (code 2).
    Green,
    /// Yellow (code 3).
    Yellow,
    /// Blue (code 4).
    Blue,
    /// Magenta (code 5).
    Magenta,
    /// Cyan (code 6).
    Cyan,
    /// White (code 7).
    White,
    /// Terminal default foreground (code 9).
    #[default]
    Default,
}

impl Color {
    /// Every defined color, in code order (code 8 is a gap).
    pub const ALL: [Self; 9] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Default,
    ];

    /// SGR code digit for this color.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
            Self::Default => 9,
        }
    }

    /// Lowercase lookup name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Default => "default",
        }
    }

    /// CSS declaration emitted by the HTML converter, `None` for
    /// [`Color::Default`].
    ///
    /// Green maps to the CSS name `lightgreen`, matching the terminal
    /// rendition this table was calibrated against.
    #[must_use]
    pub const fn css(self) -> Option<&'static str> {
        match self {
            Self::Black => Some("color:black"),
            Self::Red => Some("color:red"),
            Self::Green => Some("color:lightgreen"),
            Self::Yellow => Some("color:yellow"),
            Self::Blue => Some("color:blue"),
            Self::Magenta => Some("color:magenta"),
            Self::Cyan => Some("color:cyan"),
            Self::White => Some("color:white"),
            Self::Default => None,
        }
    }

    /// Look up a color by SGR code digit, returning `None` for the code 8
    /// gap and anything past the table.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            9 => Some(Self::Default),
            _ => None,
        }
    }

    /// Look up a color by name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// Wrap `text` in this color's escape sequence with default intensity.
    ///
    /// [`Color::Default`] returns `text` unchanged.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        crate::apply(text, Intensity::Default, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_for_every_color() {
        for color in Color::ALL {
            assert_eq!(Color::from_code(color.code()), Some(color));
        }
    }

    #[test]
    fn code_eight_is_a_gap() {
        assert_eq!(Color::from_code(8), None);
    }

    #[test]
    fn codes_past_the_table_miss() {
        assert_eq!(Color::from_code(10), None);
        assert_eq!(Color::from_code(255), None);
    }

    #[test]
    fn name_round_trips_for_every_color() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn name_lookup_ignores_case() {
        assert_eq!(Color::from_name("RED"), Some(Color::Red));
        assert_eq!(Color::from_name("Magenta"), Some(Color::Magenta));
        assert_eq!(Color::from_name("dEfAuLt"), Some(Color::Default));
    }

    #[test]
    fn name_lookup_misses_unknown() {
        assert_eq!(Color::from_name("chartreuse"), None);
        assert_eq!(Color::from_name(""), None);
    }

    #[test]
    fn green_css_is_lightgreen() {
        assert_eq!(Color::Green.css(), Some("color:lightgreen"));
    }

    #[test]
    fn default_has_no_css() {
        assert_eq!(Color::Default.css(), None);
    }

    #[test]
    fn every_color_except_default_has_css() {
        for color in Color::ALL {
            assert_eq!(color.css().is_none(), color == Color::Default);
        }
    }

    #[test]
    fn default_is_the_default() {
        assert_eq!(Color::default(), Color::Default);
    }
}

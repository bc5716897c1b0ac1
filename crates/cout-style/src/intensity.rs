#![forbid(unsafe_code)]

//! Font intensity/decoration attributes and their SGR/CSS mappings.

use std::borrow::Cow;

use crate::Color;

/// Symbolic SGR intensity.
///
/// Each intensity encodes as a `(strength, group)` parameter pair: the
/// strength is the leading SGR digit, the group selects the standard (3) or
/// bright (9) color range. [`Intensity::Intense`] is the bright-range
/// rendition of default strength; the rest live in the standard range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    /// Normal rendition (0, 3).
    #[default]
    Default,
    /// Bold (1, 3).
    Bold,
    /// Faint (2, 3).
    Faint,
    /// Italic (3, 3).
    Italic,
    /// Underline (4, 3).
    Underline,
    /// Bright color range (0, 9).
    Intense,
}

impl Intensity {
    /// Every defined intensity.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Bold,
        Self::Faint,
        Self::Italic,
        Self::Underline,
        Self::Intense,
    ];

    /// Leading SGR digit.
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Default | Self::Intense => 0,
            Self::Bold => 1,
            Self::Faint => 2,
            Self::Italic => 3,
            Self::Underline => 4,
        }
    }

    /// Color-range group digit (3 standard, 9 bright).
    #[must_use]
    pub const fn group(self) -> u8 {
        match self {
            Self::Intense => 9,
            _ => 3,
        }
    }

    /// Lowercase lookup name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bold => "bold",
            Self::Faint => "faint",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Intense => "intense",
        }
    }

    /// CSS declaration emitted by the HTML converter, `None` for
    /// [`Intensity::Default`].
    #[must_use]
    pub const fn css(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Bold => Some("font-weight:bolder"),
            Self::Faint => Some("font-weight:light"),
            Self::Italic => Some("font-weight:italic"),
            Self::Underline => Some("text-decoration:underline"),
            Self::Intense => Some("font-weight:bold"),
        }
    }

    /// Look up an intensity by its `(strength, group)` parameter pair.
    #[must_use]
    pub const fn from_code(strength: u8, group: u8) -> Option<Self> {
        match (strength, group) {
            (0, 3) => Some(Self::Default),
            (1, 3) => Some(Self::Bold),
            (2, 3) => Some(Self::Faint),
            (3, 3) => Some(Self::Italic),
            (4, 3) => Some(Self::Underline),
            (0, 9) => Some(Self::Intense),
            _ => None,
        }
    }

    /// Look up an intensity by name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|intensity| intensity.name().eq_ignore_ascii_case(name))
    }

    /// Wrap `text` in this intensity's escape sequence with default color.
    ///
    /// [`Intensity::Default`] returns `text` unchanged.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        crate::apply(text, self, Color::Default)
    }
}

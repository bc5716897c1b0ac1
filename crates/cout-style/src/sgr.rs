#![forbid(unsafe_code)]

//! SGR escape encoding for [`Color`]/[`Intensity`] pairs.
//!
//! The codec speaks one fixed sequence shape in both directions:
//!
//! | Sequence | Meaning |
//! |----------------------------------------|----------------------------------|
//! | `ESC [ <strength> ; <group><color> m`  | open a styled run                |
//! | `ESC [ 0 ; 3 9 m`                      | reset (default strength + color) |
//!
//! `strength` and `group` come from [`Intensity`], the trailing digit from
//! [`Color`]. The reset is itself a valid styled-run sequence whose decoded
//! pair is (default, default); concatenated [`apply`] outputs therefore stay
//! parseable with no state carried between runs.

use std::borrow::Cow;

use crate::{Color, Intensity};

/// Escape introducer.
pub const ESC: char = '\u{1b}';

/// Style reset sequence: default intensity, default color.
pub const RESET: &str = "\u{1b}[0;39m";

/// Wrap `text` in the escape sequence for `(intensity, color)` plus a
/// trailing [`RESET`].
///
/// When both attributes are default the input is returned borrowed and
/// unchanged; a single non-default attribute still produces a full
/// open/reset pair.
///
/// # Example
///
/// ```
/// use cout_style::{Color, Intensity, apply};
///
/// let styled = apply("alert", Intensity::Bold, Color::Red);
/// assert_eq!(styled, "\u{1b}[1;31malert\u{1b}[0;39m");
/// assert_eq!(apply("plain", Intensity::Default, Color::Default), "plain");
/// ```
#[must_use]
pub fn apply<'a>(text: &'a str, intensity: Intensity, color: Color) -> Cow<'a, str> {
    if intensity == Intensity::Default && color == Color::Default {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    out.push(ESC);
    out.push('[');
    out.push(digit(intensity.strength()));
    out.push(';');
    out.push(digit(intensity.group()));
    out.push(digit(color.code()));
    out.push('m');
    out.push_str(text);
    out.push_str(RESET);
    Cow::Owned(out)
}

const fn digit(value: u8) -> char {
    (b'0' + value) as char
}

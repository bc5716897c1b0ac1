#![forbid(unsafe_code)]

//! Conversion of SGR-styled text to HTML `<span>` fragments.

use crate::{Color, ESC, Intensity};

/// Length in bytes of the escape payload after `ESC`: `[ d ; d d m`.
const SGR_PAYLOAD: usize = 6;

/// Convert SGR-styled `text` to HTML.
///
/// Non-escape characters are copied verbatim. A decoded (default, default)
/// pair closes the open span, if any; any other pair opens a new span
/// (closing the previous one first) whose `style` holds the CSS declarations
/// of the non-default attributes. A span left open at end of input is
/// closed, so any prefix of codec-produced text converts to well-formed
/// markup.
///
/// Escape shapes this codec does not produce are not decoded: the
/// introducer is dropped and scanning resumes at the following character.
///
/// # Example
///
/// ```
/// use cout_style::{Color, Intensity, apply, to_html};
///
/// let styled = apply("alert", Intensity::Bold, Color::Red);
/// assert_eq!(
///     to_html(&styled),
///     "<span style=\"font-weight:bolder;color:red;\">alert</span>"
/// );
/// ```
#[must_use]
pub fn to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut open = false;
    let mut rest = text;
    while let Some(pos) = rest.find(ESC) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];
        if let Some((intensity, color)) = decode_sgr(rest) {
            rest = &rest[SGR_PAYLOAD..];
            transition(&mut out, &mut open, intensity, color);
        }
    }
    out.push_str(rest);
    if open {
        out.push_str("</span>");
    }
    out
}

/// Decode the `[ d ; d d m` payload directly after an `ESC`.
fn decode_sgr(s: &str) -> Option<(Intensity, Color)> {
    let b = s.as_bytes();
    if b.len() < SGR_PAYLOAD || b[0] != b'[' || b[2] != b';' || b[5] != b'm' {
        return None;
    }
    let strength = digit(b[1])?;
    let group = digit(b[3])?;
    let color = digit(b[4])?;
    Some((
        Intensity::from_code(strength, group)?,
        Color::from_code(color)?,
    ))
}

const fn digit(b: u8) -> Option<u8> {
    if b.is_ascii_digit() { Some(b - b'0') } else { None }
}

fn transition(out: &mut String, open: &mut bool, intensity: Intensity, color: Color) {
    if intensity == Intensity::Default && color == Color::Default {
        if *open {
            out.push_str("</span>");
            *open = false;
        }
        return;
    }
    if *open {
        out.push_str("</span>");
    }
    out.push_str("<span style=\"");
    if let Some(css) = intensity.css() {
        out.push_str(css);
        out.push(';');
    }
    if let Some(css) = color.css() {
        out.push_str(css);
        out.push(';');
    }
    out.push_str("\">");
    *open = true;
}

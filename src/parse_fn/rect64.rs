use crate::structs::Rectangle;

const PREFIX: &str = "rect64(";
const TOKEN_LEN: usize = 24;

/// Decodes a `rect64(<16 hex digits>)` token.
///
/// The payload packs left, top, right and bottom as big-endian `u16`s, each
/// scaled by `u16::MAX`. Tokens that are not exactly 24 characters, or whose
/// payload is not hex, yield `None`.
pub fn decode_rectangle(token: &str) -> Option<Rectangle> {
    if token.len() != TOKEN_LEN {
        return None;
    }
    let payload = token.strip_prefix(PREFIX)?.strip_suffix(')')?;

    let edge = |i: usize| -> Option<f64> {
        let hex = payload.get(i * 4..i * 4 + 4)?;
        let value = u16::from_str_radix(hex, 16).ok()?;
        Some(f64::from(value) / f64::from(u16::MAX))
    };

    Some(Rectangle {
        left: edge(0)?,
        top: edge(1)?,
        right: edge(2)?,
        bottom: edge(3)?,
    })
}

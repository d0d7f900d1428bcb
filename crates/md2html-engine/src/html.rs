//! HTML escaping for converter output.
//!
//! Literal characters only ever have `&`, `<` and `>` replaced. Anchor
//! fields additionally escape quotes because they are interpolated into a
//! double-quoted `href` value.

/// Appends `ch` to `out`, replacing `&`, `<` and `>` with their entities.
pub fn push_text_char(out: &mut String, ch: char) {
    let mut buf = [0u8; 4];
    html_escape::encode_text_to_string(ch.encode_utf8(&mut buf), out);
}

/// Appends `chars` to `out`, escaped for use inside a quoted attribute.
pub fn push_attribute(out: &mut String, chars: &[char]) {
    let raw: String = chars.iter().collect();
    html_escape::encode_quoted_attribute_to_string(raw, out);
}

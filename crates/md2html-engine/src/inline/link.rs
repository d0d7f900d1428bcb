use super::{cursor::Cursor, kinds::Link};

/// A recognised `[text](url)` at the cursor.
#[derive(Debug, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    /// Characters between `[` and `]`.
    pub text: &'a [char],
    /// Characters between `(` and `)`.
    pub url: &'a [char],
    /// Number of characters from `[` through the closing `)` inclusive.
    pub len: usize,
}

/// Attempts to recognise a link starting at the current position.
///
/// Takes the first `]` after the `[`, requires `(` immediately after it,
/// then takes the first `)`. The URL must contain one of
/// [`Link::URL_HINTS`] so that plain bracketed text followed by a
/// parenthetical is not turned into an anchor.
///
/// The cursor is never moved; the caller advances by [`LinkMatch::len`] on
/// success.
pub fn try_parse_link<'a>(cur: &Cursor<'a>) -> Option<LinkMatch<'a>> {
    let rest = cur.rest();
    if rest.first() != Some(&Link::OPEN) {
        return None;
    }

    let text_end = 1 + rest[1..].iter().position(|&c| c == Link::TEXT_CLOSE)?;
    if rest.get(text_end + 1) != Some(&Link::URL_OPEN) {
        return None;
    }

    let url_start = text_end + 2;
    let url_len = rest
        .get(url_start..)?
        .iter()
        .position(|&c| c == Link::URL_CLOSE)?;
    let url = &rest[url_start..url_start + url_len];

    if !url.iter().any(|c| Link::URL_HINTS.contains(c)) {
        return None;
    }

    Some(LinkMatch {
        text: &rest[1..text_end],
        url,
        len: url_start + url_len + 1,
    })
}

use std::num::NonZeroUsize;

use crate::{inline::convert, split::split_message};

/// Turns plain reply text into HTML fragments ready to send.
///
/// With a limit, the text is split first and each part converted on its
/// own, so markup left open at a split point is closed within that part.
pub fn render_reply(content: &str, max_len: Option<NonZeroUsize>) -> Vec<String> {
    match max_len {
        Some(max_len) => split_message(content, max_len)
            .iter()
            .map(String::as_str)
            .map(convert)
            .collect(),
        None => vec![convert(content)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn without_limit_converts_whole_text() {
        assert_eq!(render_reply("**hi** there", None), vec!["<b>hi</b> there"]);
    }

    #[test]
    fn each_part_is_balanced() {
        let parts = render_reply("**abcd**", NonZeroUsize::new(4));
        assert_eq!(parts, vec!["<b>ab</b>", "cd<b></b>"]);
    }

    #[test]
    fn short_text_is_one_fragment() {
        assert_eq!(
            render_reply("a < b", NonZeroUsize::new(4096)),
            vec!["a &lt; b"]
        );
    }
}

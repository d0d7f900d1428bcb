use crate::html;

use super::{
    cursor::Cursor,
    kinds::{CodeFence, CodeSpan, Emphasis, Escape, Link, Strong},
    link::try_parse_link,
    tag::Tag,
};

/// Converts chat Markdown to an HTML fragment.
///
/// Total: malformed syntax degrades to escaped literal text, and every tag
/// opened is closed before returning.
pub fn convert(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    Converter::new(&chars).convert()
}

/// State for one conversion: cursor, open-tag stack and output buffer.
///
/// Created per input and consumed by [`Converter::convert`].
pub struct Converter<'a> {
    cur: Cursor<'a>,
    stack: Vec<Tag>,
    out: String,
}

impl<'a> Converter<'a> {
    pub fn new(input: &'a [char]) -> Self {
        Self {
            cur: Cursor::new(input),
            stack: Vec::new(),
            out: String::with_capacity(input.len() * 2),
        }
    }

    /// Runs the dispatch loop to end of input and returns the HTML.
    pub fn convert(mut self) -> String {
        while let Some(c) = self.cur.peek() {
            match c {
                Escape::BACKSLASH => self.escape_sequence(),
                Emphasis::STAR => self.star(),
                CodeSpan::TICK => self.backtick(),
                Link::OPEN => self.link(),
                _ => {
                    html::push_text_char(&mut self.out, c);
                    self.cur.bump();
                }
            }
        }
        self.finish()
    }

    fn escape_sequence(&mut self) {
        match self.cur.peek_at(1) {
            Some(next) => {
                html::push_text_char(&mut self.out, next);
                self.cur.bump_n(2);
            }
            None => {
                html::push_text_char(&mut self.out, Escape::BACKSLASH);
                self.cur.bump();
            }
        }
    }

    fn star(&mut self) {
        if self.cur.starts_with(Strong::DELIM) {
            self.toggle(Strong::TAG);
            self.cur.bump_n(Strong::DELIM.len());
        } else {
            self.toggle(Emphasis::TAG);
            self.cur.bump();
        }
    }

    fn backtick(&mut self) {
        if self.cur.starts_with(CodeFence::DELIM) {
            let opened = self.toggle(CodeFence::TAG);
            self.cur.bump_n(CodeFence::DELIM.len());
            if opened {
                self.skip_fence_lang();
            }
        } else {
            self.toggle(CodeSpan::TAG);
            self.cur.bump();
        }
    }

    /// Language annotation after an opening fence.
    ///
    /// Consumes nothing: `rust` in ```` ```rust ```` stays in the `<pre>` body.
    // TODO: strip the annotation up to end of line once renderers accept
    // `<pre><code class="language-..">`.
    fn skip_fence_lang(&mut self) {}

    fn link(&mut self) {
        match try_parse_link(&self.cur) {
            Some(m) => {
                self.out.push_str("<a href=\"");
                html::push_attribute(&mut self.out, m.url);
                self.out.push_str("\">");
                html::push_attribute(&mut self.out, m.text);
                self.out.push_str("</a>");
                self.cur.bump_n(m.len);
            }
            None => {
                log::trace!("no link at char {}, emitting literal '['", self.cur.pos());
                html::push_text_char(&mut self.out, Link::OPEN);
                self.cur.bump();
            }
        }
    }

    /// Closes `tag` if it is the innermost open tag, otherwise opens it.
    ///
    /// Only the top of the stack is consulted: a matching tag buried under a
    /// different one is not closed, a new one is nested instead. Returns
    /// true when the tag was opened.
    fn toggle(&mut self, tag: Tag) -> bool {
        if self.stack.last() == Some(&tag) {
            self.stack.pop();
            self.out.push_str(tag.close());
            false
        } else {
            self.stack.push(tag);
            self.out.push_str(tag.open());
            true
        }
    }

    fn finish(mut self) -> String {
        while let Some(tag) = self.stack.pop() {
            self.out.push_str(tag.close());
        }
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("hello world", "hello world")]
    #[case("a < b && c > d", "a &lt; b &amp;&amp; c &gt; d")]
    #[case("say \"hi\" ']'", "say \"hi\" ']'")]
    #[case("héllo 世界 <😀>", "héllo 世界 &lt;😀&gt;")]
    #[case("line\nbreak\ttab", "line\nbreak\ttab")]
    fn literal_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert(input), expected);
    }

    #[rstest]
    #[case("\\*text\\*", "*text*")]
    #[case("\\`code\\`", "`code`")]
    #[case("\\[a](b.c)", "[a](b.c)")]
    #[case("a\\\\b", "a\\b")]
    #[case("\\<tag\\>", "&lt;tag&gt;")]
    #[case("\\é", "é")]
    #[case("trailing\\", "trailing\\")]
    #[case("\\", "\\")]
    #[case("\\**x**", "*<i>x<b></b></i>")]
    fn escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert(input), expected);
    }

    #[rstest]
    #[case("*hello*", "<i>hello</i>")]
    #[case("**hello**", "<b>hello</b>")]
    #[case("`x`", "<code>x</code>")]
    #[case("```x```", "<pre>x</pre>")]
    #[case("*a* and *b*", "<i>a</i> and <i>b</i>")]
    #[case("``x``", "<code></code>x<code></code>")]
    #[case("****", "<b></b>")]
    fn simple_toggles(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert(input), expected);
    }

    #[rstest]
    #[case("*hello", "<i>hello</i>")]
    #[case("**hello", "<b>hello</b>")]
    #[case("`code", "<code>code</code>")]
    #[case("```\ncode", "<pre>\ncode</pre>")]
    #[case("````", "<pre><code></code></pre>")]
    #[case("*a **b", "<i>a <b>b</b></i>")]
    fn unterminated_tags_are_closed_innermost_first(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(convert(input), expected);
    }

    #[rstest]
    #[case("*a**b**c*", "<i>a<b>b</b>c</i>")]
    #[case("**a *b* c**", "<b>a <i>b</i> c</b>")]
    #[case("*`x`*", "<i><code>x</code></i>")]
    #[case("**see [doc](a.b)**", "<b>see <a href=\"a.b\">doc</a></b>")]
    fn nesting(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert(input), expected);
    }

    #[rstest]
    #[case("**a*b**c*", "<b>a<i>b<b>c<i></i></b></i></b>")]
    #[case("```a`b```", "<pre>a<code>b<pre></pre></code></pre>")]
    #[case("*a`b*c`", "<i>a<code>b<i>c<code></code></i></code></i>")]
    fn delimiter_only_closes_innermost_tag(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert(input), expected);
    }

    #[test]
    fn fence_language_annotation_is_kept() {
        assert_eq!(
            convert("```rust\nfn main() {}\n```"),
            "<pre>rust\nfn main() {}\n</pre>"
        );
    }

    #[test]
    fn markup_inside_code_is_still_converted() {
        assert_eq!(convert("`a*b*c`"), "<code>a<i>b</i>c</code>");
    }

    #[rstest]
    #[case(
        "[site](https://example.com)",
        "<a href=\"https://example.com\">site</a>"
    )]
    #[case("[a](b c)", "<a href=\"b c\">a</a>")]
    #[case(
        "[a <b>](http://x.y/?q=1&r=2)",
        "<a href=\"http://x.y/?q=1&amp;r=2\">a &lt;b&gt;</a>"
    )]
    #[case("[q](http://x/\"y\")", "<a href=\"http://x/&quot;y&quot;\">q</a>")]
    #[case("[*a*](x.y)", "<a href=\"x.y\">*a*</a>")]
    #[case("[[a](b.c)", "<a href=\"b.c\">[a</a>")]
    #[case("go [here](a.b)!", "go <a href=\"a.b\">here</a>!")]
    fn links(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert(input), expected);
    }

    #[rstest]
    #[case("[nolink]", "[nolink]")]
    #[case("[a](b)", "[a](b)")]
    #[case("[a](http://x", "[a](http://x")]
    #[case("[unclosed", "[unclosed")]
    #[case("[<x>", "[&lt;x&gt;")]
    #[case("[*a*]", "[<i>a</i>]")]
    #[case("[[x]", "[[x]")]
    fn link_failure_falls_back_to_literal(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert(input), expected);
    }

    #[test]
    fn failed_link_retries_at_next_bracket() {
        assert_eq!(convert("[x] [y](z.w)"), "[x] <a href=\"z.w\">y</a>");
    }

    #[test]
    fn converter_from_chars() {
        let input: Vec<char> = "**b**".chars().collect();
        assert_eq!(Converter::new(&input).convert(), "<b>b</b>");
    }

    #[test]
    fn conversions_are_independent_across_threads() {
        let inputs = ["*a", "**b", "`c", "[d](e.f)"];
        let expected = [
            "<i>a</i>",
            "<b>b</b>",
            "<code>c</code>",
            "<a href=\"e.f\">d</a>",
        ];
        std::thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| s.spawn(move || convert(input)))
                .collect();
            for (handle, want) in handles.into_iter().zip(expected) {
                assert_eq!(handle.join().unwrap(), want);
            }
        });
    }
}

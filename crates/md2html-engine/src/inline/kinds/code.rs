use crate::inline::Tag;

/// Inline code delimited by single backticks, rendered as `<code>`.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: char = '`';
    pub const TAG: Tag = Tag::Code;
}

/// Fenced code delimited by three backticks, rendered as `<pre>`.
///
/// Three contiguous backticks always win over three code span toggles.
pub struct CodeFence;

impl CodeFence {
    pub const DELIM: &'static [char] = &[CodeSpan::TICK, CodeSpan::TICK, CodeSpan::TICK];
    pub const TAG: Tag = Tag::Pre;
}

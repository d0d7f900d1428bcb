use crate::inline::Tag;

/// Single-star emphasis, rendered as `<i>`.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: char = '*';
    pub const TAG: Tag = Tag::Italic;
}

/// Double-star strong emphasis, rendered as `<b>`.
///
/// Shares its leading character with [`Emphasis`]; the longer delimiter is
/// checked first.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [char] = &[Emphasis::STAR, Emphasis::STAR];
    pub const TAG: Tag = Tag::Bold;
}

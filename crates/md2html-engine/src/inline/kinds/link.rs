/// Inline link `[text](url)` delimiters.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';
    pub const TEXT_CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';
    /// A URL must contain at least one of these to be taken as a link.
    pub const URL_HINTS: &'static [char] = &[':', '.', '/', ')', ' '];
}

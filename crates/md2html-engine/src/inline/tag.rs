/// An HTML element that a toggle delimiter can open or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Bold,
    Italic,
    Code,
    Pre,
}

impl Tag {
    /// The opening tag as emitted.
    pub const fn open(self) -> &'static str {
        match self {
            Tag::Bold => "<b>",
            Tag::Italic => "<i>",
            Tag::Code => "<code>",
            Tag::Pre => "<pre>",
        }
    }

    /// The closing tag as emitted.
    pub const fn close(self) -> &'static str {
        match self {
            Tag::Bold => "</b>",
            Tag::Italic => "</i>",
            Tag::Code => "</code>",
            Tag::Pre => "</pre>",
        }
    }
}

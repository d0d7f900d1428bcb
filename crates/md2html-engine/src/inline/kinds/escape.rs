/// Backslash escape: the following character is emitted literally.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: char = '\\';
}

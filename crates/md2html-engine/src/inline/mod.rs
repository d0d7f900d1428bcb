//! # Inline Conversion
//!
//! Single-pass, cursor-based conversion of chat Markdown into HTML. No
//! intermediate tree is built: each character is dispatched as it is
//! reached and output is appended straight to the result buffer.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` over the input characters with bounded lookahead
//! - **`kinds`**: per-construct types owning their delimiters and tags
//! - **`tag`**: `Tag` enum for the four toggleable HTML elements
//! - **`link`**: `[text](url)` recognition as a side-effect-free lookahead
//! - **`converter`**: `Converter` state and the `convert()` entry point
//!
//! ## Toggle Semantics
//!
//! Every delimiter toggles its tag by looking only at the top of the open-tag
//! stack. `**a*b**` therefore opens a second `<b>` inside the `<i>` instead
//! of closing the outer one; all tags still open at end of input are closed
//! innermost first.

pub mod converter;
pub mod cursor;
pub mod kinds;
pub mod link;
pub mod tag;

pub use converter::{Converter, convert};
pub use tag::Tag;

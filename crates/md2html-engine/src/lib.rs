//! # md2html engine
//!
//! Converts the small Markdown dialect used in chat replies (bold, italic,
//! inline code, fenced code, links, backslash escapes) into the restricted
//! HTML subset accepted by chat renderers.
//!
//! - **`inline`**: the single-pass [`Converter`] and its delimiter kinds
//! - **`html`**: entity escaping for literal text and anchor attributes
//! - **`split`**: length-limited splitting of outgoing message text
//! - **`reply`**: split + convert pipeline producing ready-to-send fragments

pub mod html;
pub mod inline;
pub mod reply;
pub mod split;

pub use inline::{Converter, Tag, convert};
pub use reply::render_reply;
pub use split::split_message;

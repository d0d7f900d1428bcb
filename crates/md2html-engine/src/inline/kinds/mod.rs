//! # Inline Kinds
//!
//! Types that own the delimiters of each inline construct, and the tag a
//! toggle delimiter maps to.
//!
//! ## Types
//!
//! - **`Emphasis`** / **`Strong`**: `*` and `**`, toggling `<i>` and `<b>`
//! - **`CodeSpan`** / **`CodeFence`**: `` ` `` and ```` ``` ````, toggling `<code>` and `<pre>`
//! - **`Link`**: `[text](url)` brackets and the URL sanity characters
//! - **`Escape`**: the backslash that makes the next character literal
//!
//! The converter reads these constants; it never hardcodes `*` or `[`.

pub mod code;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use code::{CodeFence, CodeSpan};
pub use emphasis::{Emphasis, Strong};
pub use escape::Escape;
pub use link::Link;

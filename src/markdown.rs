//! Restricted markdown-subset rendering for article bodies.
//!
//! Article content follows a deliberately small convention:
//! blank-line-separated segments classified as headings, unordered lists,
//! ordered lists, or paragraphs. This is an internal content convention,
//! not a general markdown grammar.

mod blocks;
mod renderer;

pub use blocks::{Block, parse_blocks};
pub use renderer::article_body;

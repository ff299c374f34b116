//! Text renderers for the terminal output of both tools.
//!
//! Renderers are pure: a report goes in, the exact stdout text comes out.

#![forbid(unsafe_code)]

mod a11y;
mod advice;

pub use a11y::render_a11y_text;
pub use advice::render_advice_text;

/// Horizontal rule shared by both banners.
pub const SEPARATOR: &str = "==================================================";

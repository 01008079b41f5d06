//! File name sanitization and composition.

mod builder;
mod sanitize;

pub use builder::{build_name, MAX_BASE_BYTES, PDF_EXTENSION};
pub use sanitize::{sanitize, SlashStyle, FULL_WIDTH_SLASH};

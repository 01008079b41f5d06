//! Data models for the renaming pipeline.

pub mod config;
pub mod document;

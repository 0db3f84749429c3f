//! Markup conversion capability.
//!
//! The loader treats conversion as a black box behind the narrow
//! [`MarkupConverter`] trait, so any compliant markup-to-HTML converter can
//! be substituted without touching the loading pipeline. The default
//! implementation is [`CommonMarkConverter`], backed by pulldown-cmark.
//!
//! # Example
//!
//! ```
//! use mdpane::convert::{CommonMarkConverter, MarkupConverter};
//!
//! let converter = CommonMarkConverter::new();
//! let html = converter.convert("# Title").unwrap();
//! assert_eq!(html, "<h1>Title</h1>\n");
//! ```

mod commonmark;

pub use commonmark::{CommonMarkConverter, CommonMarkOptions};

use crate::error::Result;

/// Trait for markup-to-HTML converters.
///
/// Implementations must be pure with respect to the surface: conversion
/// produces a complete HTML string and performs no writes of its own.
/// A converter that cannot handle its input reports the failure through
/// `Result` rather than emitting partial output.
pub trait MarkupConverter: Send + Sync {
    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert a markup string into an HTML string.
    fn convert(&self, text: &str) -> Result<String>;
}

//! # mdpane
//!
//! Fetch Markdown documents and render them as HTML into an output surface.
//!
//! mdpane retrieves a text document — over HTTP(S) or from a local file —
//! converts it to HTML through a pluggable conversion capability, and
//! writes the result into a designated output surface. Failures are
//! reported through a diagnostic channel and never touch the surface.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdpane::{DocumentLoader, DocumentSource, MemorySurface};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> mdpane::Result<()> {
//!     let source = DocumentSource::parse("https://example.com/README.md")?;
//!     let mut surface = MemorySurface::new();
//!
//!     DocumentLoader::new().load(&source, &mut surface).await?;
//!     println!("{}", surface.contents());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - The surface is mutated at most once per load, and only on success.
//! - Conversion completes before the write, so the surface never shows a
//!   partial render.
//! - Every failed load emits exactly one diagnostic; successful loads emit
//!   none.
//! - No retries, no caching, no sanitization of the converter's output.

pub mod convert;
pub mod diag;
pub mod error;
pub mod loader;
pub mod source;
pub mod surface;

// Re-export commonly used types
pub use convert::{CommonMarkConverter, CommonMarkOptions, MarkupConverter};
pub use diag::{DiagnosticSink, LogSink};
pub use error::{Error, Result};
pub use loader::{DocumentLoader, LoadOptions, LoadReport};
pub use source::{DocumentSource, StatusPolicy};
pub use surface::{FileSurface, MemorySurface, OutputSurface, SurfaceRegistry};

use std::sync::Arc;

/// Retrieve a document body as text, without conversion.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> mdpane::Result<()> {
/// let text = mdpane::fetch_text("https://example.com/README.md").await?;
/// # Ok(())
/// # }
/// ```
pub async fn fetch_text(reference: &str) -> Result<String> {
    let source = DocumentSource::parse(reference)?;
    DocumentLoader::new().fetch(&source).await
}

/// Retrieve a document and convert it to HTML, without a surface.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> mdpane::Result<()> {
/// let html = mdpane::render_html("docs/README.md").await?;
/// println!("{}", html);
/// # Ok(())
/// # }
/// ```
pub async fn render_html(reference: &str) -> Result<String> {
    let source = DocumentSource::parse(reference)?;
    DocumentLoader::new().render(&source).await
}

/// Load a document into the given surface using a default loader.
pub async fn load(reference: &str, surface: &mut dyn OutputSurface) -> Result<LoadReport> {
    let source = DocumentSource::parse(reference)?;
    DocumentLoader::new().load(&source, surface).await
}

/// Load a document into the surface registered under `surface_id`.
pub async fn load_into(
    reference: &str,
    registry: &mut SurfaceRegistry,
    surface_id: &str,
) -> Result<LoadReport> {
    let source = DocumentSource::parse(reference)?;
    DocumentLoader::new()
        .load_by_id(&source, registry, surface_id)
        .await
}

/// Builder for configuring and running document loads.
///
/// # Example
///
/// ```no_run
/// use mdpane::{Mdpane, MemorySurface};
///
/// # async fn run() -> mdpane::Result<()> {
/// let mut surface = MemorySurface::new();
/// Mdpane::new()
///     .strict_status()
///     .plain_commonmark()
///     .load("https://example.com/README.md", &mut surface)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct Mdpane {
    converter_options: CommonMarkOptions,
    load_options: LoadOptions,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl Mdpane {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            converter_options: CommonMarkOptions::default(),
            load_options: LoadOptions::default(),
            diagnostics: None,
        }
    }

    /// Treat non-2xx HTTP statuses as retrieval failures.
    pub fn strict_status(mut self) -> Self {
        self.load_options = self
            .load_options
            .with_status_policy(StatusPolicy::Strict);
        self
    }

    /// Disable all Markdown extensions.
    pub fn plain_commonmark(mut self) -> Self {
        self.converter_options = CommonMarkOptions::plain();
        self
    }

    /// Set converter options.
    pub fn with_converter_options(mut self, options: CommonMarkOptions) -> Self {
        self.converter_options = options;
        self
    }

    /// Set the diagnostic sink.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Build the configured loader.
    pub fn build(self) -> DocumentLoader {
        let mut loader = DocumentLoader::new()
            .with_converter(Arc::new(CommonMarkConverter::with_options(
                self.converter_options,
            )))
            .with_options(self.load_options);
        if let Some(sink) = self.diagnostics {
            loader = loader.with_diagnostics(sink);
        }
        loader
    }

    /// Build the loader and load one document into the given surface.
    pub async fn load(
        self,
        reference: &str,
        surface: &mut dyn OutputSurface,
    ) -> Result<LoadReport> {
        let source = DocumentSource::parse(reference)?;
        self.build().load(&source, surface).await
    }
}

impl Default for Mdpane {
    fn default() -> Self {
        Self::new()
    }
}

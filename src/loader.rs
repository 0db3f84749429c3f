//! The document loading pipeline.
//!
//! [`DocumentLoader`] ties the pieces together: retrieve the document body,
//! convert it to HTML, and write the result into an output surface. The
//! pipeline is a single linear async flow with one branch — on any failure
//! the error is reported once through the diagnostic sink and the surface
//! is left untouched.

use crate::convert::{CommonMarkConverter, MarkupConverter};
use crate::diag::{DiagnosticSink, LogSink};
use crate::error::Result;
use crate::source::{DocumentSource, StatusPolicy};
use crate::surface::{OutputSurface, SurfaceRegistry};
use serde::Serialize;
use std::sync::Arc;

/// Options for a document load.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// How to treat non-success HTTP statuses.
    pub status_policy: StatusPolicy,
}

impl LoadOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status policy.
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }
}

/// Summary of a successful load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// Description of the loaded source.
    pub source: String,

    /// Size of the fetched body in bytes.
    pub fetched_bytes: usize,

    /// Size of the rendered HTML in bytes.
    pub rendered_bytes: usize,

    /// Name of the converter that produced the HTML.
    pub converter: String,
}

/// Loads documents and renders them into output surfaces.
///
/// A loader holds the HTTP client, the conversion capability, and the
/// diagnostic sink; it carries no per-load state, so one loader can serve
/// any number of sequential loads. Concurrent loads against the same
/// surface resolve in completion order — the loader does not coordinate
/// them.
///
/// # Example
///
/// ```no_run
/// use mdpane::{DocumentLoader, DocumentSource, MemorySurface};
///
/// # async fn run() -> mdpane::Result<()> {
/// let loader = DocumentLoader::new();
/// let source = DocumentSource::parse("https://example.com/README.md")?;
/// let mut surface = MemorySurface::new();
///
/// let report = loader.load(&source, &mut surface).await?;
/// println!("rendered {} bytes", report.rendered_bytes);
/// # Ok(())
/// # }
/// ```
pub struct DocumentLoader {
    client: reqwest::Client,
    converter: Arc<dyn MarkupConverter>,
    diagnostics: Arc<dyn DiagnosticSink>,
    options: LoadOptions,
}

impl DocumentLoader {
    /// Create a loader with the CommonMark converter and log-based
    /// diagnostics.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            converter: Arc::new(CommonMarkConverter::new()),
            diagnostics: Arc::new(LogSink),
            options: LoadOptions::default(),
        }
    }

    /// Replace the conversion capability.
    pub fn with_converter(mut self, converter: Arc<dyn MarkupConverter>) -> Self {
        self.converter = converter;
        self
    }

    /// Replace the diagnostic sink.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Set load options.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the status policy.
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.options.status_policy = policy;
        self
    }

    /// Use a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Name of the configured converter.
    pub fn converter_name(&self) -> &str {
        self.converter.name()
    }

    /// Load a document and render it into the given surface.
    ///
    /// The surface is mutated at most once, and only after conversion has
    /// fully succeeded. On failure the error is reported exactly once
    /// through the diagnostic sink and returned; the surface keeps its
    /// prior contents.
    pub async fn load(
        &self,
        source: &DocumentSource,
        surface: &mut dyn OutputSurface,
    ) -> Result<LoadReport> {
        match self.run(source, surface).await {
            Ok(report) => Ok(report),
            Err(error) => {
                self.diagnostics.report(&source.describe(), &error);
                Err(error)
            }
        }
    }

    /// Load a document into the surface registered under `surface_id`.
    ///
    /// A missing id is reported through the same diagnostic path as any
    /// other failure.
    pub async fn load_by_id(
        &self,
        source: &DocumentSource,
        registry: &mut SurfaceRegistry,
        surface_id: &str,
    ) -> Result<LoadReport> {
        match registry.get_mut(surface_id) {
            Ok(surface) => self.load(source, surface).await,
            Err(error) => {
                self.diagnostics.report(&source.describe(), &error);
                Err(error)
            }
        }
    }

    /// Retrieve a document body without converting it.
    pub async fn fetch(&self, source: &DocumentSource) -> Result<String> {
        source.retrieve(&self.client, self.options.status_policy).await
    }

    /// Retrieve and convert a document without touching any surface.
    pub async fn render(&self, source: &DocumentSource) -> Result<String> {
        let text = self.fetch(source).await?;
        self.converter.convert(&text)
    }

    async fn run(
        &self,
        source: &DocumentSource,
        surface: &mut dyn OutputSurface,
    ) -> Result<LoadReport> {
        let text = source
            .retrieve(&self.client, self.options.status_policy)
            .await?;
        let fetched_bytes = text.len();

        let html = self.converter.convert(&text)?;
        let rendered_bytes = html.len();

        surface.replace(&html)?;
        log::debug!(
            "rendered {} ({} -> {} bytes)",
            source,
            fetched_bytes,
            rendered_bytes
        );

        Ok(LoadReport {
            source: source.describe(),
            fetched_bytes,
            rendered_bytes,
            converter: self.converter.name().to_string(),
        })
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

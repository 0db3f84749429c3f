//! Document source classification and retrieval.
//!
//! A [`DocumentSource`] is the parsed form of a resource reference: either a
//! remote `http`/`https` URL fetched over the network, or a local file path
//! read from disk. Classification happens once, at parse time; retrieval is
//! a single asynchronous read of the full body as text.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

/// How to treat non-success HTTP response statuses.
///
/// The permissive mode reproduces the historical behavior of reading and
/// converting the body regardless of status code, so a 404 error page is
/// rendered like any other document. `Strict` is the recommended mode for
/// new callers; it is opt-in so the behavior change is never silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Read the body regardless of status code.
    #[default]
    Permissive,
    /// Treat any non-2xx status as a retrieval failure.
    Strict,
}

/// A parsed resource reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Remote document fetched over HTTP(S).
    Url(Url),
    /// Local document read from the filesystem.
    Path(PathBuf),
}

impl DocumentSource {
    /// Parse a resource reference string.
    ///
    /// References starting with `http://` or `https://` become
    /// [`DocumentSource::Url`]; everything else is taken as a file path.
    /// Blank references are rejected with [`Error::EmptySource`].
    ///
    /// # Example
    ///
    /// ```
    /// use mdpane::DocumentSource;
    ///
    /// let remote = DocumentSource::parse("https://example.com/README.md").unwrap();
    /// assert!(remote.is_remote());
    ///
    /// let local = DocumentSource::parse("docs/README.md").unwrap();
    /// assert!(!local.is_remote());
    /// ```
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(Error::EmptySource);
        }

        if reference.starts_with("http://") || reference.starts_with("https://") {
            let url = Url::parse(reference)?;
            return Ok(DocumentSource::Url(url));
        }

        Ok(DocumentSource::Path(PathBuf::from(reference)))
    }

    /// Create a source from an already-parsed URL.
    pub fn from_url(url: Url) -> Self {
        DocumentSource::Url(url)
    }

    /// Create a source from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DocumentSource::Path(path.as_ref().to_path_buf())
    }

    /// Whether this source is fetched over the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, DocumentSource::Url(_))
    }

    /// Human-readable description of the source location.
    pub fn describe(&self) -> String {
        match self {
            DocumentSource::Url(url) => url.to_string(),
            DocumentSource::Path(path) => path.display().to_string(),
        }
    }

    /// Retrieve the full document body as text.
    ///
    /// Issues exactly one read: a GET request for URL sources, a file read
    /// for path sources. Under [`StatusPolicy::Strict`] a non-2xx response
    /// fails before the body is consumed.
    pub async fn retrieve(&self, client: &reqwest::Client, policy: StatusPolicy) -> Result<String> {
        match self {
            DocumentSource::Url(url) => {
                let response = client.get(url.clone()).send().await?;
                let status = response.status();
                if policy == StatusPolicy::Strict && !status.is_success() {
                    return Err(Error::Status {
                        code: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                log::debug!("fetched {} ({})", url, status);
                Ok(response.text().await?)
            }
            DocumentSource::Path(path) => {
                let text = tokio::fs::read_to_string(path).await?;
                log::debug!("read {} ({} bytes)", path.display(), text.len());
                Ok(text)
            }
        }
    }
}

impl FromStr for DocumentSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocumentSource::parse(s)
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

//! Output surfaces and the surface registry.
//!
//! An output surface is a pre-existing destination in the host application
//! that receives rendered content. The loader never owns a surface's
//! lifecycle; it only calls [`OutputSurface::replace`], which swaps the
//! surface's entire contents in one step. Surfaces can be addressed
//! directly or looked up by a stable identifier through [`SurfaceRegistry`].

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// Trait for rendered-content destinations.
///
/// `replace` must be all-or-nothing: on success the surface holds exactly
/// the given markup and nothing of its prior contents; on failure the prior
/// contents must remain observable. The loader relies on this to guarantee
/// that a surface never shows a partial render.
pub trait OutputSurface {
    /// Replace the surface's entire contents with the given markup.
    fn replace(&mut self, markup: &str) -> Result<()>;
}

/// In-memory surface holding its contents as a string.
///
/// # Example
///
/// ```
/// use mdpane::surface::{MemorySurface, OutputSurface};
///
/// let mut surface = MemorySurface::new();
/// surface.replace("<h1>Title</h1>").unwrap();
/// assert_eq!(surface.contents(), "<h1>Title</h1>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    contents: String,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with initial contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// Current contents of the surface.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl OutputSurface for MemorySurface {
    fn replace(&mut self, markup: &str) -> Result<()> {
        self.contents.clear();
        self.contents.push_str(markup);
        Ok(())
    }
}

/// Surface backed by a file on disk.
///
/// Each `replace` truncates and rewrites the file. The file itself does not
/// have to exist beforehand; its parent directory does.
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    /// Create a surface writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this surface writes to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl OutputSurface for FileSurface {
    fn replace(&mut self, markup: &str) -> Result<()> {
        std::fs::write(&self.path, markup)
            .map_err(|e| Error::Surface(format!("{}: {}", self.path.display(), e)))
    }
}

/// Registry mapping stable identifiers to output surfaces.
///
/// Plays the role of the host presentation tree: surfaces are registered
/// ahead of time by the host, and loads address them by id. Looking up an
/// unregistered id is [`Error::SurfaceNotFound`].
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Box<dyn OutputSurface>>,
}

impl SurfaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under the given id, replacing any previous
    /// surface with that id.
    pub fn register(&mut self, id: impl Into<String>, surface: Box<dyn OutputSurface>) {
        self.surfaces.insert(id.into(), surface);
    }

    /// Remove a surface from the registry, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Box<dyn OutputSurface>> {
        self.surfaces.remove(id)
    }

    /// Check whether an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    /// Get a mutable handle to a surface by id.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut (dyn OutputSurface + 'static)> {
        self.surfaces
            .get_mut(id)
            .map(|s| s.as_mut())
            .ok_or_else(|| Error::SurfaceNotFound(id.to_string()))
    }

    /// All registered ids.
    pub fn ids(&self) -> Vec<&str> {
        self.surfaces.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_replace() {
        let mut surface = MemorySurface::with_contents("old");
        surface.replace("new").unwrap();
        assert_eq!(surface.contents(), "new");

        surface.replace("").unwrap();
        assert_eq!(surface.contents(), "");
    }

    #[test]
    fn test_file_surface_replace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let mut surface = FileSurface::new(&path);

        surface.replace("<p>one</p>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>one</p>");

        surface.replace("<p>two</p>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>two</p>");
    }

    #[test]
    fn test_file_surface_bad_directory() {
        let mut surface = FileSurface::new("/nonexistent/never/out.html");
        let result = surface.replace("<p>x</p>");
        assert!(matches!(result, Err(Error::Surface(_))));
    }

    #[test]
    fn test_registry_register_and_lookup() {
        let mut registry = SurfaceRegistry::new();
        assert!(!registry.contains("main"));

        registry.register("main", Box::new(MemorySurface::new()));
        assert!(registry.contains("main"));

        let surface = registry.get_mut("main").unwrap();
        surface.replace("<h1>hi</h1>").unwrap();
    }

    #[test]
    fn test_registry_missing_id() {
        let mut registry = SurfaceRegistry::new();
        let result = registry.get_mut("missing");
        assert!(matches!(result, Err(Error::SurfaceNotFound(_))));
    }

    #[test]
    fn test_registry_remove() {
        let mut registry = SurfaceRegistry::new();
        registry.register("main", Box::new(MemorySurface::new()));
        assert!(registry.remove("main").is_some());
        assert!(!registry.contains("main"));
        assert!(registry.remove("main").is_none());
    }
}

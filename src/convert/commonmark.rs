//! CommonMark conversion backed by pulldown-cmark.

use super::MarkupConverter;
use crate::error::Result;
use pulldown_cmark::{html, Options, Parser};

/// Options controlling which Markdown extensions are enabled.
#[derive(Debug, Clone)]
pub struct CommonMarkOptions {
    /// GitHub-style tables.
    pub tables: bool,

    /// `~~strikethrough~~` spans.
    pub strikethrough: bool,

    /// `- [x]` task list markers.
    pub task_lists: bool,

    /// Footnote references and definitions.
    pub footnotes: bool,
}

impl CommonMarkOptions {
    /// Create options with all extensions enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain CommonMark with every extension disabled.
    pub fn plain() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            task_lists: false,
            footnotes: false,
        }
    }

    /// Enable or disable table support.
    pub fn with_tables(mut self, enable: bool) -> Self {
        self.tables = enable;
        self
    }

    /// Enable or disable strikethrough support.
    pub fn with_strikethrough(mut self, enable: bool) -> Self {
        self.strikethrough = enable;
        self
    }

    /// Enable or disable task list support.
    pub fn with_task_lists(mut self, enable: bool) -> Self {
        self.task_lists = enable;
        self
    }

    /// Enable or disable footnote support.
    pub fn with_footnotes(mut self, enable: bool) -> Self {
        self.footnotes = enable;
        self
    }

    fn to_parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        options
    }
}

impl Default for CommonMarkOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            task_lists: true,
            footnotes: true,
        }
    }
}

/// Markdown-to-HTML converter using pulldown-cmark.
///
/// Conversion is synchronous and total: any text input produces some HTML
/// output, so this converter never returns an error. Fallibility lives in
/// the [`MarkupConverter`] contract for the sake of other backends.
pub struct CommonMarkConverter {
    options: CommonMarkOptions,
}

impl CommonMarkConverter {
    /// Create a converter with the default extension set.
    pub fn new() -> Self {
        Self {
            options: CommonMarkOptions::default(),
        }
    }

    /// Create a converter with custom options.
    pub fn with_options(options: CommonMarkOptions) -> Self {
        Self { options }
    }
}

impl Default for CommonMarkConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupConverter for CommonMarkConverter {
    fn name(&self) -> &str {
        "commonmark"
    }

    fn convert(&self, text: &str) -> Result<String> {
        let parser = Parser::new_ext(text, self.options.to_parser_options());
        // Rendered HTML is usually larger than the source text
        let mut output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut output, parser);
        Ok(output)
    }
}

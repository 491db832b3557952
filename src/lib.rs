//! # notepress
//!
//! A layout/rendering engine that turns lightweight-markup notes
//! (headings, bullet lists, paragraphs) plus at most one illustrative
//! image into a paginated PDF.
//!
//! The pipeline is deliberately small: a line classifier maps each raw
//! line to a block, a font strategy selector picks an embedded Unicode
//! family or the builtin fallback once up front, a pager tracks the
//! vertical cursor and fires page breaks, and the image placement policy
//! puts the supplied image right after the first level-2 heading (or at
//! the end of the document when there is none).
//!
//! ## Quick Start
//!
//! ```no_run
//! use notepress::{Document, ImageAsset};
//!
//! fn main() -> notepress::Result<()> {
//!     let image = ImageAsset::open("images/rust.png")?;
//!     let document = Document::new("Rust Basics", "# Rust Basics\n\n## Ownership\n- moves\n- borrows")
//!         .with_image(image);
//!
//!     let summary = notepress::render_to_file(&document, "notes_Rust_Basics.pdf")?;
//!     println!("{} pages", summary.page_count);
//!     Ok(())
//! }
//! ```
//!
//! Rendering never aborts over a missing or malformed image or font; both
//! degrade locally. The only failure surfaced to callers is being unable
//! to produce or persist the artifact itself.

pub mod classify;
pub mod error;
pub mod layout;
pub mod model;
pub mod naming;
pub mod render;

// Re-exports
pub use classify::{classify, classify_lines};
pub use error::{Error, Result};
pub use model::{Block, BlockCounts, Document, ImageAsset};
pub use render::{
    render_to_bytes, render_to_bytes_with_options, render_to_file, render_to_file_with_options,
    FontFamilyKind, RenderOptions, RenderSummary,
};

use std::path::Path;

/// Builder for configuring and running renders.
///
/// A thin fluent wrapper over [`RenderOptions`] and the `render_*`
/// functions.
///
/// # Example
///
/// ```no_run
/// use notepress::{Document, Notepress};
///
/// let document = Document::new("Topic", "# Title\nbody");
/// let summary = Notepress::new()
///     .with_base_font_size(11.0)
///     .render_to_file(&document, "out.pdf")?;
/// # Ok::<(), notepress::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Notepress {
    options: RenderOptions,
}

impl Notepress {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole option set.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the directory to load the primary TrueType family from.
    pub fn with_font_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.options.font_dir = Some(dir.into());
        self
    }

    /// Sets the base font size in points.
    pub fn with_base_font_size(mut self, size: f32) -> Self {
        self.options.base_font_size = size;
        self
    }

    /// Sets the page size in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.options.page_width = width;
        self.options.page_height = height;
        self
    }

    /// Returns the configured options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders a document to a PDF file.
    pub fn render_to_file(
        &self,
        document: &Document,
        path: impl AsRef<Path>,
    ) -> Result<RenderSummary> {
        render::render_to_file_with_options(document, path, &self.options)
    }

    /// Renders a document to in-memory PDF bytes.
    pub fn render_to_bytes(&self, document: &Document) -> Result<(Vec<u8>, RenderSummary)> {
        render::render_to_bytes_with_options(document, &self.options)
    }
}

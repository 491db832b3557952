//! PDF rendering for classified note documents.
//!
//! The entry points here run the whole pipeline — font selection, line
//! classification, vertical-flow layout with page breaks, and image
//! placement — and either persist the artifact or hand back its bytes.

mod fonts;
mod image;
mod options;
mod pdf;

pub use fonts::{transliterate, FontFamilyKind, FontPlan, LoadedFonts};
pub use image::{ImagePlacementState, IMAGE_DISPLAY_WIDTH, IMAGE_LEADING_GAP};
pub use options::{RenderOptions, A4_HEIGHT_PT, A4_WIDTH_PT};

use crate::error::{Error, Result};
use crate::model::{BlockCounts, Document};
use pdf::PdfRenderer;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

/// Post-render metadata, returned alongside the artifact.
///
/// Lets callers assert on layout outcomes (pages, placed blocks, whether
/// the image made it in) without parsing the PDF back.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSummary {
    /// Number of pages in the finished document.
    pub page_count: usize,
    /// Per-kind tally of the classified blocks.
    pub block_counts: BlockCounts,
    /// True if the supplied image was drawn.
    pub image_placed: bool,
    /// Which font family the render ended up using.
    pub font_family: FontFamilyKind,
}

/// Renders a document to a PDF file with default options.
pub fn render_to_file(document: &Document, path: impl AsRef<Path>) -> Result<RenderSummary> {
    render_to_file_with_options(document, path, &RenderOptions::default())
}

/// Renders a document to a PDF file.
///
/// Font and image problems degrade locally (fallback family, skipped
/// image); the only failure surfaced here is being unable to produce or
/// persist the artifact itself.
pub fn render_to_file_with_options(
    document: &Document,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<RenderSummary> {
    let path = path.as_ref();
    let (doc, summary) = PdfRenderer::new(document, options)?.render(document)?;

    let file = File::create(path).map_err(|e| Error::artifact_write(path, e.to_string()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| Error::artifact_write(path, e.to_string()))?;

    debug!(path = %path.display(), pages = summary.page_count, "artifact written");
    Ok(summary)
}

/// Renders a document to in-memory PDF bytes with default options.
pub fn render_to_bytes(document: &Document) -> Result<(Vec<u8>, RenderSummary)> {
    render_to_bytes_with_options(document, &RenderOptions::default())
}

/// Renders a document to in-memory PDF bytes.
pub fn render_to_bytes_with_options(
    document: &Document,
    options: &RenderOptions,
) -> Result<(Vec<u8>, RenderSummary)> {
    let (doc, summary) = PdfRenderer::new(document, options)?.render(document)?;
    let bytes = doc
        .save_to_bytes()
        .map_err(|e| Error::PdfBackend(e.to_string()))?;
    Ok((bytes, summary))
}

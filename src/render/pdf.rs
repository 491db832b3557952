//! PDF block renderer and document assembler.

use crate::classify::classify;
use crate::error::Result;
use crate::layout::{wrap, Pager};
use crate::model::{Block, BlockCounts, Document, ImageAsset};
use printpdf::{ImageTransform, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Pt};
use tracing::{debug, warn};

use super::fonts::{self, FontPlan, LoadedFonts};
use super::image::{self, ImagePlacementState, IMAGE_LEADING_GAP};
use super::options::RenderOptions;
use super::RenderSummary;

/// Which loaded style a text block is drawn with.
#[derive(Debug, Clone, Copy)]
enum Style {
    Regular,
    Bold,
}

/// Drives one render call: classifies lines, draws blocks through the
/// pager, and applies the image placement policy.
///
/// All state is owned by the renderer and discarded with it; nothing
/// persists across calls.
pub(crate) struct PdfRenderer<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: LoadedFonts,
    plan: FontPlan,
    options: &'a RenderOptions,
    pager: Pager,
    counts: BlockCounts,
    image_state: ImagePlacementState,
    content_started: bool,
}

impl<'a> PdfRenderer<'a> {
    /// Sets up the document, selects the font plan, and starts page 1.
    pub(crate) fn new(document: &Document, options: &'a RenderOptions) -> Result<Self> {
        let plan = fonts::select(options.font_dir.as_deref());
        let geometry = options.geometry();

        let (doc, page, layer) = PdfDocument::new(
            document.title(),
            Mm::from(Pt(geometry.page_width)),
            Mm::from(Pt(geometry.page_height)),
            "content",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let (fonts, plan) = fonts::load(&doc, &plan)?;

        Ok(Self {
            doc,
            layer,
            fonts,
            plan,
            options,
            pager: Pager::new(geometry),
            counts: BlockCounts::new(),
            image_state: ImagePlacementState::new(),
            content_started: false,
        })
    }

    /// Renders the whole document and returns the finished PDF plus a
    /// summary of what was placed.
    pub(crate) fn render(
        mut self,
        document: &Document,
    ) -> Result<(PdfDocumentReference, RenderSummary)> {
        for line in &document.body_lines {
            let block = classify(line);
            self.counts.record(&block);
            self.render_block(&block);

            if matches!(block, Block::Heading2(_)) && self.image_state.observe_heading2() {
                if let Some(asset) = &document.image {
                    self.try_place_image(asset);
                }
            }
        }

        // End-of-document fallback: no qualifying heading, or the draw
        // there failed.
        if let Some(asset) = &document.image {
            if self.image_state.needs_end_placement(true) {
                self.try_place_image(asset);
            }
        }

        let summary = RenderSummary {
            page_count: self.pager.page_count(),
            block_counts: self.counts,
            image_placed: self.image_state.image_emitted,
            font_family: self.plan.family,
        };
        debug!(
            pages = summary.page_count,
            blocks = summary.block_counts.total(),
            image_placed = summary.image_placed,
            "document assembled"
        );
        Ok((self.doc, summary))
    }

    fn render_block(&mut self, block: &Block) {
        let base = self.options.base_font_size;
        let line_height = self.options.line_height();

        match block {
            Block::Heading1(text) => {
                self.draw_wrapped(text, Style::Bold, base + 5.0, 0.0, 0.7 * line_height);
            }
            Block::Heading2(text) => {
                self.draw_wrapped(text, Style::Bold, base + 3.0, 0.0, 0.5 * line_height);
            }
            Block::Bullet(text) => {
                let text = format!("{} {}", self.plan.bullet_glyph(), text);
                self.draw_wrapped(&text, Style::Regular, base, self.options.bullet_indent, 0.0);
            }
            Block::Paragraph(text) => {
                self.draw_wrapped(text, Style::Regular, base, 0.0, 0.0);
            }
            Block::Blank => {
                // No gap before the first content block, and spacing never
                // forces a page break; it is dropped at the bottom edge.
                if self.content_started {
                    let height = 0.5 * line_height;
                    if self.pager.cursor_y() + height <= self.pager.geometry().bottom_limit() {
                        self.pager.advance(height);
                    }
                }
            }
        }
    }

    /// Wraps and draws one text block, reserving its full height up front
    /// so a block is never split across a page boundary.
    fn draw_wrapped(
        &mut self,
        text: &str,
        style: Style,
        font_size: f32,
        extra_indent: f32,
        leading: f32,
    ) {
        let text = self.plan.prepare_text(text);
        let geometry = *self.pager.geometry();
        let max_width = geometry.content_width() - extra_indent;
        let lines = wrap(&text, font_size, max_width);
        let line_height = self.options.line_height();
        let height = leading + lines.len() as f32 * line_height;

        let decision = self.pager.reserve(height);
        if decision.page_started {
            self.start_new_page();
        }

        let font = match style {
            Style::Regular => self.fonts.regular.clone(),
            Style::Bold => self.fonts.bold.clone(),
        };
        let x = Mm::from(Pt(geometry.margin_left + extra_indent));

        for (i, line) in lines.iter().enumerate() {
            let top = decision.y + leading + i as f32 * line_height;
            // The pager measures from the page top; PDF origin is bottom-left
            // and use_text positions the baseline.
            let baseline = geometry.page_height - top - font_size;
            self.layer
                .use_text(line.as_str(), font_size, x, Mm::from(Pt(baseline)), &font);
        }

        self.pager.advance(height);
        self.content_started = true;
    }

    /// Attempts to draw the image at the current cursor.
    ///
    /// A decode failure is logged and leaves the placement state untouched,
    /// so the end-of-document fallback stays armed; it never aborts the
    /// render.
    fn try_place_image(&mut self, asset: &ImageAsset) {
        if self.image_state.image_emitted {
            return;
        }

        let loaded = match image::load_image(asset) {
            Ok(img) => img,
            Err(e) => {
                warn!(
                    path = %asset.file_path.display(),
                    error = %e,
                    "image unreadable; skipping placement"
                );
                return;
            }
        };

        let (width, height) = image::display_size(asset);
        let total = IMAGE_LEADING_GAP + height;

        let decision = self.pager.reserve(total);
        if decision.page_started {
            self.start_new_page();
        }

        let geometry = *self.pager.geometry();
        let x = (geometry.page_width - width) / 2.0;
        let top = decision.y + IMAGE_LEADING_GAP;
        // translate is the lower-left corner of the placed image.
        let translate_y = geometry.page_height - top - height;
        // dpi chosen so that pixel_width maps exactly onto the display width;
        // the shared dpi preserves the aspect ratio.
        let dpi = asset.pixel_width as f32 * 72.0 / width;

        loaded.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm::from(Pt(x))),
                translate_y: Some(Mm::from(Pt(translate_y))),
                dpi: Some(dpi),
                ..Default::default()
            },
        );

        self.pager.advance(total);
        self.image_state.mark_emitted();
        self.content_started = true;
        debug!(page = decision.page_index + 1, "image placed");
    }

    fn start_new_page(&mut self) {
        let geometry = *self.pager.geometry();
        let (page, layer) = self.doc.add_page(
            Mm::from(Pt(geometry.page_width)),
            Mm::from(Pt(geometry.page_height)),
            "content",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
    }
}

//! Image placement policy: state, scaling, and decoding.
//!
//! The supplied image goes immediately after the first level-2 heading in
//! line order. Documents without a level-2 heading, and draw attempts that
//! fail there, fall back to a single end-of-document placement. The image
//! is never drawn more than once and never before a level-2 heading.

use crate::error::{Error, Result};
use crate::model::ImageAsset;
use printpdf::image_crate::DynamicImage;

/// Fixed display width of the placed image, in points.
pub const IMAGE_DISPLAY_WIDTH: f32 = 120.0;

/// Vertical gap reserved above the image, in points.
pub const IMAGE_LEADING_GAP: f32 = 7.0;

/// Tracks whether the qualifying heading has passed and whether the image
/// has been drawn.
///
/// `image_emitted` flips to true exactly once; marking it again is a no-op,
/// and the end-of-document fallback is skipped once it is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImagePlacementState {
    /// True once any level-2 heading has been rendered.
    pub first_heading2_seen: bool,
    /// True once the image has been drawn successfully.
    pub image_emitted: bool,
}

impl ImagePlacementState {
    /// Creates the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rendered level-2 heading.
    ///
    /// Returns true only for the first heading observed while the image has
    /// not yet been emitted; that heading is the qualifying placement point.
    pub fn observe_heading2(&mut self) -> bool {
        if self.first_heading2_seen {
            return false;
        }
        self.first_heading2_seen = true;
        !self.image_emitted
    }

    /// Records a successful draw. Idempotent.
    pub fn mark_emitted(&mut self) {
        self.image_emitted = true;
    }

    /// Returns true if the end-of-document fallback should run.
    pub fn needs_end_placement(&self, image_supplied: bool) -> bool {
        image_supplied && !self.image_emitted
    }
}

/// Returns the display size of an asset in points, width fixed and height
/// following the pixel aspect ratio.
pub fn display_size(asset: &ImageAsset) -> (f32, f32) {
    let width = IMAGE_DISPLAY_WIDTH;
    (width, width * asset.aspect_ratio())
}

/// Decodes the asset into a PDF-embeddable image.
///
/// The decode re-opens the file; a path that probed fine earlier can still
/// fail here. Alpha channels are flattened to RGB, which is what the PDF
/// backend expects for plain XObject placement.
pub fn load_image(asset: &ImageAsset) -> Result<printpdf::Image> {
    let decoded = printpdf::image_crate::open(&asset.file_path)
        .map_err(|e| Error::image_unreadable(&asset.file_path, e.to_string()))?;
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
    Ok(printpdf::Image::from_dynamic_image(&rgb))
}

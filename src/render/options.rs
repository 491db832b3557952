//! Rendering options for PDF output.

use crate::layout::PageGeometry;
use serde::Serialize;
use std::path::PathBuf;

/// A4 page width in points.
pub const A4_WIDTH_PT: f32 = 595.276;
/// A4 page height in points.
pub const A4_HEIGHT_PT: f32 = 841.89;

/// Options for PDF rendering.
///
/// All lengths are in points. The defaults reproduce the classic notes
/// layout: A4 page, 10 mm margins with a doubled bottom margin, 12 pt base
/// font.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOptions {
    /// Page width in points.
    pub page_width: f32,

    /// Page height in points.
    pub page_height: f32,

    /// Left margin in points.
    pub margin_left: f32,

    /// Right margin in points.
    pub margin_right: f32,

    /// Top margin in points.
    pub margin_top: f32,

    /// Bottom margin in points.
    pub margin_bottom: f32,

    /// Base font size in points. Headings derive from it (+5 for level 1,
    /// +3 for level 2), as does the line height (×1.25).
    pub base_font_size: f32,

    /// Extra left indent for bullet blocks, in points.
    pub bullet_indent: f32,

    /// Directory containing the primary TrueType family.
    /// If None, well-known system font locations are probed.
    pub font_dir: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
            margin_left: 28.35,
            margin_right: 28.35,
            margin_top: 28.35,
            margin_bottom: 56.7,
            base_font_size: 12.0,
            bullet_indent: 14.0,
            font_dir: None,
        }
    }
}

impl RenderOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Sets all four margins in points.
    pub fn with_margins(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.margin_left = left;
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self
    }

    /// Sets the base font size in points.
    pub fn with_base_font_size(mut self, size: f32) -> Self {
        self.base_font_size = size;
        self
    }

    /// Sets the bullet indent in points.
    pub fn with_bullet_indent(mut self, indent: f32) -> Self {
        self.bullet_indent = indent;
        self
    }

    /// Sets the directory to load the primary TrueType family from.
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = Some(dir.into());
        self
    }

    /// Returns the line height derived from the base font size.
    pub fn line_height(&self) -> f32 {
        self.base_font_size * 1.25
    }

    /// Returns the page geometry these options describe.
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            page_width: self.page_width,
            page_height: self.page_height,
            margin_left: self.margin_left,
            margin_right: self.margin_right,
            margin_top: self.margin_top,
            margin_bottom: self.margin_bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_a4() {
        let options = RenderOptions::default();
        assert_eq!(options.page_width, A4_WIDTH_PT);
        assert_eq!(options.page_height, A4_HEIGHT_PT);
        assert_eq!(options.base_font_size, 12.0);
        assert!(options.font_dir.is_none());
    }

    #[test]
    fn test_line_height_is_125_percent() {
        let options = RenderOptions::default().with_base_font_size(10.0);
        assert_eq!(options.line_height(), 12.5);
    }

    #[test]
    fn test_builder_chain() {
        let options = RenderOptions::new()
            .with_page_size(500.0, 700.0)
            .with_margins(10.0, 20.0, 30.0, 40.0)
            .with_bullet_indent(8.0)
            .with_font_dir("/tmp/fonts");

        assert_eq!(options.page_width, 500.0);
        assert_eq!(options.margin_top, 20.0);
        assert_eq!(options.bullet_indent, 8.0);
        assert_eq!(options.font_dir, Some(PathBuf::from("/tmp/fonts")));
    }

    #[test]
    fn test_geometry_derivation() {
        let options = RenderOptions::default();
        let geometry = options.geometry();
        assert_eq!(
            geometry.content_width(),
            options.page_width - 2.0 * 28.35
        );
        assert_eq!(
            geometry.content_height(),
            options.page_height - 28.35 - 56.7
        );
    }
}

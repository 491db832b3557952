//! Document structure and image asset.

use crate::error::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A complete input document for one render call.
///
/// The document is immutable once constructed: a topic string (used as the
/// fallback title and for output naming), the body as an ordered sequence of
/// raw lines, and at most one illustrative image.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    /// Topic supplied by the caller; fallback title and naming source.
    pub topic: String,
    /// Raw body lines, in input order.
    pub body_lines: Vec<String>,
    /// Optional illustrative image.
    pub image: Option<ImageAsset>,
}

impl Document {
    /// Creates a document from a topic and newline-delimited body text.
    pub fn new(topic: impl Into<String>, body: &str) -> Self {
        Self {
            topic: topic.into(),
            body_lines: body.lines().map(str::to_owned).collect(),
            image: None,
        }
    }

    /// Creates a document from a topic and pre-split body lines.
    pub fn from_lines(topic: impl Into<String>, body_lines: Vec<String>) -> Self {
        Self {
            topic: topic.into(),
            body_lines,
            image: None,
        }
    }

    /// Reads the body text from a file.
    ///
    /// Returns [`Error::EmptyDocument`] if the file contains no non-whitespace
    /// content.
    pub fn from_file(topic: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let body = std::fs::read_to_string(path)?;
        if body.trim().is_empty() {
            return Err(Error::EmptyDocument("body text is empty".into()));
        }
        Ok(Self::new(topic, &body))
    }

    /// Attaches an image asset to this document.
    pub fn with_image(mut self, image: ImageAsset) -> Self {
        self.image = Some(image);
        self
    }

    /// Returns the document title.
    ///
    /// If the first body line is a level-1 heading, its text is the title;
    /// otherwise the topic string is used. The title surfaces only in output
    /// metadata and naming — the heading line itself is still rendered as part
    /// of the body.
    pub fn title(&self) -> String {
        if let Some(first) = self.body_lines.first() {
            if let crate::model::Block::Heading1(text) = crate::classify::classify(first) {
                return text;
            }
        }
        self.topic.clone()
    }

    /// Returns the number of body lines.
    pub fn line_count(&self) -> usize {
        self.body_lines.len()
    }

    /// Returns the document structure as pretty-printed JSON.
    pub fn raw_content(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A raster image supplied alongside the document body.
///
/// Pixel dimensions are probed once at construction and are read-only
/// afterwards; both are guaranteed to be non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAsset {
    /// Path to the locally readable image file.
    pub file_path: PathBuf,
    /// Width in pixels.
    pub pixel_width: u32,
    /// Height in pixels.
    pub pixel_height: u32,
}

impl ImageAsset {
    /// Opens an image file and probes its pixel dimensions.
    ///
    /// Returns [`Error::ImageUnreadable`] if the file is missing, is not a
    /// decodable raster image, or reports a zero-area size.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (pixel_width, pixel_height) = printpdf::image_crate::image_dimensions(path)
            .map_err(|e| Error::image_unreadable(path, e.to_string()))?;

        if pixel_width == 0 || pixel_height == 0 {
            return Err(Error::image_unreadable(path, "image has zero area"));
        }

        Ok(Self {
            file_path: path.to_path_buf(),
            pixel_width,
            pixel_height,
        })
    }

    /// Creates an asset from already-known dimensions.
    ///
    /// The dimensions are trusted as-is; rendering re-opens the file and
    /// degrades to "no image" if it turns out to be unreadable.
    pub fn with_dimensions(path: impl Into<PathBuf>, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            file_path: path.into(),
            pixel_width,
            pixel_height,
        }
    }

    /// Returns the aspect ratio as height over width.
    pub fn aspect_ratio(&self) -> f32 {
        self.pixel_height as f32 / self.pixel_width as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_lines() {
        let doc = Document::new("Rust", "# Title\n\nBody line");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.body_lines[0], "# Title");
        assert_eq!(doc.body_lines[1], "");
        assert_eq!(doc.body_lines[2], "Body line");
        assert!(doc.image.is_none());
    }

    #[test]
    fn test_title_from_first_heading1() {
        let doc = Document::new("fallback topic", "# Actual Title\ncontent");
        assert_eq!(doc.title(), "Actual Title");
    }

    #[test]
    fn test_title_falls_back_to_topic() {
        let doc = Document::new("My Topic", "## Not a level-1 heading\ncontent");
        assert_eq!(doc.title(), "My Topic");

        let doc = Document::new("My Topic", "plain first line");
        assert_eq!(doc.title(), "My Topic");
    }

    #[test]
    fn test_title_ignores_heading1_past_first_line() {
        let doc = Document::new("Topic", "intro\n# Late Heading");
        assert_eq!(doc.title(), "Topic");
    }

    #[test]
    fn test_title_of_empty_body() {
        let doc = Document::new("Topic", "");
        assert_eq!(doc.title(), "Topic");
    }

    #[test]
    fn test_from_file_rejects_empty_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "  \n\t\n").unwrap();

        let result = Document::from_file("Topic", &path);
        assert!(matches!(result, Err(Error::EmptyDocument(_))));
    }

    #[test]
    fn test_from_file_reads_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "# Hello\n\n- item").unwrap();

        let doc = Document::from_file("Topic", &path).unwrap();
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.title(), "Hello");
    }

    #[test]
    fn test_image_asset_open_missing_file() {
        let result = ImageAsset::open("/nonexistent/path/image.png");
        assert!(matches!(result, Err(Error::ImageUnreadable { .. })));
    }

    #[test]
    fn test_image_asset_open_probes_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        printpdf::image_crate::RgbImage::new(800, 400)
            .save(&path)
            .unwrap();

        let asset = ImageAsset::open(&path).unwrap();
        assert_eq!(asset.pixel_width, 800);
        assert_eq!(asset.pixel_height, 400);
        assert_eq!(asset.aspect_ratio(), 0.5);
    }

    #[test]
    fn test_image_asset_open_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"this is not image data").unwrap();

        let result = ImageAsset::open(&path);
        assert!(matches!(result, Err(Error::ImageUnreadable { .. })));
    }

    #[test]
    fn test_raw_content_is_json() {
        let doc = Document::new("Topic", "# T\nbody");
        let json = doc.raw_content();
        assert!(json.contains("\"topic\": \"Topic\""));
        assert!(json.contains("body_lines"));
    }
}

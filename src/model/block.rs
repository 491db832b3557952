//! Classified block definitions.

use serde::Serialize;

/// One classified semantic unit of input text.
///
/// Every raw input line maps to exactly one variant; see
/// [`classify`](crate::classify::classify) for the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum Block {
    /// Top-level heading (`# ` prefix).
    Heading1(String),
    /// Second-level heading (`## ` prefix).
    Heading2(String),
    /// Unordered list item (`- ` or `* ` prefix).
    Bullet(String),
    /// Plain body text.
    Paragraph(String),
    /// Line that is empty after trimming.
    Blank,
}

impl Block {
    /// Returns the text content of this block, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading1(text)
            | Block::Heading2(text)
            | Block::Bullet(text)
            | Block::Paragraph(text) => Some(text),
            Block::Blank => None,
        }
    }

    /// Returns true if this block is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Blank)
    }

    /// Returns true if this block is a heading of either level.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading1(_) | Block::Heading2(_))
    }

    /// Returns a short name for the block kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading1(_) => "heading1",
            Block::Heading2(_) => "heading2",
            Block::Bullet(_) => "bullet",
            Block::Paragraph(_) => "paragraph",
            Block::Blank => "blank",
        }
    }
}

/// Per-kind block tally collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BlockCounts {
    /// Number of level-1 headings.
    pub heading1: usize,
    /// Number of level-2 headings.
    pub heading2: usize,
    /// Number of bullet items.
    pub bullet: usize,
    /// Number of paragraphs.
    pub paragraph: usize,
    /// Number of blank lines.
    pub blank: usize,
}

impl BlockCounts {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one block in the tally.
    pub fn record(&mut self, block: &Block) {
        match block {
            Block::Heading1(_) => self.heading1 += 1,
            Block::Heading2(_) => self.heading2 += 1,
            Block::Bullet(_) => self.bullet += 1,
            Block::Paragraph(_) => self.paragraph += 1,
            Block::Blank => self.blank += 1,
        }
    }

    /// Returns the total number of recorded blocks.
    pub fn total(&self) -> usize {
        self.heading1 + self.heading2 + self.bullet + self.paragraph + self.blank
    }
}

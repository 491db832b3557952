//! Layout cursor and page-break detection.

use tracing::warn;

/// Page dimensions and margins in points.
///
/// All vertical positions handed out by the [`Pager`] are measured downward
/// from the top edge of the page; conversion to the PDF's bottom-left origin
/// happens at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
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
}

impl PageGeometry {
    /// Returns the printable width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Returns the usable height between the top and bottom margins.
    pub fn content_height(&self) -> f32 {
        self.page_height - self.margin_top - self.margin_bottom
    }

    /// Returns the lowest cursor position before a page break fires.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin_bottom
    }
}

/// The page and y-coordinate at which a reserved block should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementDecision {
    /// Zero-based page index the block lands on.
    pub page_index: usize,
    /// Distance from the top of that page to the top of the block, in points.
    pub y: f32,
    /// True if the reservation triggered a page break; the caller must start
    /// a fresh page in the output before drawing.
    pub page_started: bool,
}

/// Tracks the vertical cursor and fires page breaks.
///
/// Usage is two-phase: [`reserve`](Pager::reserve) returns the placement for
/// a block about to consume vertical space (breaking the page first if it
/// would not fit), and the caller commits the space with
/// [`advance`](Pager::advance) after drawing. Drawing primitives need the
/// pre-break coordinate while subsequent blocks need the post-advance
/// cursor, hence the split.
#[derive(Debug, Clone)]
pub struct Pager {
    geometry: PageGeometry,
    page_index: usize,
    cursor_y: f32,
}

impl Pager {
    /// Creates a pager positioned at the top margin of the first page.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            page_index: 0,
            cursor_y: geometry.margin_top,
        }
    }

    /// Reserves vertical space for a block and returns where to draw it.
    ///
    /// If the block does not fit above the bottom margin, a page break fires
    /// first: the page index increments and the cursor resets to the top
    /// margin. A block taller than a whole fresh page is placed at the top
    /// margin anyway and allowed to overflow visually; breaking again could
    /// never help and must not loop.
    pub fn reserve(&mut self, height: f32) -> PlacementDecision {
        let mut page_started = false;

        if self.cursor_y + height > self.geometry.bottom_limit() {
            if self.cursor_y > self.geometry.margin_top {
                self.page_index += 1;
                self.cursor_y = self.geometry.margin_top;
                page_started = true;
            }
            if self.cursor_y + height > self.geometry.bottom_limit() {
                warn!(
                    height,
                    content_height = self.geometry.content_height(),
                    "block taller than a full page; placing with overflow"
                );
            }
        }

        PlacementDecision {
            page_index: self.page_index,
            y: self.cursor_y,
            page_started,
        }
    }

    /// Commits the space of a drawn block, moving the cursor down.
    pub fn advance(&mut self, height: f32) {
        self.cursor_y += height;
    }

    /// Returns the current zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Returns the number of pages the cursor has touched so far.
    pub fn page_count(&self) -> usize {
        self.page_index + 1
    }

    /// Returns the current cursor position from the top of the page.
    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// Returns the page geometry this pager was built with.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }
}

//! Vertical-flow layout: page geometry, the pager, and text metrics.
//!
//! The pager is the only stateful part of the layout engine. It tracks the
//! cursor position and page index in points measured from the top of the
//! page, and decides when a page break fires. Text metrics are pure
//! functions over a static character-width table.

mod metrics;
mod pager;

pub use metrics::{text_width, wrap};
pub use pager::{PageGeometry, Pager, PlacementDecision};

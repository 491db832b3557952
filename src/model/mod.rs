//! Input document model.
//!
//! This module defines the value types shared between the classifier, the
//! layout engine, and the PDF renderer: the immutable input [`Document`] with
//! its optional [`ImageAsset`], and the classified [`Block`] variants.

mod block;
mod document;

pub use block::*;
pub use document::*;

//! Rendering of the pass/fail report for terminals and CI logs.

#![forbid(unsafe_code)]

mod model;
mod text;

pub use model::{RenderableDirectRow, RenderableReport, RenderableTransitiveRow, RenderableVerdict};
pub use text::render_text;

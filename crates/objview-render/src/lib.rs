// Render module - Recursive preview rendering core
// This layer sits between the captured preview model (types) and whatever
// surface paints the resulting display tree (CLI, GUI, tests).

pub mod formatter;
pub mod policy;
pub mod presenter;
pub mod render;
pub mod tree;

pub use formatter::{TextFormatter, ValueFormatter};
pub use policy::RenderPolicy;
pub use presenter::PreviewPresenter;
pub use render::{PreviewRenderer, Rendered};
pub use tree::{DisplayTree, Segment, StyleHint};

use objview_types::{Mode, Preview, Result};

// Façade API - Stable public interface for consumers
// Hosts with a custom formatter should build a PreviewRenderer directly.

/// Render a preview with the default text formatter and policy.
pub fn render_preview(preview: &Preview, mode: Mode) -> Result<Rendered> {
    PreviewRenderer::new(&TextFormatter).render(preview, mode)
}

/// Compute only the losslessness verdict of a render pass.
///
/// A convenience for consumers that do not paint the tree; correctness never
/// depends on skipping the materialization.
pub fn lossless_only(preview: &Preview, mode: Mode) -> Result<bool> {
    Ok(render_preview(preview, mode)?.lossless)
}

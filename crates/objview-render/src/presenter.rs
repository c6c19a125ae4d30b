use crate::formatter::ValueFormatter;
use crate::policy::RenderPolicy;
use crate::render::{PreviewRenderer, Rendered};
use crate::tree::DisplayTree;
use objview_types::{Mode, Preview, PreviewSubtype, Result};

/// Owns a rendered preview and a toggle between its one-line title and the
/// full display tree.
///
/// Rendering happens once, at construction. Toggling only changes which of
/// the two trees [`visible`](Self::visible) returns; it never re-renders and
/// never re-applies the mode's truncation.
#[derive(Debug, Clone)]
pub struct PreviewPresenter {
    preview: Preview,
    mode: Mode,
    rendered: Rendered,
    title: DisplayTree,
    showing_title: bool,
}

impl PreviewPresenter {
    pub fn new<F: ValueFormatter + ?Sized>(
        preview: Preview,
        mode: Mode,
        formatter: &F,
    ) -> Result<Self> {
        Self::with_policy(preview, mode, formatter, RenderPolicy::default())
    }

    pub fn with_policy<F: ValueFormatter + ?Sized>(
        preview: Preview,
        mode: Mode,
        formatter: &F,
        policy: RenderPolicy,
    ) -> Result<Self> {
        let rendered = PreviewRenderer::with_policy(formatter, policy).render(&preview, mode)?;
        let title = build_title(&preview, formatter);

        Ok(Self {
            preview,
            mode,
            rendered,
            title,
            showing_title: false,
        })
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the rendered tree is a complete account of the value.
    /// Hosts typically style the preview differently when it is not.
    pub fn lossless(&self) -> bool {
        self.rendered.lossless
    }

    /// Pass-through of the upstream collection size, when present.
    pub fn size(&self) -> Option<u64> {
        self.preview.size
    }

    pub fn tree(&self) -> &DisplayTree {
        &self.rendered.tree
    }

    pub fn title(&self) -> &DisplayTree {
        &self.title
    }

    pub fn show_title(&mut self) {
        self.showing_title = true;
    }

    pub fn show_preview(&mut self) {
        self.showing_title = false;
    }

    pub fn showing_title(&self) -> bool {
        self.showing_title
    }

    /// The tree the host should currently paint.
    pub fn visible(&self) -> &DisplayTree {
        if self.showing_title {
            &self.title
        } else {
            &self.rendered.tree
        }
    }
}

/// One-line title: null and regexp previews show their formatted value even
/// in the title; everything else shows the bare description.
fn build_title<F: ValueFormatter + ?Sized>(preview: &Preview, formatter: &F) -> DisplayTree {
    let mut tree = DisplayTree::new();
    match preview.subtype {
        Some(PreviewSubtype::Null) | Some(PreviewSubtype::Regexp) => {
            tree.push(formatter.format_value(preview));
        }
        _ => tree.push_text(preview.description.clone()),
    }
    tree
}

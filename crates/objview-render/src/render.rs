use crate::formatter::ValueFormatter;
use crate::policy::RenderPolicy;
use crate::tree::{DisplayTree, Segment};
use objview_types::{AccessKind, Error, Mode, Preview, PreviewKind, PreviewSubtype, Result};
use serde::Serialize;

/// Result of one render pass: the display tree plus whether it is a
/// complete account of the underlying value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub tree: DisplayTree,
    pub lossless: bool,
}

/// Recursive preview renderer.
///
/// Walks an immutable [`Preview`] snapshot, applies the [`RenderPolicy`]
/// limit at every level, delegates leaves to the [`ValueFormatter`], and
/// returns a fresh `(tree, lossless)` pair from every call. The pass is a
/// pure computation: no I/O, no shared state, recursion bounded by the depth
/// the upstream capture already enforced.
///
/// Truncation marker caveat: the `", …"` marker reflects only the upstream
/// `overflow` flag. When brief mode's own limit hides members of a
/// non-overflowing preview, the output silently shows fewer members with no
/// marker. That asymmetry matches the upstream inspection UI and is kept
/// deliberately.
pub struct PreviewRenderer<'a, F: ValueFormatter + ?Sized> {
    formatter: &'a F,
    policy: RenderPolicy,
}

impl<'a, F: ValueFormatter + ?Sized> PreviewRenderer<'a, F> {
    pub fn new(formatter: &'a F) -> Self {
        Self::with_policy(formatter, RenderPolicy::default())
    }

    pub fn with_policy(formatter: &'a F, policy: RenderPolicy) -> Self {
        Self { formatter, policy }
    }

    /// Render one preview node, recursing into nested previews.
    ///
    /// The only error is a contract violation by the upstream producer: a
    /// value-kind property with neither a nested preview nor fallback text.
    pub fn render(&self, preview: &Preview, mode: Mode) -> Result<Rendered> {
        // Null and regexp previews are their formatted text, which is
        // definitionally complete, so upstream flags are ignored.
        if is_terminal_object(preview) {
            let mut tree = DisplayTree::new();
            tree.push(self.formatter.format_value(preview));
            return Ok(Rendered {
                tree,
                lossless: true,
            });
        }

        let mut tree = DisplayTree::new();

        // Class-name annotation for object previews that are neither arrays
        // nor plain objects.
        if preview.kind == PreviewKind::Object
            && preview.subtype != Some(PreviewSubtype::Array)
            && preview.description != Preview::PLAIN_OBJECT_LABEL
        {
            tree.push(Segment::TypeName(format!("{} ", preview.description)));
        }

        let lossless = if !preview.entries.is_empty() {
            self.append_entries(&mut tree, preview, mode)?
        } else if !preview.properties.is_empty() {
            self.append_properties(&mut tree, preview, mode)?
        } else {
            tree.push(self.formatter.format_value(preview));
            true
        };

        Ok(Rendered { tree, lossless })
    }

    /// Collection body: `{k => v, ...}`, or `[...]` for iterators.
    fn append_entries(&self, tree: &mut DisplayTree, preview: &Preview, mode: Mode) -> Result<bool> {
        // Named properties riding along with entries are not rendered here,
        // so their mere presence makes the body incomplete.
        let mut lossless = preview.lossless && preview.properties.is_empty();

        let is_iterator = preview.subtype == Some(PreviewSubtype::Iterator);
        tree.push_text(if is_iterator { "[" } else { "{" });

        let limit = match self.policy.limit_for(mode) {
            Some(limit) => preview.entries.len().min(limit),
            None => preview.entries.len(),
        };
        for (i, entry) in preview.entries.iter().take(limit).enumerate() {
            if i > 0 {
                tree.push_text(", ");
            }

            if let Some(key) = &entry.key {
                let rendered = self.render(key, mode)?;
                lossless &= rendered.lossless;
                tree.push(Segment::Nested(rendered.tree));
                tree.push_text(" => ");
            }

            let rendered = self.render(&entry.value, mode)?;
            lossless &= rendered.lossless;
            tree.push(Segment::Nested(rendered.tree));
        }

        // Marker driven by the upstream flag alone, never by the local limit.
        if preview.overflow {
            tree.push_text(", \u{2026}");
        }
        tree.push_text(if is_iterator { "]" } else { "}" });

        Ok(lossless)
    }

    /// Property body: `{name: value, ...}`, or `[...]` for arrays.
    fn append_properties(
        &self,
        tree: &mut DisplayTree,
        preview: &Preview,
        mode: Mode,
    ) -> Result<bool> {
        // Error properties are not shown inline; they belong in a full view.
        if preview.subtype == Some(PreviewSubtype::Error) {
            return Ok(false);
        }

        // Dates render as their formatted text alone. Any own property makes
        // that text an incomplete account, without rendering the property.
        if preview.subtype == Some(PreviewSubtype::Date) {
            return Ok(preview.properties.is_empty());
        }

        let is_array = preview.subtype == Some(PreviewSubtype::Array);
        tree.push_text(if is_array { "[" } else { "{" });

        let limit = self.policy.limit_for(mode).unwrap_or(usize::MAX);
        let mut shown = 0;
        for (index, property) in preview.properties.iter().enumerate() {
            if shown >= limit {
                break;
            }

            // Accessors are not evaluated by the capture, nothing to show.
            if property.access_kind == AccessKind::Accessor {
                continue;
            }

            // The constructor name is already visible as the annotation.
            if property.name == "constructor" {
                continue;
            }

            if shown > 0 {
                tree.push_text(", ");
            }
            shown += 1;

            // Array elements at their own index render as bare values.
            if !is_array || property.name != index.to_string() {
                tree.push(Segment::PropertyName(property.name.clone()));
                tree.push_text(": ");
            }

            if let Some(value) = &property.value {
                // The nested verdict is deliberately not folded in; this
                // body's verdict is the upstream flag returned below.
                let rendered = self.render(value, mode)?;
                tree.push(Segment::Nested(rendered.tree));
            } else if let Some(raw) = &property.raw_formatted {
                tree.push(self.formatter.format_raw(raw));
            } else {
                return Err(Error::PropertyWithoutValue(property.name.clone()));
            }
        }

        if preview.overflow {
            tree.push_text(", \u{2026}");
        }
        tree.push_text(if is_array { "]" } else { "}" });

        Ok(preview.lossless)
    }
}

fn is_terminal_object(preview: &Preview) -> bool {
    preview.kind == PreviewKind::Object
        && matches!(
            preview.subtype,
            Some(PreviewSubtype::Null) | Some(PreviewSubtype::Regexp)
        )
}

use crate::tree::{Segment, StyleHint};
use objview_types::{Preview, PreviewKind, PreviewSubtype};

/// Renders terminal (non-expandable) previews and fallback property text.
///
/// The renderer delegates every leaf to this trait so hosts can plug in
/// their own styling surface; [`TextFormatter`] is the plain default.
pub trait ValueFormatter {
    /// Format a preview that renders as a single value: a bare scalar, or
    /// the null/regexp short-circuits.
    fn format_value(&self, preview: &Preview) -> Segment;

    /// Format pre-formatted fallback text attached to a property.
    fn format_raw(&self, raw: &str) -> Segment;
}

/// Default formatter: emits the preview's description verbatim, tagged with
/// a style hint guessed from its kind and subtype.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ValueFormatter for TextFormatter {
    fn format_value(&self, preview: &Preview) -> Segment {
        Segment::Value {
            text: preview.description.clone(),
            hint: style_hint_for(preview),
        }
    }

    fn format_raw(&self, raw: &str) -> Segment {
        Segment::Value {
            text: raw.to_string(),
            hint: StyleHint::Plain,
        }
    }
}

/// Guess a styling category for a terminal preview.
///
/// The upstream protocol collapses primitive types into one kind, so for
/// primitives the description itself is the only signal left.
fn style_hint_for(preview: &Preview) -> StyleHint {
    match preview.kind {
        PreviewKind::Object => match preview.subtype {
            Some(PreviewSubtype::Null) => StyleHint::Null,
            Some(PreviewSubtype::Regexp) => StyleHint::Regexp,
            Some(PreviewSubtype::Date) => StyleHint::Date,
            _ => StyleHint::Plain,
        },
        PreviewKind::Primitive => {
            let description = preview.description.as_str();
            if description == "true" || description == "false" {
                StyleHint::Boolean
            } else if description == "undefined" {
                StyleHint::Plain
            } else if description.parse::<f64>().is_ok() {
                StyleHint::Number
            } else if description.starts_with("Symbol(") {
                StyleHint::Symbol
            } else {
                StyleHint::String
            }
        }
    }
}

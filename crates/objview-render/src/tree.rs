use serde::Serialize;
use std::fmt;

/// Ordered tree of display segments produced by a render pass.
///
/// Carries no behavior beyond concatenation; the consuming surface walks the
/// segments to paint markup, ANSI text, or plain text. Two trees are equal
/// iff their flattened text and nesting shape are equal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayTree {
    segments: Vec<Segment>,
}

impl DisplayTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Append literal punctuation or separator text.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Text(text.into()));
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenate every segment, depth first, into plain text.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::TypeName(name) => out.push_str(name),
                Segment::PropertyName(name) => out.push_str(name),
                Segment::Value { text, .. } => out.push_str(text),
                Segment::Nested(tree) => tree.flatten_into(out),
            }
        }
    }
}

impl fmt::Display for DisplayTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}

/// One piece of rendered output.
///
/// The semantic variants exist so a styling surface can color names,
/// annotations, and values differently without re-parsing the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Literal delimiter or separator text
    Text(String),
    /// Type annotation preceding a body, e.g. `"Map "`
    TypeName(String),
    /// Property name inside an object body
    PropertyName(String),
    /// Formatter-produced value text
    Value { text: String, hint: StyleHint },
    /// Output of a recursive render of a nested preview
    Nested(DisplayTree),
}

/// Styling category a formatter attaches to a value segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleHint {
    String,
    Number,
    Boolean,
    Symbol,
    Null,
    Regexp,
    Date,
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_depth_first() {
        let mut inner = DisplayTree::new();
        inner.push(Segment::Value {
            text: "42".to_string(),
            hint: StyleHint::Number,
        });

        let mut tree = DisplayTree::new();
        tree.push_text("{");
        tree.push(Segment::PropertyName("a".to_string()));
        tree.push_text(": ");
        tree.push(Segment::Nested(inner));
        tree.push_text("}");

        assert_eq!(tree.flatten(), "{a: 42}");
        assert_eq!(tree.to_string(), "{a: 42}");
    }

    #[test]
    fn test_equality_includes_nesting_shape() {
        let mut flat = DisplayTree::new();
        flat.push_text("a");

        let mut inner = DisplayTree::new();
        inner.push_text("a");
        let mut nested = DisplayTree::new();
        nested.push(Segment::Nested(inner));

        // Same flattened text, different shape.
        assert_eq!(flat.flatten(), nested.flatten());
        assert_ne!(flat, nested);
    }
}

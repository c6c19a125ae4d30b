use objview_render::{DisplayTree, Segment, StyleHint};
use owo_colors::OwoColorize;

/// Flatten a display tree into a line of text, optionally ANSI-colored by
/// segment kind and style hint.
pub fn render_text(tree: &DisplayTree, enable_color: bool) -> String {
    if !enable_color {
        return tree.flatten();
    }

    let mut out = String::new();
    append_colored(tree, &mut out);
    out
}

fn append_colored(tree: &DisplayTree, out: &mut String) {
    for segment in tree.segments() {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::TypeName(name) => out.push_str(&name.bold().to_string()),
            Segment::PropertyName(name) => out.push_str(&name.cyan().to_string()),
            Segment::Value { text, hint } => out.push_str(&colorize(text, *hint)),
            Segment::Nested(nested) => append_colored(nested, out),
        }
    }
}

fn colorize(text: &str, hint: StyleHint) -> String {
    match hint {
        StyleHint::String => text.green().to_string(),
        StyleHint::Number => text.yellow().to_string(),
        StyleHint::Boolean => text.magenta().to_string(),
        StyleHint::Symbol => text.magenta().to_string(),
        StyleHint::Null => text.bright_black().to_string(),
        StyleHint::Regexp => text.red().to_string(),
        StyleHint::Date => text.blue().to_string(),
        StyleHint::Plain => text.to_string(),
    }
}

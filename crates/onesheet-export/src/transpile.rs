//! One-pager → Typst markup.
//!
//! The page is standard letter width with automatic height, so the layout
//! always produces exactly one page whose height follows the content — the
//! snapshot contract the PDF and PNG exports rely on.

use onesheet_core::models::customization::CustomizationSettings;
use onesheet_core::models::document::OnePagerDocument;

pub fn transpile(document: &OnePagerDocument, customization: &CustomizationSettings) -> String {
    let (r, g, b) = customization.primary_rgb();
    let fonts = customization
        .font_style
        .typefaces()
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();

    out.push_str("#set page(width: 8.5in, height: auto, margin: 0.6in)\n");
    out.push_str(&format!("#set text(font: ({fonts}), size: 10pt)\n"));
    out.push_str(&format!("#let accent = rgb({r}, {g}, {b})\n\n"));

    // Header band.
    out.push_str("#block(fill: accent, inset: 16pt, radius: 4pt, width: 100%)[\n");
    if let Some(logo) = &customization.logo {
        // TODO: embed the actual image through the engine's file resolver
        // instead of this filename-derived brand mark.
        let brand = logo.file_stem().and_then(|s| s.to_str()).unwrap_or("logo");
        out.push_str(&format!(
            "  #text(fill: white, size: 9pt, weight: \"bold\")[{}]\n\n",
            escape(brand)
        ));
    }
    out.push_str(&format!(
        "  #text(fill: white, size: 24pt, weight: \"bold\")[{}]\n\n",
        escape(&document.headline)
    ));
    out.push_str(&format!(
        "  #text(fill: white, size: 12pt)[{}]\n",
        escape(&document.subheadline)
    ));
    out.push_str("]\n\n");

    out.push_str("== The Problem\n");
    out.push_str(&escape(&document.problem));
    out.push_str("\n\n== The Solution\n");
    out.push_str(&escape(&document.solution));
    out.push_str("\n\n");

    // Benefit cards, two per row.
    out.push_str("== Benefits\n#grid(columns: (1fr, 1fr), gutter: 10pt,\n");
    for benefit in &document.benefits {
        out.push_str(&format!(
            "  [*{}* \\ {}],\n",
            escape(&benefit.title),
            escape(&benefit.description)
        ));
    }
    out.push_str(")\n\n");

    out.push_str("== Features\n");
    for feature in &document.features {
        out.push_str(&format!("- {}\n", escape(feature)));
    }
    out.push('\n');

    // Stat callouts.
    out.push_str("#grid(columns: (1fr, 1fr, 1fr), gutter: 10pt,\n");
    for stat in &document.stats {
        out.push_str(&format!(
            "  [#align(center)[#text(size: 20pt, weight: \"bold\", fill: accent)[{}] \\ {}]],\n",
            escape(&stat.value),
            escape(&stat.label)
        ));
    }
    out.push_str(")\n\n");

    // Call to action.
    out.push_str("#align(center)[\n");
    out.push_str(&format!(
        "  #text(size: 11pt)[{}]\n\n",
        escape(&document.cta.text)
    ));
    out.push_str(&format!(
        "  #box(fill: accent, inset: 8pt, radius: 3pt)[#text(fill: white, weight: \"bold\")[{}]]\n",
        escape(&document.cta.primary)
    ));
    out.push_str("  #h(8pt)\n");
    out.push_str(&format!(
        "  #box(stroke: accent, inset: 8pt, radius: 3pt)[#text(fill: accent, weight: \"bold\")[{}]]\n",
        escape(&document.cta.secondary)
    ));
    out.push_str("]\n");

    out
}

/// Escape user text for Typst markup context. Newlines inside a field
/// collapse to spaces so an edit can never break out of its block.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '#' | '[' | ']' | '*' | '_' | '`' | '$' | '@' | '<' | '>' | '~' | '/' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape("50% *off* [now]"), "50% \\*off\\* \\[now\\]");
        assert_eq!(escape("#import \"x\""), "\\#import \"x\"");
        assert_eq!(escape("24/7 support"), "24\\/7 support");
    }

    #[test]
    fn newlines_collapse_to_spaces() {
        assert_eq!(escape("line one\nline two"), "line one line two");
    }
}

//! Serialization of element trees to HTML markup.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Render an element tree to a compact markup string.
pub fn render_to_string(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, &mut out, None);
    out
}

/// Render with one element per line, indented by depth.
pub fn render_pretty(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, &mut out, Some(0));
    out
}

fn render_element(element: &Element, out: &mut String, depth: Option<usize>) {
    if let Some(depth) = depth {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&"  ".repeat(depth));
    }

    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);
    write_attributes(element, out);

    if element.tag.is_void() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                render_element(child, out, depth.map(|d| d + 1));
            }
            if let Some(depth) = depth {
                if !children.is_empty() {
                    out.push('\n');
                    out.push_str(&"  ".repeat(depth));
                }
            }
        }
    }

    let _ = write!(out, "</{tag}>");
}

fn write_attributes(element: &Element, out: &mut String) {
    if let Some(id) = &element.id {
        let _ = write!(out, " id=\"{}\"", escape_attr(id));
    }
    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")));
    }
    if !element.style.is_empty() {
        let style = element
            .style
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(out, " style=\"{}\"", escape_attr(&style));
    }
    for (name, value) in &element.attrs {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }
    for flag in &element.flags {
        let _ = write!(out, " {flag}");
    }
}

/// Escape text for use between tags.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

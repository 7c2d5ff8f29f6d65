//! HTML output for rendered content.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::nodes::{NodeMathError, RenderedNode};
use crate::parser::options::{Options, Plugins};
use crate::render;

const HTML_UNSAFE: [bool; 256] = character_set(b"&<>\"");

const fn character_set(bytes: &[u8]) -> [bool; 256] {
    let mut set = [false; 256];
    let mut i = 0;
    while i < bytes.len() {
        set[bytes[i] as usize] = true;
        i += 1;
    }
    set
}

fn escaped(byte: u8) -> &'static str {
    match byte {
        b'"' => "&quot;",
        b'&' => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        _ => unreachable!(),
    }
}

/// Write `buffer` to `output`, escaping `&`, `<`, `>` and `"`.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    let mut offset = 0;
    for (i, &byte) in buffer.as_bytes().iter().enumerate() {
        if HTML_UNSAFE[byte as usize] {
            output.write_str(&buffer[offset..i])?;
            output.write_str(escaped(byte))?;
            offset = i + 1;
        }
    }
    output.write_str(&buffer[offset..])
}

/// Escape `buffer` into a string, borrowing when nothing needs escaping.
pub fn escape_html(buffer: &str) -> Cow<'_, str> {
    if !buffer.bytes().any(|b| HTML_UNSAFE[b as usize]) {
        return Cow::Borrowed(buffer);
    }

    let mut out = String::with_capacity(buffer.len() + 16);
    for c in buffer.chars() {
        match c {
            '"' | '&' | '<' | '>' => out.push_str(escaped(c as u8)),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Write an opening tag with the given attributes, values escaped.
pub fn write_opening_tag<'a, I>(output: &mut dyn Write, tag: &str, attributes: I) -> fmt::Result
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    write!(output, "<{}", tag)?;
    for (name, value) in attributes {
        write!(output, " {}=\"", name)?;
        escape(output, value)?;
        output.write_str("\"")?;
    }
    output.write_str(">")
}

/// Segment, render and write `content` as HTML, wrapped in a `<span>`.
///
/// Absent content is written as an empty span.
pub fn format_content(
    content: Option<&str>,
    options: &Options,
    plugins: &Plugins,
    output: &mut dyn Write,
) -> fmt::Result {
    let nodes = render::render_content(content, options, plugins);
    format_nodes(&nodes, options, output)
}

/// Write rendered nodes, in order, wrapped in a `<span>`.
pub fn format_nodes(
    nodes: &[RenderedNode],
    options: &Options,
    output: &mut dyn Write,
) -> fmt::Result {
    match options.render.class_name {
        Some(ref class) => write_opening_tag(output, "span", [("class", class.as_str())])?,
        None => output.write_str("<span>")?,
    }
    for node in nodes {
        format_node(node, options, output)?;
    }
    output.write_str("</span>")
}

/// Write a single rendered node.
pub fn format_node(node: &RenderedNode, options: &Options, output: &mut dyn Write) -> fmt::Result {
    match node {
        RenderedNode::Text(text) => escape(output, text),
        RenderedNode::Math(math) => output.write_str(&math.markup),
        RenderedNode::MathError(err) => format_math_error(err, options, output),
    }
}

fn format_math_error(err: &NodeMathError, options: &Options, output: &mut dyn Write) -> fmt::Result {
    let title = format!("LaTeX Error: {}", err.message);
    write_opening_tag(
        output,
        "span",
        [
            ("class", options.render.error_class()),
            ("data-math-style", err.mode.style()),
            ("title", title.as_str()),
        ],
    )?;
    let delimiter = err.mode.delimiter();
    output.write_str(delimiter)?;
    escape(output, &err.source)?;
    output.write_str(delimiter)?;
    output.write_str("</span>")
}

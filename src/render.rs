//! Typesetting math segments and assembling rendered nodes.

use tracing::{debug, warn};

use crate::html;
use crate::nodes::{MathMode, NodeMathError, NodeTypeset, RenderedNode, Segment};
use crate::parser::{self, options::Plugins, Options};

/// Render one math expression.
///
/// Leading and trailing whitespace is trimmed from `source`; nothing else is
/// altered.  A typesetter rejection is returned as
/// [`RenderedNode::MathError`], never as an error.
pub fn render_math(source: &str, mode: MathMode, plugins: &Plugins) -> RenderedNode {
    let source = source.trim();

    let typesetter = match plugins.render.typesetter {
        Some(typesetter) => typesetter,
        None => {
            return RenderedNode::Math(NodeTypeset {
                source: source.to_string(),
                mode,
                markup: format!(
                    "<code data-math-style=\"{}\">{}</code>",
                    mode.style(),
                    html::escape_html(source)
                ),
            });
        }
    };

    match typesetter.typeset(source, mode) {
        Ok(markup) => {
            debug!(%mode, source, "typeset math");
            RenderedNode::Math(NodeTypeset {
                source: source.to_string(),
                mode,
                markup,
            })
        }
        Err(err) => {
            warn!(%mode, source, error = %err, "typesetter rejected math");
            RenderedNode::MathError(NodeMathError {
                source: source.to_string(),
                mode,
                message: err.to_string(),
            })
        }
    }
}

/// Render segments in order.
///
/// Text passes through unchanged; math goes through [`render_math`].  No
/// segments at all gives a single empty text node, so the result is never
/// empty.
pub fn assemble(segments: &[Segment], plugins: &Plugins) -> Vec<RenderedNode> {
    if segments.is_empty() {
        return vec![RenderedNode::Text(String::new())];
    }

    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => RenderedNode::Text(text.clone()),
            Segment::Math(math) => render_math(&math.source, math.mode, plugins),
        })
        .collect()
}

/// Segment and render `content`.  Absent content renders like empty content.
pub fn render_content(
    content: Option<&str>,
    options: &Options,
    plugins: &Plugins,
) -> Vec<RenderedNode> {
    let segments = parser::segment(content.unwrap_or_default(), options);
    assemble(&segments, plugins)
}

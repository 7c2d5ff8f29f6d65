//! Splitting content into text and math segments.

pub mod options;
mod scanner;

pub use crate::parser::options::Options;
pub use crate::parser::scanner::{scan, Scanner};

use crate::nodes::{NodeMath, Segment, Span};

/// Split `content` into text and math segments, in reading order.
///
/// Adjacent segments are contiguous: writing each back in delimited form
/// reproduces the input.  Empty input yields no segments.
///
/// If the trimmed content is exactly one math expression it becomes a single
/// math segment, and surrounding whitespace is dropped.
pub fn segment(content: &str, options: &Options) -> Vec<Segment> {
    if content.is_empty() {
        return vec![];
    }

    if let Some(math) = whole_math(content, options) {
        return vec![Segment::Math(math)];
    }

    segments_from_spans(content, Scanner::new(content))
}

fn whole_math(content: &str, options: &Options) -> Option<NodeMath> {
    let trimmed = content.trim();
    let mut scanner = Scanner::new(trimmed);
    let span = scanner.next()?;
    if span.start != 0 || span.end != trimmed.len() {
        return None;
    }

    let mode = if options.parse.display_mode {
        crate::MathMode::Block
    } else {
        span.mode
    };
    Some(NodeMath {
        source: span.source.to_string(),
        mode,
    })
}

/// Walk ordered, disjoint spans, filling the gaps between them with text.
fn segments_from_spans<'s, I>(content: &'s str, spans: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Span<'s>>,
{
    let mut segments = vec![];
    let mut cursor = 0;

    for span in spans {
        debug_assert!(span.start >= cursor, "spans must be ordered and disjoint");
        if span.start > cursor {
            segments.push(Segment::text(&content[cursor..span.start]));
        }
        segments.push(Segment::math(span.source, span.mode));
        cursor = span.end;
    }

    if cursor < content.len() {
        segments.push(Segment::text(&content[cursor..]));
    }

    segments
}

//! The segment and rendered-node types.

use std::fmt::{self, Display, Formatter};

/// How a math expression is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum MathMode {
    /// Within a line of text, delimited by `$`.
    Inline,

    /// On its own display line, delimited by `$$`.
    Block,
}

impl MathMode {
    /// The delimiter surrounding math in this mode.
    pub fn delimiter(self) -> &'static str {
        match self {
            MathMode::Inline => "$",
            MathMode::Block => "$$",
        }
    }

    /// The value of the `data-math-style` attribute for this mode.
    pub fn style(self) -> &'static str {
        match self {
            MathMode::Inline => "inline",
            MathMode::Block => "display",
        }
    }

    /// Whether this is block (display) math.
    pub fn is_block(self) -> bool {
        self == MathMode::Block
    }
}

impl Display for MathMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.style())
    }
}

/// A delimited math span located by the scanner.
///
/// Offsets are byte offsets into the scanned string.  `end` is exclusive and
/// includes the closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'s> {
    /// Offset of the opening delimiter.
    pub start: usize,

    /// Offset just past the closing delimiter.
    pub end: usize,

    /// The math source between the delimiters, untouched.
    pub source: &'s str,

    /// Whether the span was delimited by `$` or `$$`.
    pub mode: MathMode,
}

impl<'s> Span<'s> {
    /// Whether `offset` falls within `[start, end)`.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// One contiguous, typed piece of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Prose, passed through as literal text.
    Text(String),

    /// A math expression.
    Math(NodeMath),
}

impl Segment {
    /// Shorthand for a text segment.
    pub fn text<S: Into<String>>(text: S) -> Self {
        Segment::Text(text.into())
    }

    /// Shorthand for a math segment.
    pub fn math<S: Into<String>>(source: S, mode: MathMode) -> Self {
        Segment::Math(NodeMath {
            source: source.into(),
            mode,
        })
    }

    /// The segment written back in its delimited form.
    ///
    /// Concatenating this over a segmentation of well-formed input yields the
    /// input again.
    pub fn to_delimited(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Math(math) => {
                let d = math.mode.delimiter();
                format!("{}{}{}", d, math.source, d)
            }
        }
    }
}

/// A math segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMath {
    /// The math source, excluding delimiters.  Not trimmed or unescaped.
    pub source: String,

    /// Inline or block presentation.
    pub mode: MathMode,
}

/// The result of rendering one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
    /// Literal text.  Escaped when written as HTML.
    Text(String),

    /// Markup produced by the typesetter.  Written verbatim.
    Math(NodeTypeset),

    /// A math segment the typesetter rejected.
    MathError(NodeMathError),
}

impl RenderedNode {
    /// Whether this node marks a failed math segment.
    pub fn is_error(&self) -> bool {
        matches!(self, RenderedNode::MathError(..))
    }
}

/// Successfully typeset math.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTypeset {
    /// The (trimmed) source that was typeset.
    pub source: String,

    /// Presentation mode.
    pub mode: MathMode,

    /// Markup returned by the typesetter.
    pub markup: String,
}

/// The error marker substituted for math the typesetter rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMathError {
    /// The (trimmed) source that failed.
    pub source: String,

    /// Presentation mode that was requested.
    pub mode: MathMode,

    /// Short diagnostic from the typesetter.
    pub message: String,
}

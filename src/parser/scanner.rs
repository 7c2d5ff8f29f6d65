//! Delimiter scanner.
//!
//! A single left-to-right pass over the input that tracks whether it is
//! outside math, inside an inline span, or inside a block span.  Every
//! transition happens at a `$`, so the scanner skips between them.

use crate::nodes::{MathMode, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InInline { open: usize },
    InBlock { open: usize },
}

/// Iterator over the math spans of a string, in offset order.
///
/// Spans never overlap.  An opener without a closer produces no span and is
/// left to be read as text.
///
/// ```
/// # use satview::{MathMode, Scanner};
/// let spans: Vec<_> = Scanner::new("$$a $ b$$ and $c$").collect();
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].source, "a $ b");
/// assert_eq!(spans[0].mode, MathMode::Block);
/// assert_eq!(spans[1].source, "c");
/// ```
#[derive(Debug)]
pub struct Scanner<'s> {
    input: &'s str,
    pos: usize,
    state: State,
}

impl<'s> Scanner<'s> {
    /// Create a scanner over `input`.
    pub fn new(input: &'s str) -> Self {
        Scanner {
            input,
            pos: 0,
            state: State::Outside,
        }
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(offset).copied()
    }

    fn find_dollar(&self) -> Option<usize> {
        let matcher = jetscii::bytes!(b'$');
        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }
        matcher.find(&bytes[self.pos..]).map(|offset| self.pos + offset)
    }

    /// Abandon the open span: its first `$` is literal, and scanning resumes
    /// just after it.
    fn back_off(&mut self, open: usize) {
        self.state = State::Outside;
        self.pos = open + 1;
    }

    fn span(&self, start: usize, end: usize, mode: MathMode) -> Span<'s> {
        let width = mode.delimiter().len();
        Span {
            start,
            end,
            source: &self.input[start + width..end - width],
            mode,
        }
    }
}

impl<'s> Iterator for Scanner<'s> {
    type Item = Span<'s>;

    fn next(&mut self) -> Option<Span<'s>> {
        loop {
            let offset = match self.find_dollar() {
                Some(offset) => offset,
                None => match self.state {
                    State::Outside => {
                        self.pos = self.input.len();
                        return None;
                    }
                    State::InInline { open } | State::InBlock { open } => {
                        self.back_off(open);
                        continue;
                    }
                },
            };

            match self.state {
                State::Outside => {
                    if self.byte_at(offset + 1) == Some(b'$') {
                        if self.byte_at(offset + 2) == Some(b'$') {
                            // In a run of three or more, the block opens at
                            // the last `$$`.
                            self.pos = offset + 1;
                            continue;
                        }
                        self.state = State::InBlock { open: offset };
                        self.pos = offset + 2;
                    } else {
                        self.state = State::InInline { open: offset };
                        self.pos = offset + 1;
                    }
                }
                State::InInline { open } => {
                    // An inline opener is never directly followed by `$`, so
                    // the body is non-empty here.
                    self.state = State::Outside;
                    self.pos = offset + 1;
                    return Some(self.span(open, self.pos, MathMode::Inline));
                }
                State::InBlock { open } => {
                    if self.byte_at(offset + 1) != Some(b'$') {
                        // A lone `$` belongs to the block body.
                        self.pos = offset + 1;
                        continue;
                    }
                    if offset == open + 2 {
                        self.back_off(open);
                        continue;
                    }
                    self.state = State::Outside;
                    self.pos = offset + 2;
                    return Some(self.span(open, self.pos, MathMode::Block));
                }
            }
        }
    }
}

/// Collect every math span in `input`.
pub fn scan(input: &str) -> Vec<Span<'_>> {
    Scanner::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(input: &str) -> Vec<(usize, usize, &str, MathMode)> {
        scan(input)
            .into_iter()
            .map(|s| (s.start, s.end, s.source, s.mode))
            .collect()
    }

    #[test]
    fn inline_and_block() {
        assert_eq!(
            spans("a $x$ b $$y$$"),
            vec![(2, 5, "x", MathMode::Inline), (8, 13, "y", MathMode::Block)]
        );
    }

    #[test]
    fn block_swallows_lone_dollar() {
        assert_eq!(
            spans("$$ a $ b $$"),
            vec![(0, 11, " a $ b ", MathMode::Block)]
        );
    }

    #[test]
    fn unclosed_block_falls_back_to_inline() {
        assert_eq!(spans("$$a$"), vec![(1, 4, "a", MathMode::Inline)]);
    }

    #[test]
    fn unclosed_inline_is_text() {
        assert!(spans("costs $5").is_empty());
        assert!(spans("$").is_empty());
    }

    #[test]
    fn empty_bodies_are_text() {
        assert!(spans("$$").is_empty());
        assert!(spans("$$$$").is_empty());
        assert!(spans("$$$").is_empty());
    }

    #[test]
    fn marker_run_opens_block_at_last_pair() {
        assert_eq!(spans("$$$x$$"), vec![(1, 6, "x", MathMode::Block)]);
        assert_eq!(spans("$$$$x$$"), vec![(2, 7, "x", MathMode::Block)]);
    }

    #[test]
    fn multibyte_text_around_math() {
        assert_eq!(
            spans("ĐỀ $x∈ℝ$ hết"),
            vec![(6, 15, "x∈ℝ", MathMode::Inline)]
        );
    }
}

//! Rendering of text that mixes prose with inline (`$...$`) and display
//! (`$$...$$`) LaTeX math, as produced by the SAT solving backend.
//!
//! Content goes through three stages:
//!
//! 1. [`segment`] splits a string into text and math [`Segment`]s in reading
//!    order.
//! 2. [`render::render_math`] typesets each math segment through the
//!    [`TypesetterAdapter`](adapters::TypesetterAdapter) plugged into
//!    [`Plugins`].  A rejected expression becomes an error marker carrying its
//!    source; it never fails the whole render.
//! 3. [`render::assemble`] collects the results, and [`format_nodes`] writes
//!    them as HTML.
//!
//! ```
//! use satview::{content_to_html, Options};
//!
//! assert_eq!(
//!     content_to_html("Solve $x^2=4$ now", &Options::default()),
//!     "<span>Solve <code data-math-style=\"inline\">x^2=4</code> now</span>"
//! );
//! ```
//!
//! The [`solution`] module renders a complete backend payload with the same
//! pipeline.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations)]

pub mod adapters;
mod error;
pub mod html;
pub mod nodes;
mod parser;
pub mod plugins;
pub mod render;
pub mod solution;

pub use crate::error::TypesetError;
pub use crate::html::{format_content, format_nodes};
pub use crate::nodes::{MathMode, RenderedNode, Segment, Span};
pub use crate::parser::options;
pub use crate::parser::options::{Options, Plugins};
pub use crate::parser::{scan, segment, Scanner};
pub use crate::solution::{format_solution, MathSolution};

/// Render `content` to HTML with the default (client-side) math output.
pub fn content_to_html(content: &str, options: &Options) -> String {
    content_to_html_with_plugins(content, options, &Plugins::default())
}

/// Render `content` to HTML, typesetting math with the given plugins.
pub fn content_to_html_with_plugins(content: &str, options: &Options, plugins: &Plugins) -> String {
    let mut out = String::new();
    format_content(Some(content), options, plugins, &mut out)
        .expect("writing to a String cannot fail");
    out
}

/// Render a backend solution payload to HTML.
pub fn solution_to_html_with_plugins(
    solution: &MathSolution,
    problem: Option<&str>,
    options: &Options,
    plugins: &Plugins,
) -> String {
    let mut out = String::new();
    format_solution(solution, problem, options, plugins, &mut out)
        .expect("writing to a String cannot fail");
    out
}

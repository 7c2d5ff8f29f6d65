//! Adapter for the `latex2mathml` typesetter plugin.

use latex2mathml::{latex_to_mathml, DisplayStyle};

use crate::adapters::TypesetterAdapter;
use crate::error::TypesetError;
use crate::nodes::MathMode;

#[derive(Debug, Default, Copy, Clone)]
/// Typesets LaTeX math as MathML, which browsers render natively.
///
/// ```rust
/// # use satview::{content_to_html_with_plugins, Options, Plugins};
/// # use satview::plugins::mathml::MathmlAdapter;
/// let adapter = MathmlAdapter::new();
/// let mut plugins = Plugins::default();
/// plugins.render.typesetter = Some(&adapter);
///
/// let html = content_to_html_with_plugins("so $x^2$", &Options::default(), &plugins);
/// assert!(html.starts_with("<span>so <math"));
/// ```
pub struct MathmlAdapter;

impl MathmlAdapter {
    /// Construct a new `MathmlAdapter`.
    pub fn new() -> Self {
        MathmlAdapter
    }
}

impl TypesetterAdapter for MathmlAdapter {
    fn typeset(&self, source: &str, mode: MathMode) -> Result<String, TypesetError> {
        let style = match mode {
            MathMode::Inline => DisplayStyle::Inline,
            MathMode::Block => DisplayStyle::Block,
        };
        latex_to_mathml(source, style).map_err(|err| TypesetError::rejected(err.to_string()))
    }
}

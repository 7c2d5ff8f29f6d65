//! Configuration for segmentation and rendering.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::TypesetterAdapter;

/// The class given to error markers when [`Render::error_class`] is unset.
pub const DEFAULT_ERROR_CLASS: &str = "math-error";

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Configure segmentation.
    pub parse: Parse,

    /// Configure render-time options.
    pub render: Render,
}

#[derive(Default, Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for the segmenter.
pub struct Parse {
    /// Present content that is exactly one math expression as block math,
    /// even when it is delimited by single `$`.
    ///
    /// Only affects whole-string math; math embedded in prose keeps the mode
    /// its delimiters give it.
    ///
    /// ```rust
    /// # use satview::{content_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(content_to_html("$x=5$", &options),
    ///            "<span><code data-math-style=\"inline\">x=5</code></span>");
    ///
    /// options.parse.display_mode = true;
    /// assert_eq!(content_to_html("$x=5$", &options),
    ///            "<span><code data-math-style=\"display\">x=5</code></span>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub display_mode: bool,
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for formatter functions.
pub struct Render {
    /// Class attribute of the `<span>` wrapping rendered content.
    ///
    /// ```rust
    /// # use satview::{content_to_html, Options};
    /// let mut options = Options::default();
    /// options.render.class_name = Some("answer".to_string());
    /// assert_eq!(content_to_html("x > 1", &options),
    ///            "<span class=\"answer\">x &gt; 1</span>");
    /// ```
    pub class_name: Option<String>,

    /// Class attribute of the marker substituted for math the typesetter
    /// rejects.  [`DEFAULT_ERROR_CLASS`] when unset.
    pub error_class: Option<String>,
}

impl Render {
    /// The error marker class in effect.
    pub fn error_class(&self) -> &str {
        self.error_class.as_deref().unwrap_or(DEFAULT_ERROR_CLASS)
    }
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella plugins struct.
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: RenderPlugins<'p>,
}

#[derive(Default, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Plugins for alternative rendering.
pub struct RenderPlugins<'p> {
    /// The engine math segments are typeset with.
    ///
    /// Without one, math is written as `<code data-math-style="...">` for a
    /// client-side typesetter to pick up.
    ///
    /// ```rust
    /// # use satview::{content_to_html_with_plugins, MathMode, Options, Plugins};
    /// # use satview::adapters::TypesetterAdapter;
    /// # use satview::TypesetError;
    /// struct Shouty;
    ///
    /// impl TypesetterAdapter for Shouty {
    ///     fn typeset(&self, source: &str, _mode: MathMode) -> Result<String, TypesetError> {
    ///         Ok(format!("<b>{}</b>", source.to_uppercase()))
    ///     }
    /// }
    ///
    /// let options = Options::default();
    /// let mut plugins = Plugins::default();
    /// plugins.render.typesetter = Some(&Shouty);
    ///
    /// assert_eq!(content_to_html_with_plugins("so $x$", &options, &plugins),
    ///            "<span>so <b>X</b></span>");
    /// ```
    pub typesetter: Option<&'p dyn TypesetterAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field(
                "typesetter",
                &self.typesetter.map(|_| "impl TypesetterAdapter"),
            )
            .finish()
    }
}

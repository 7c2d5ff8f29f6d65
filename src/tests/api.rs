use crate::adapters::TypesetterAdapter;
use crate::nodes::{NodeMath, NodeMathError, NodeTypeset};
use crate::solution::{Error as SolutionError, Viewport};

use super::*;

#[test]
fn exercise_full_api() {
    let default_options = Options::default();
    let default_plugins = Plugins::default();
    let mut buffer = String::new();

    // Use every member of the exposed API without any defaults.
    // Not looking for specific outputs, just want to know if the API changes shape.

    let _: Vec<Segment> = segment("$x$", &default_options);
    let _: Vec<Span> = scan("$x$");
    let _: Option<Span> = Scanner::new("$x$").next();

    let _: RenderedNode = crate::render::render_math("x", MathMode::Inline, &default_plugins);
    let _: Vec<RenderedNode> = crate::render::assemble(&[], &default_plugins);
    let nodes: Vec<RenderedNode> =
        crate::render::render_content(Some("x"), &default_options, &default_plugins);

    let _: std::fmt::Result = format_nodes(&nodes, &default_options, &mut buffer);
    let _: std::fmt::Result =
        format_content(None, &default_options, &default_plugins, &mut buffer);
    let _: std::fmt::Result = crate::html::escape(&mut buffer, "<");
    let _: std::fmt::Result =
        crate::html::write_opening_tag(&mut buffer, "span", [("class", "a")]);
    let _: String = content_to_html("x", &default_options);
    let _: String = content_to_html_with_plugins("x", &default_options, &default_plugins);

    let _: &str = MathMode::Block.delimiter();
    let _: &str = MathMode::Block.style();
    let _: bool = MathMode::Block.is_block();

    let _: Segment = Segment::Math(NodeMath {
        source: "x".to_string(),
        mode: MathMode::Inline,
    });
    let _: RenderedNode = RenderedNode::Math(NodeTypeset {
        source: "x".to_string(),
        mode: MathMode::Inline,
        markup: "x".to_string(),
    });
    let _: RenderedNode = RenderedNode::MathError(NodeMathError {
        source: "x".to_string(),
        mode: MathMode::Inline,
        message: "bad".to_string(),
    });

    let _: TypesetError = TypesetError::rejected("bad");
    let _: TypesetError = TypesetError::Unavailable;

    let mut parse = options::Parse::default();
    parse.display_mode = false;

    let mut render = options::Render::default();
    render.class_name = Some("content".to_string());
    render.error_class = Some("math-error".to_string());
    let _: &str = render.error_class();

    let _ = Options { parse, render };

    let typesetter = |source: &str, _: MathMode| -> Result<String, TypesetError> {
        Ok(source.to_string())
    };
    let _: Result<String, TypesetError> = typesetter.typeset("x", MathMode::Inline);
    let mut plugins = Plugins::default();
    plugins.render.typesetter = Some(&typesetter);
    let _: String = content_to_html_with_plugins("$x$", &default_options, &plugins);

    let _: Result<MathSolution, SolutionError> = MathSolution::from_json("{}");
    let _: Option<Viewport> = Viewport::parse("x∈[0,1], y∈[0,1]");
}

#[test]
#[cfg(feature = "bon")]
fn builders() {
    let typesetter = MockTypesetter;

    let parse = options::Parse::builder().display_mode(true).build();
    let render = options::Render::builder()
        .class_name("content".to_string())
        .build();
    let plugins = Plugins::builder()
        .render(
            options::RenderPlugins::builder()
                .typesetter(&typesetter)
                .build(),
        )
        .build();

    let options = Options { parse, render };
    compare_strs(
        &content_to_html_with_plugins("$x$", &options, &plugins),
        "<span class=\"content\"><m display>x</m></span>",
        "builders",
        "$x$",
    );
}

use super::*;
use pretty_assertions::assert_eq;
use ntest::test_case;

#[test_case("", "<span></span>")]
#[test_case("plain", "<span>plain</span>")]
#[test_case("a < b & \"c\"", "<span>a &lt; b &amp; &quot;c&quot;</span>")]
#[test_case("it costs $5", "<span>it costs $5</span>")]
#[test_case("$$", "<span>$$</span>")]
fn text_only(input: &str, expected: &str) {
    html(input, expected);
}

#[test_case(
    "Solve $x^2=4$ now",
    "<span>Solve <code data-math-style=\"inline\">x^2=4</code> now</span>"
)]
#[test_case(
    "$$ a $ b $$",
    "<span><code data-math-style=\"display\">a $ b</code></span>"
)]
#[test_case(
    "$a<b$ and $$c>d$$",
    "<span><code data-math-style=\"inline\">a&lt;b</code> and <code data-math-style=\"display\">c&gt;d</code></span>"
)]
fn client_side_math(input: &str, expected: &str) {
    html(input, expected);
}

#[test]
fn display_mode_option() {
    html_opts!(
        [parse.display_mode],
        "$x=5$",
        "<span><code data-math-style=\"display\">x=5</code></span>"
    );
}

#[test]
fn class_name() {
    let mut options = Options::default();
    options.render.class_name = Some("a \"b\"".to_string());
    html_opts_w("x", "<span class=\"a &quot;b&quot;\">x</span>", &options);
}

#[test]
fn typeset_markup_is_verbatim() {
    let typesetter = MockTypesetter;
    let mut plugins = Plugins::default();
    plugins.render.typesetter = Some(&typesetter);
    html_plugins(
        "If $x<1$, then $$y$$.",
        "<span>If <m inline>x<1</m>, then <m display>y</m>.</span>",
        &plugins,
    );
}

#[test]
fn error_marker() {
    let typesetter = MockTypesetter;
    let mut plugins = Plugins::default();
    plugins.render.typesetter = Some(&typesetter);
    html_plugins(
        "Bad: $\\frac{1}{$ ok",
        concat!(
            "<span>Bad: <span class=\"math-error\" data-math-style=\"inline\" ",
            "title=\"LaTeX Error: expected '}'\">$\\frac{1}{$</span> ok</span>"
        ),
        &plugins,
    );
}

#[test]
fn error_marker_block_and_custom_class() {
    let typesetter = MockTypesetter;
    let mut plugins = Plugins::default();
    plugins.render.typesetter = Some(&typesetter);
    let mut options = Options::default();
    options.render.error_class = Some("oops".to_string());

    let output = content_to_html_with_plugins("$$}<x$$", &options, &plugins);
    compare_strs(
        &output,
        concat!(
            "<span><span class=\"oops\" data-math-style=\"display\" ",
            "title=\"LaTeX Error: unexpected '}'\">$$}&lt;x$$</span></span>"
        ),
        "plugins",
        "$$}<x$$",
    );
}

#[test]
fn format_content_absent() {
    let mut out = String::new();
    format_content(None, &Options::default(), &Plugins::default(), &mut out).unwrap();
    assert_eq!(out, "<span></span>");
}

#[test]
fn escape_html_borrows_when_clean() {
    use std::borrow::Cow;
    assert!(matches!(crate::html::escape_html("x^2"), Cow::Borrowed(_)));
    assert_eq!(crate::html::escape_html("ä<ö"), "ä&lt;ö");
}

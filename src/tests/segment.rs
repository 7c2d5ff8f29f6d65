use super::*;
use pretty_assertions::assert_eq;
use ntest::test_case;

#[test]
fn empty() {
    assert_eq!(segments(""), Vec::<Segment>::new());
}

#[test_case("plain prose")]
#[test_case("  leading and trailing  ")]
#[test_case("line one\nline two")]
#[test_case("Cost: 20 USD, 30% off")]
fn no_dollars_is_one_text_segment(input: &str) {
    assert_eq!(segments(input), vec![text(input)]);
}

#[test]
fn mixed_content() {
    assert_eq!(
        segments("Solve $x^2=4$ now"),
        vec![text("Solve "), inline("x^2=4"), text(" now")]
    );
}

#[test]
fn block_takes_precedence() {
    assert_eq!(segments("$$ a $ b $$"), vec![block(" a $ b ")]);
}

#[test]
fn block_between_prose() {
    assert_eq!(
        segments("Then $$y = mx + b$$ follows, with $m$ the slope."),
        vec![
            text("Then "),
            block("y = mx + b"),
            text(" follows, with "),
            inline("m"),
            text(" the slope."),
        ]
    );
}

#[test]
fn whole_string_inline() {
    assert_eq!(segments("$x=5$"), vec![inline("x=5")]);
}

#[test]
fn whole_string_block() {
    assert_eq!(segments("$$x=5$$"), vec![block("x=5")]);
}

#[test]
fn whole_string_ignores_surrounding_whitespace() {
    assert_eq!(segments("  $x=5$\n"), vec![inline("x=5")]);
}

#[test]
fn whole_string_display_mode() {
    let mut options = Options::default();
    options.parse.display_mode = true;
    assert_eq!(segment("$x=5$", &options), vec![block("x=5")]);
    assert_eq!(segment("$$x=5$$", &options), vec![block("x=5")]);
}

#[test]
fn display_mode_leaves_embedded_math_alone() {
    let mut options = Options::default();
    options.parse.display_mode = true;
    assert_eq!(
        segment("so $x$", &options),
        vec![text("so "), inline("x")]
    );
}

#[test]
fn starts_and_ends_with_dollar_but_is_not_one_expression() {
    assert_eq!(
        segments("$a$ and $b$"),
        vec![inline("a"), text(" and "), inline("b")]
    );
}

#[test]
fn adjacent_math() {
    assert_eq!(
        segments("$a$$$b$$$c$"),
        vec![inline("a"), block("b"), inline("c")]
    );
}

#[test_case("$$$x$$", "$", "x")]
#[test_case("$$$$x$$", "$$", "x")]
#[test_case("$$$ a $ b $$", "$", " a $ b ")]
fn extra_markers_before_block_are_literal(input: &str, prefix: &str, body: &str) {
    assert_eq!(segments(input), vec![text(prefix), block(body)]);
}

#[test]
fn unclosed_inline_is_literal() {
    assert_eq!(segments("it costs $5"), vec![text("it costs $5")]);
}

#[test]
fn unclosed_block_is_literal() {
    assert_eq!(segments("$$x + 1"), vec![text("$$x + 1")]);
}

#[test]
fn stray_marker_after_math() {
    assert_eq!(
        segments("$x$ costs $5"),
        vec![inline("x"), text(" costs $5")]
    );
}

#[test]
fn math_source_is_not_trimmed_or_unescaped() {
    assert_eq!(
        segments("see $ \\\\frac{1}{2} $!"),
        vec![text("see "), inline(" \\\\frac{1}{2} "), text("!")]
    );
}

#[test]
fn multiline_block() {
    assert_eq!(
        segments("System:\n$$\nx + y = 3\n$$\nDone."),
        vec![
            text("System:\n"),
            block("\nx + y = 3\n"),
            text("\nDone."),
        ]
    );
}

#[test]
fn non_ascii_prose() {
    assert_eq!(
        segments("Tìm $x$ sao cho $x∈ℝ$."),
        vec![text("Tìm "), inline("x"), text(" sao cho "), inline("x∈ℝ"), text(".")]
    );
}

#[test_case("Solve $x^2=4$ now")]
#[test_case("$$ a $ b $$ then $c$")]
#[test_case("$a$$$b$$$c$")]
#[test_case("stray $ and $$ markers")]
#[test_case("$x$ costs $5")]
#[test_case("$$")]
#[test_case("$$$x$$ and $$$$")]
fn round_trip(input: &str) {
    let rebuilt: String = segments(input).iter().map(Segment::to_delimited).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn spans_are_ordered_and_disjoint() {
    let input = "$$a$$ b $c$ $$ d $ e $$ $f";
    let spans = scan(input);
    assert_eq!(spans.len(), 3);
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    for span in &spans {
        assert!(span.start < span.end);
        assert_eq!(
            &input[span.start..span.end],
            format!("{0}{1}{0}", span.mode.delimiter(), span.source)
        );
    }
}

#[test]
fn no_inline_span_starts_inside_a_block() {
    let input = "x $$ p $q$ r $$ y";
    let spans = scan(input);
    let blocks: Vec<_> = spans.iter().filter(|s| s.mode.is_block()).collect();
    assert_eq!(blocks.len(), 1);
    assert!(spans
        .iter()
        .filter(|s| !s.mode.is_block())
        .all(|s| !blocks.iter().any(|b| b.contains(s.start))));
}

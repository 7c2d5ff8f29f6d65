#![no_main]

use libfuzzer_sys::fuzz_target;

use satview::{content_to_html, segment, Options, Segment};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput<'s> {
    s: &'s str,
    opts: Options,
}

fuzz_target!(|i: FuzzInput| {
    let segments = segment(i.s, &i.opts);

    let trimmed = i.s.trim();
    if !i.opts.parse.display_mode && trimmed == i.s {
        let rebuilt: String = segments.iter().map(Segment::to_delimited).collect();
        assert_eq!(rebuilt, i.s);
    }

    content_to_html(i.s, &i.opts);
});

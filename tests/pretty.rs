use rstest::rstest;
use spanjson::{parse, pretty, pretty_with_options, to_string_pretty, FormatOptions, Indent};

const SAMPLE: &str = r#"{"a":1,"b":[true,null]}"#;

const SAMPLE_PRETTY_2: &str = "{
  \"a\": 1,
  \"b\": [
    true,
    null
  ]
}";

#[rstest]
fn pretty_reindents_at_two_spaces() {
    assert_eq!(pretty(SAMPLE), SAMPLE_PRETTY_2);
}

#[rstest]
fn pretty_reindents_at_four_spaces() {
    let options = FormatOptions::default().with_indent(Indent::spaces(4));
    assert_eq!(
        pretty_with_options(r#"{"a":[1]}"#, &options),
        "{\n    \"a\": [\n        1\n    ]\n}"
    );
}

#[rstest]
fn pretty_reattaches_callback_wrapper() {
    assert_eq!(
        pretty("cb({\"x\":1});"),
        "cb({\n  \"x\": 1\n});"
    );
}

#[rstest]
#[case("not json at all")]
#[case("")]
#[case("cb(oops);")]
// Valid for the relaxed reader but not for a standard encoder; the copy
// path leaves it alone.
#[case(r#"{"n":007}"#)]
fn pretty_falls_back_to_raw(#[case] raw: &str) {
    assert_eq!(pretty(raw), raw);
}

#[rstest]
fn tree_renderer_matches_standard_output_for_plain_json() {
    let root = parse(SAMPLE).expect("parse");
    let rendered = to_string_pretty(&root, &FormatOptions::default());
    assert_eq!(rendered, SAMPLE_PRETTY_2);
    assert_eq!(rendered, pretty(SAMPLE));
}

/// The tree renderer re-emits leaf tokens verbatim, including spellings a
/// standard encoder would rewrite.
#[rstest]
fn tree_renderer_preserves_leaf_tokens() {
    let input = r#"{"s":"a\x41é","n":007,"e":1E+2}"#;
    let root = parse(input).expect("parse");
    let rendered = to_string_pretty(&root, &FormatOptions::default());
    assert_eq!(
        rendered,
        "{\n  \"s\": \"a\\x41é\",\n  \"n\": 007,\n  \"e\": 1E+2\n}"
    );
}

#[rstest]
fn tree_renderer_can_normalize_numbers() {
    let options = FormatOptions::default().with_normalize_numbers(true);
    let root = parse(r#"[007, 1E+2, 2.50]"#).expect("parse");
    assert_eq!(
        to_string_pretty(&root, &options),
        "[\n  7,\n  100,\n  2.5\n]"
    );
}

#[rstest]
fn tree_renderer_keeps_empty_containers_inline() {
    let root = parse(r#"{"a":[],"b":{}}"#).expect("parse");
    assert_eq!(
        to_string_pretty(&root, &FormatOptions::default()),
        "{\n  \"a\": [],\n  \"b\": {}\n}"
    );
}

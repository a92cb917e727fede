use rstest::rstest;
use spanjson::{parse, Node, NodeKind, ParseError, Span, StringNode};

fn parse_string(input: &'static str) -> StringNode<'static> {
    match parse(input).expect("parse") {
        Node::String(node) => node,
        other => panic!("expected string, got {}", other.kind()),
    }
}

#[rstest]
#[case(r#""hello""#, "hello")]
#[case(r#""""#, "")]
#[case(r#""with space""#, "with space")]
#[case("\"\u{6f22}\u{5b57}\"", "\u{6f22}\u{5b57}")]
fn string_source_is_raw_text(#[case] input: &'static str, #[case] expected: &str) {
    let node = parse_string(input);
    assert_eq!(node.source, expected);
    assert_eq!(node.value(), expected);
    assert_eq!(
        node.span,
        Span {
            start: 0,
            end: input.len()
        }
    );
}

#[rstest]
#[case(r#""a\"b""#, r#"a\"b"#)]
#[case(r#""a\\""#, r"a\\")]
#[case(r#""\n\t""#, r"\n\t")]
#[case(r#""A""#, r"A")]
#[case(r#""\x41""#, r"\x41")]
fn string_escapes_are_skipped_not_decoded(#[case] input: &'static str, #[case] expected: &str) {
    // The scanner only decides where the string ends; the escaped text is
    // kept verbatim.
    assert_eq!(parse_string(input).source, expected);
}

#[rstest]
#[case(r#""abc"#)]
#[case(r#""a\""#)]
#[case(r#""a\u00"#)]
#[case(r#""a\x4"#)]
fn unterminated_string_is_eof(#[case] input: &str) {
    assert_eq!(parse(input).unwrap_err(), ParseError::UnexpectedEof);
}

#[rstest]
#[case("\"#fff\"", true)]
#[case("\"#FFFA\"", true)]
#[case("\"#1e90ff\"", true)]
#[case("\"#00ff00cc\"", true)]
#[case("\"#12345\"", false)]
#[case("\"#nothex\"", false)]
#[case("\"1e90ff\"", false)]
fn string_color_detection(#[case] input: &'static str, #[case] color: bool) {
    assert_eq!(parse_string(input).color, color);
}

#[rstest]
#[case("42", 42.0)]
#[case("-3.25", -3.25)]
#[case("0", 0.0)]
#[case("1e3", 1000.0)]
#[case("1E+2", 100.0)]
#[case("2e-1", 0.2)]
#[case("007", 7.0)]
#[case("-0.5e2", -50.0)]
fn number_values(#[case] input: &'static str, #[case] expected: f64) {
    match parse(input).expect("parse") {
        Node::Number(node) => {
            assert_eq!(node.value, expected);
            assert_eq!(node.source, input);
            assert_eq!(
                node.span,
                Span {
                    start: 0,
                    end: input.len()
                }
            );
        }
        other => panic!("expected number, got {}", other.kind()),
    }
}

#[rstest]
#[case("1..2", '.', 2)]
#[case("1.2.3", '.', 3)]
#[case("1.e3", 'e', 2)]
#[case("-x", 'x', 1)]
#[case("2e1.5", '.', 3)]
fn malformed_numbers_name_the_bad_character(
    #[case] input: &str,
    #[case] found: char,
    #[case] offset: usize,
) {
    assert_eq!(
        parse(input).unwrap_err(),
        ParseError::UnexpectedToken { found, offset }
    );
}

#[rstest]
#[case("true", NodeKind::Bool)]
#[case("false", NodeKind::Bool)]
#[case("null", NodeKind::Null)]
fn keywords_parse_as_root(#[case] input: &str, #[case] kind: NodeKind) {
    let node = parse(input).expect("parse");
    assert_eq!(node.kind(), kind);
    assert_eq!(node.end(), input.len());
}

#[rstest]
fn keyword_sources_and_values() {
    assert_eq!(parse("true").unwrap().as_bool(), Some(true));
    assert_eq!(parse("false").unwrap().as_bool(), Some(false));
    assert!(parse("null").unwrap().is_null());
}

#[rstest]
#[case("TRUE", 'T', 0)]
#[case("nul", 'n', 0)]
#[case("+1", '+', 0)]
#[case("undefined", 'u', 0)]
// `nullx` matches the keyword by prefix; the leftover is trailing content.
#[case("nullx", 'x', 4)]
fn unmatched_keywords(#[case] input: &str, #[case] found: char, #[case] offset: usize) {
    assert_eq!(
        parse(input).unwrap_err(),
        ParseError::UnexpectedToken { found, offset }
    );
}

#[rstest]
fn surrounding_whitespace_is_skipped() {
    let node = parse(" \t\r\n 42 \n").expect("parse");
    assert_eq!(node.as_f64(), Some(42.0));
    assert_eq!(node.span(), Span { start: 5, end: 7 });
}

#[rstest]
fn empty_input_is_eof() {
    assert_eq!(parse("").unwrap_err(), ParseError::UnexpectedEof);
    assert_eq!(parse("  \n").unwrap_err(), ParseError::UnexpectedEof);
}

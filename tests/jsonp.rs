use rstest::rstest;
use spanjson::{parse_document, NodeKind, ParseError, Span};

#[rstest]
fn plain_json_has_no_wrapper() {
    let document = parse_document(r#"{"x":1}"#).expect("parse");
    assert!(document.wrapper.is_none());
    assert_eq!(document.payload(), r#"{"x":1}"#);
    assert_eq!(document.root.kind(), NodeKind::Object);
}

#[rstest]
fn callback_wrapper_is_stripped() {
    let raw = r#"callback({"x":1});"#;
    let document = parse_document(raw).expect("parse");
    let wrapper = document.wrapper.as_ref().expect("wrapper");
    assert_eq!(wrapper.prefix, "callback(");
    assert_eq!(wrapper.suffix, ");");
    assert_eq!(wrapper.inner, Span { start: 9, end: 16 });
    assert_eq!(document.payload(), r#"{"x":1}"#);
    // Node offsets are relative to the payload, not the full buffer.
    assert_eq!(document.root.span(), Span { start: 0, end: 7 });
    assert_eq!(document.root.get_key("x").unwrap().as_f64(), Some(1.0));
}

#[rstest]
#[case("cb([1, 2])")]
#[case("window.load_1 ( [1, 2] ) ; \n")]
#[case("jQuery123( [1 ,2 ] );;;")]
fn wrapper_variants_parse(#[case] raw: &str) {
    let document = parse_document(raw).expect("parse");
    assert!(document.wrapper.is_some());
    assert_eq!(document.root.len(), 2);
}

#[rstest]
fn wrapped_payload_must_still_parse() {
    // The unwrap applies textually but the inner text is not JSON, so the
    // plain parse error is the one reported.
    let err = parse_document("cb(oops)").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            found: 'c',
            offset: 0
        }
    );
}

#[rstest]
fn non_wrapped_garbage_reports_plain_error() {
    let err = parse_document("?nope").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            found: '?',
            offset: 0
        }
    );
}

#[rstest]
fn bare_parentheses_are_not_a_callback() {
    // No word character before the parenthesis, so no unwrap applies.
    let err = parse_document("({\"x\":1})").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            found: '(',
            offset: 0
        }
    );
}

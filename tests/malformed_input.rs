use descent_json::{parse, parse_with_options, Error, ParseOptions, TrailingContent, Value};
use rstest::rstest;

#[rstest]
#[case("\"abc", 4)]
#[case("[1,]", 3)]
#[case("01", 1)]
#[case("1.", 2)]
#[case("tru", 0)]
#[case("{\"a\":1", 6)]
#[case("", 0)]
#[case("   ", 3)]
#[case("]", 0)]
#[case("[1}", 2)]
#[case("{\"a\":1]", 6)]
#[case("{\"a\"}", 4)]
#[case("{1:2}", 1)]
#[case("{'a':1}", 1)]
#[case("[1,,2]", 3)]
#[case("[,1]", 1)]
#[case("// comment\n1", 0)]
#[case("[1] [2]", 4)]
fn malformed_input_reports_position(#[case] input: &str, #[case] position: usize) {
    let err = parse(input).unwrap_err();
    assert_eq!(err, Error::UnexpectedCharacter { position });
    assert_eq!(err.to_string(), format!("unexpected char (pos:{position})"));
}

#[rstest]
fn malformed_input_position_never_passes_end() {
    for input in ["\"abc", "[", "{", "{\"a\"", "{\"a\":", "[1,", "-", "1e"] {
        let position = parse(input).unwrap_err().position().unwrap();
        assert!(position <= input.len(), "input {input:?} reported {position}");
    }
}

#[rstest]
#[case("01", Value::Number(0.0))]
#[case("[1] [2]", Value::Array(vec![Value::Number(1.0)]))]
#[case("true garbage", Value::Bool(true))]
fn trailing_content_ignored_when_requested(#[case] input: &str, #[case] expected: Value) {
    let options = ParseOptions::new().with_trailing(TrailingContent::Ignore);
    assert_eq!(parse_with_options(input, &options), Ok(expected));
}

#[rstest]
fn malformed_input_location_reports_line_and_column() {
    let input = "{\n  \"a\": [1,\n  ]\n}";
    let err = parse(input).unwrap_err();
    let location = err.location(input).unwrap();
    assert_eq!((location.line, location.column), (3, 3));
}

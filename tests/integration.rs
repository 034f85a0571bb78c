use std::fmt::Write;
use std::path::PathBuf;

use expect_test::expect;
use sigparse::{
    discover_settings, load_settings, parse_function, split_by_delimiters, MethodParser,
    MethodSignature, SignatureError, WhitespaceMode,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Render a parse result as deterministic, human-readable text.
///
/// One field per line, then one indented line per argument:
///   modifier: <modifier or ->
///   return: <return type>
///   name: <method name>
///   args: <count>
///     <type> <name>
fn describe(result: Result<MethodSignature, SignatureError>) -> String {
    let signature = match result {
        Ok(signature) => signature,
        Err(e) => return format!("error: {}\n", e),
    };

    let mut out = String::new();
    let modifier = signature
        .access_modifier()
        .map(|m| m.as_str())
        .unwrap_or("-");
    writeln!(out, "modifier: {}", modifier).unwrap();
    writeln!(out, "return: {}", signature.return_type()).unwrap();
    writeln!(out, "name: {}", signature.method_name()).unwrap();
    writeln!(out, "args: {}", signature.arguments().len()).unwrap();
    for argument in signature.arguments() {
        writeln!(out, "  {} {}", argument.ty(), argument.name()).unwrap();
    }
    out
}

/// Build a parser from a fixture directory's sigparse.toml.
fn fixture_parser(fixture_dir: &str) -> MethodParser {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_dir);
    let settings = load_settings(&fixture_path.join("sigparse.toml"));
    MethodParser::from_settings(&settings)
}

fn parse_default(source: &str) -> String {
    describe(parse_function(source))
}

fn parse_with(fixture_dir: &str, source: &str) -> String {
    describe(fixture_parser(fixture_dir).parse_function(source))
}

// ---------------------------------------------------------------------------
// Tests — well-formed signatures
// ---------------------------------------------------------------------------

#[test]
fn full_signature() {
    let actual = parse_default("public int sum(int first, int second)");
    let expected = expect![[r#"
        modifier: public
        return: int
        name: sum
        args: 2
          int first
          int second
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn three_arguments_in_order() {
    let actual =
        parse_default("private void log(String logString, LogLevel level, Context context)");
    let expected = expect![[r#"
        modifier: private
        return: void
        name: log
        args: 3
          String logString
          LogLevel level
          Context context
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn no_modifier_no_arguments() {
    let actual = parse_default("void run()");
    let expected = expect![[r#"
        modifier: -
        return: void
        name: run
        args: 0
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn no_modifier_with_arguments() {
    let actual = parse_default("Vector3 distort(int x, int y, int z, float magnitude)");
    let expected = expect![[r#"
        modifier: -
        return: Vector3
        name: distort
        args: 4
          int x
          int y
          int z
          float magnitude
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn public_getter() {
    let actual = parse_default("public DateTime getCurrentDateTime()");
    let expected = expect![[r#"
        modifier: public
        return: DateTime
        name: getCurrentDateTime
        args: 0
    "#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests — tolerant fallbacks
// ---------------------------------------------------------------------------

#[test]
fn name_token_without_paren() {
    let actual = parse_default("protected String describe");
    let expected = expect![[r#"
        modifier: protected
        return: String
        name: describe
        args: 0
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn incomplete_arguments_are_dropped() {
    let actual = parse_default("void put(String, int count, )");
    let expected = expect![[r#"
        modifier: -
        return: void
        name: put
        args: 1
          int count
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn double_space_shifts_positions() {
    let actual = parse_default("private  void log(String value)");
    let expected = expect![[r#"
        modifier: private
        return: 
        name: void
        args: 1
          String value
    "#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests — malformed signatures
// ---------------------------------------------------------------------------

#[test]
fn single_token() {
    let actual = parse_default("x");
    let expected = expect![[r#"
        error: malformed signature 'x': missing method name
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn modifier_and_return_type_only() {
    let actual = parse_default("public void");
    let expected = expect![[r#"
        error: malformed signature 'public void': missing method name
    "#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests — settings fixtures
// ---------------------------------------------------------------------------

#[test]
fn collapse_fixture_normalizes_whitespace() {
    let actual = parse_with("collapse", "  private   void log(String   value)");
    let expected = expect![[r#"
        modifier: private
        return: void
        name: log
        args: 1
          String value
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn collapse_fixture_still_drops_incomplete_arguments() {
    let actual = parse_with("collapse", "void f(int)");
    let expected = expect![[r#"
        modifier: -
        return: void
        name: f
        args: 0
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn collapse_fixture_empty_input() {
    let actual = parse_with("collapse", "   ");
    let expected = expect![[r#"
        error: malformed signature '   ': missing return type
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn strict_fixture_rejects_incomplete_argument() {
    let actual = parse_with("strict", "void put(String, int count)");
    let expected = expect![[r#"
        error: malformed argument 'String' in signature 'void put(String, int count)'
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn invalid_fixture_falls_back_to_defaults() {
    let parser = fixture_parser("invalid");
    assert_eq!(parser, MethodParser::new());
}

#[test]
fn missing_fixture_falls_back_to_defaults() {
    let parser = fixture_parser("does-not-exist");
    assert_eq!(parser, MethodParser::new());
}

#[test]
fn discovered_fixture_configures_parser() {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/strict");
    let found = discover_settings(&fixture_path).unwrap();
    assert_eq!(found, fixture_path.join("sigparse.toml"));

    let parser = MethodParser::from_settings(&load_settings(&found));
    assert_eq!(parser.whitespace(), WhitespaceMode::Collapse);
    assert!(parser.strict_arguments());
}

// ---------------------------------------------------------------------------
// Tests — splitter
// ---------------------------------------------------------------------------

#[test]
fn split_comma_and_space_tokens() {
    let actual = split_by_delimiters("String value, int  level", [",", " "]).join("|");
    let expected = expect![[r#"String|value|int|level"#]];
    expected.assert_eq(&actual);
}

#[test]
fn split_mixed_delimiters() {
    let actual = split_by_delimiters("a,b;c", [",", ";"]).join("|");
    let expected = expect![[r#"a|b|c"#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests — display and serialization
// ---------------------------------------------------------------------------

#[test]
fn display_renders_canonical_form() {
    let signature = parse_function("public int add(int a,int   b)").unwrap();
    assert_eq!(signature.to_string(), "public int add(int a, int b)");
}

#[test]
fn serializes_to_json() {
    let signature = parse_function("protected int add(int a, int b)").unwrap();
    let actual = serde_json::to_string_pretty(&signature).unwrap();
    let expected = expect![[r#"
        {
          "raw_signature": "protected int add(int a, int b)",
          "access_modifier": "protected",
          "return_type": "int",
          "method_name": "add",
          "arguments": [
            {
              "type": "int",
              "name": "a"
            },
            {
              "type": "int",
              "name": "b"
            }
          ]
        }"#]];
    expected.assert_eq(&actual);
}

#[test]
fn deserializes_from_json() {
    let signature = parse_function("void run()").unwrap();
    let json = serde_json::to_string(&signature).unwrap();
    let decoded: MethodSignature = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, signature);
}

//! Printing is a fixed point after one pass: format(parse(format(x))) ==
//! format(x) for every template below.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lurry_fmt::format_program;
use pretty_assertions::assert_eq;

fn format_source(source: &str) -> String {
    let tokens = lurry_lexer::tokenize(source)
        .unwrap_or_else(|e| panic!("lex failed for {source:?}: {e}"));
    let program =
        lurry_parse::parse(&tokens).unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"));
    format_program(&program)
}

fn assert_idempotent(source: &str) {
    let first = format_source(source);
    let second = format_source(&first);
    assert_eq!(first, second, "printing {source:?} is not stable");
}

const TEMPLATES: &[&str] = &[
    "var a = 1 + 2 * 3; println a;",
    "select(table, id) = \"select * from \" + table + \" where id = \" + id;",
    "fun placeholders(n) = \"(\" + \"?, \" * (n - 1) + \"?)\";",
    "var sql = \"select * from users\";\nif id != null { sql = sql + \" where id = \" + id; }\nsql",
    "fun pick(n) { if n > 0 { return \"pos\"; } else if n < 0 return \"neg\"; else return; }",
    "import app.model.User;\ntoUser(id) {\n  var u = User();\n  u.id = id;\n  u.name = #name;\n  return u;\n}",
    "import app.model.User as U; U.table().trim();",
    "var x = -(-1); var y = !(a && b) || c; var z = (x = 3);",
    "{ var inner = 1; { inner = inner * 2.5; } }",
    "var s = \"tab\\there \\\"quoted\\\" back\\\\slash\";",
    "if a { (b); } if a { -b; } if a b; else { }",
    "f(a.b = 1, (c.d = 2).e, (-x).abs());",
    "var big = 123456789012345678901234567890 * 0.001;",
];

#[test]
fn test_templates_are_stable() {
    for source in TEMPLATES {
        assert_idempotent(source);
    }
}

#[test]
fn test_formatted_output_evaluates_the_same() {
    let source = "fun add(a, b) { return a + b * 2; }\nvar r = add(1, 2) - (3 - 1);\nr";
    let original = lurry_parse::parse(&lurry_lexer::tokenize(source).unwrap()).unwrap();
    let formatted = format_program(&original);
    let reparsed = lurry_parse::parse(&lurry_lexer::tokenize(&formatted).unwrap()).unwrap();
    assert_eq!(format_program(&reparsed), formatted);
    assert!(formatted.contains("var r = (add(1, 2) - (3 - 1));"));
}

#[test]
fn test_deep_nesting_prints() {
    let depth = 3000;
    assert_idempotent(&format!("{}{}", "{".repeat(depth), "}".repeat(depth)));
    assert_idempotent(&format!("{}println 1;", "if true ".repeat(depth)));
    assert_idempotent(&format!("{}1{};", "(".repeat(depth), ")".repeat(depth)));
    assert_idempotent(&format!("var x = {}1;", "-".repeat(depth)));
}

#[test]
fn test_deep_if_chain_keeps_one_line() {
    let depth = 3000;
    let printed = format_source(&format!("{}println 1;", "if true ".repeat(depth)));
    assert_eq!(printed, format!("{}println 1;", "if true ".repeat(depth)));
}

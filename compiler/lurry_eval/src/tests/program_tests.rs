use pretty_assertions::assert_eq;

use super::{compile, interpreter, output_of, run_err, run_ok};
use crate::{EvalErrorKind, NumericKind, Value};
use lurry_ir::Position;

#[test]
fn test_var_and_println() {
    let mut interp = interpreter();
    interp
        .execute(&compile("var a = 1 + 2 * 3; println a;"))
        .unwrap();
    assert_eq!(interp.lookup("a").unwrap(), Value::Int(7));
    assert_eq!(interp.print_handler().output(), "7\n");
}

#[test]
fn test_execute_returns_last_value() {
    assert_eq!(run_ok("1; 2; 3"), Value::Int(3));
    assert_eq!(run_ok(""), Value::Null);
    assert_eq!(run_ok("var x = 1;"), Value::Null);
}

#[test]
fn test_top_level_return_stops_program() {
    let mut interp = interpreter();
    let result = interp
        .execute(&compile("return 1; println \"unreachable\";"))
        .unwrap();
    assert_eq!(result, Value::Int(1));
    assert_eq!(interp.print_handler().output(), "");
}

#[test]
fn test_integer_division_truncates() {
    assert_eq!(run_ok("7 / 2"), Value::Int(3));
    assert_eq!(run_ok("-7 / 2"), Value::Int(-3));
    assert_eq!(run_ok("7 / 2 == 3"), Value::Bool(true));
    assert_eq!(run_ok("7.0 / 2"), Value::Double(3.5));
}

#[test]
fn test_literal_widths() {
    assert_eq!(run_ok("2147483647"), Value::Int(i32::MAX));
    assert_eq!(run_ok("2147483648"), Value::Long(2_147_483_648));
    assert_eq!(
        run_ok("99999999999999999999").to_string(),
        "99999999999999999999"
    );
    assert_eq!(run_ok("1.5"), Value::Double(1.5));
}

#[test]
fn test_result_kind_follows_promotion() {
    let cases = [
        ("1 + 1", NumericKind::Int),
        ("1 + 2147483648", NumericKind::Long),
        ("1 + 0.5", NumericKind::Double),
        ("2147483648 * 1.0", NumericKind::Double),
        ("99999999999999999999 - 1", NumericKind::BigInt),
        ("99999999999999999999 + 0.5", NumericKind::BigDecimal),
    ];
    for (source, kind) in cases {
        assert_eq!(
            NumericKind::of(&run_ok(source)),
            Some(kind),
            "kind of {source}"
        );
    }
}

#[test]
fn test_string_concatenation_and_repeat() {
    assert_eq!(
        run_ok(r#"var id = 4; "select * from t where id = " + id"#),
        Value::string("select * from t where id = 4")
    );
    assert_eq!(run_ok(r#""?, " * 2 + "?""#), Value::string("?, ?, ?"));
}

#[test]
fn test_comparison_and_equality() {
    assert_eq!(run_ok("1 < 2"), Value::Bool(true));
    assert_eq!(run_ok("2 >= 2.0"), Value::Bool(true));
    assert_eq!(run_ok(r#""a" == "a""#), Value::Bool(true));
    assert_eq!(run_ok("null == null"), Value::Bool(true));
    assert_eq!(run_ok("1 != 1"), Value::Bool(false));
}

#[test]
fn test_ordering_mismatch_is_error() {
    let err = run_err(r#"1 < "x""#);
    assert_eq!(
        err.kind,
        EvalErrorKind::UnsupportedOperands {
            op: "<",
            left: "int".to_owned(),
            right: "string".to_owned(),
        }
    );
    assert_eq!(err.pos, Position::new(1, 2));
}

#[test]
fn test_logical_short_circuit_skips_right() {
    // The right operand would raise if evaluated.
    assert_eq!(run_ok("false && missing"), Value::Bool(false));
    assert_eq!(run_ok("true || missing"), Value::Bool(true));
}

#[test]
fn test_logical_short_circuit_skips_side_effects() {
    let source = "var probe = 0;\nvar r = false && (probe = 1) == 1;\nr = true || (probe = 2) == 2;\nprobe";
    assert_eq!(run_ok(source), Value::Int(0));
}

#[test]
fn test_logical_requires_booleans() {
    let err = run_err("1 && true");
    assert_eq!(
        err.kind,
        EvalErrorKind::NonBooleanOperand {
            op: "&&",
            type_name: "int".to_owned(),
        }
    );
    let err = run_err("false || 0");
    assert_eq!(
        err.kind,
        EvalErrorKind::NonBooleanOperand {
            op: "||",
            type_name: "int".to_owned(),
        }
    );
}

#[test]
fn test_unary_operators() {
    assert_eq!(run_ok("-(2 + 3)"), Value::Int(-5));
    assert_eq!(run_ok("!(1 < 2)"), Value::Bool(false));
    assert!(matches!(
        run_err("!1").kind,
        EvalErrorKind::NonBooleanOperand { op: "!", .. }
    ));
}

#[test]
fn test_undefined_variable_read() {
    let err = run_err("var a = 1;\nprintln b;");
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "b".to_owned()
        }
    );
    assert_eq!(err.pos, Position::new(2, 9));
}

#[test]
fn test_undefined_variable_assign() {
    let err = run_err("c = 3;");
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "c".to_owned()
        }
    );
    assert_eq!(err.pos, Position::new(1, 0));
}

#[test]
fn test_assignment_yields_value() {
    assert_eq!(run_ok("var a = 1; a = a + 4"), Value::Int(5));
}

#[test]
fn test_block_shadowing() {
    let source = "var x = 1;\n{ var x = 2; x = 3; println x; }\nprintln x;";
    assert_eq!(output_of(source), "3\n1\n");
}

#[test]
fn test_block_assigns_outer_when_not_shadowed() {
    assert_eq!(run_ok("var x = 1; { x = 2; } x"), Value::Int(2));
}

#[test]
fn test_block_scope_is_released() {
    let mut interp = interpreter();
    interp
        .execute(&compile("{ var inner = 1; { var deeper = 2; } }"))
        .unwrap();
    assert_eq!(interp.live_scopes(), 1);
    assert!(interp.lookup("inner").is_err());
}

#[test]
fn test_if_else() {
    assert_eq!(
        output_of("var n = 3; if n > 2 println \"big\"; else println \"small\";"),
        "big\n"
    );
    assert_eq!(
        output_of("if (1 > 2) { println 1; } else { println 2; }"),
        "2\n"
    );
    assert_eq!(run_ok("if false 1"), Value::Null);
}

#[test]
fn test_if_requires_boolean() {
    let err = run_err("if 1 println 2;");
    assert_eq!(
        err.kind,
        EvalErrorKind::NonBooleanCondition {
            type_name: "int".to_owned()
        }
    );
    assert_eq!(err.pos, Position::new(1, 3));
}

#[test]
fn test_division_by_zero_position() {
    let err = run_err("var a = 1;\nvar b = a / 0;");
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.pos, Position::new(2, 11));
}

#[test]
fn test_integer_overflow() {
    assert!(matches!(
        run_err("2147483647 + 1").kind,
        EvalErrorKind::IntegerOverflow { .. }
    ));
}

#[test]
fn test_define_seeds_current_scope() {
    let mut interp = interpreter();
    interp.define("table", Value::string("users"));
    interp.define("table", Value::string("accounts"));
    let sql = interp
        .execute(&compile(r#""select * from " + table"#))
        .unwrap();
    assert_eq!(sql, Value::string("select * from accounts"));
}

#[test]
fn test_global_persists_across_executions() {
    let mut interp = interpreter();
    interp.execute(&compile("var n = 1;")).unwrap();
    let v = interp.execute(&compile("n = n + 1; n")).unwrap();
    assert_eq!(v, Value::Int(2));
}

#[test]
fn test_printed_values_use_display() {
    assert_eq!(
        output_of("println 1.0; println 2 * 1.5; println null; println true;"),
        "1.0\n3.0\nnull\ntrue\n"
    );
}

#[test]
fn test_deeply_nested_blocks() {
    let depth = 3000;
    let source = format!(
        "var x = 0; {}x = x + 1; println x;{}",
        "{".repeat(depth),
        "}".repeat(depth)
    );
    assert_eq!(output_of(&source), "1\n");
}

#[test]
fn test_deeply_nested_ifs() {
    let depth = 3000;
    let source = format!("{}println \"deep\";", "if true ".repeat(depth));
    assert_eq!(output_of(&source), "deep\n");
}

//! S-expression rendering for debugging: `(+ 1 (* 2 3))`.

use lurry_ir::{Expr, ExprKind, FunctionDecl, Literal, Stmt};
use lurry_stack::ensure_sufficient_stack;

use crate::printer::{float_text, quote};

pub fn expr_sexpr(expr: &Expr) -> String {
    ensure_sufficient_stack(|| expr_sexpr_inner(expr))
}

fn expr_sexpr_inner(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(literal) => match literal {
            Literal::Null => "null".to_owned(),
            Literal::Bool(b) => b.to_string(),
            Literal::Int(n) => n.to_string(),
            Literal::BigInt(text) => text.clone(),
            Literal::Float(x) => float_text(*x),
            Literal::Str(s) => quote(s),
        },
        ExprKind::Binary { op, left, right } => {
            parenthesize(op.as_symbol(), [expr_sexpr(left), expr_sexpr(right)])
        }
        ExprKind::Logical { op, left, right } => {
            parenthesize(op.as_symbol(), [expr_sexpr(left), expr_sexpr(right)])
        }
        ExprKind::Unary { op, operand } => parenthesize(op.as_symbol(), [expr_sexpr(operand)]),
        ExprKind::Grouping(inner) => parenthesize("group", [expr_sexpr(inner)]),
        ExprKind::Variable(name) => name.name.clone(),
        ExprKind::Assign { name, value } => {
            parenthesize("=", [name.name.clone(), expr_sexpr(value)])
        }
        ExprKind::Call { callee, args } => parenthesize(
            "call",
            std::iter::once(expr_sexpr(callee)).chain(args.iter().map(expr_sexpr)),
        ),
        ExprKind::MethodCall {
            receiver,
            method,
            args,
        } => parenthesize(
            "method",
            [expr_sexpr(receiver), method.name.clone()]
                .into_iter()
                .chain(args.iter().map(expr_sexpr)),
        ),
        ExprKind::FieldCall {
            receiver,
            field,
            value: None,
        } => parenthesize("get", [expr_sexpr(receiver), field.name.clone()]),
        ExprKind::FieldCall {
            receiver,
            field,
            value: Some(value),
        } => parenthesize(
            "set",
            [expr_sexpr(receiver), field.name.clone(), expr_sexpr(value)],
        ),
    }
}

pub fn stmt_sexpr(stmt: &Stmt) -> String {
    ensure_sufficient_stack(|| stmt_sexpr_inner(stmt))
}

fn stmt_sexpr_inner(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression(expr) => expr_sexpr(expr),
        Stmt::Var { name, initializer } => {
            parenthesize("var", [name.name.clone(), expr_sexpr(initializer)])
        }
        Stmt::Print(expr) => parenthesize("println", [expr_sexpr(expr)]),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => parenthesize(
            "if",
            [expr_sexpr(condition), stmt_sexpr(then_branch)]
                .into_iter()
                .chain(else_branch.as_deref().map(stmt_sexpr)),
        ),
        Stmt::Block(block) => parenthesize("block", block.statements.iter().map(stmt_sexpr)),
        Stmt::Function(decl) => function_sexpr("fun", decl),
        Stmt::Mapper(decl) => function_sexpr("mapper", decl),
        Stmt::Return { value, .. } => {
            parenthesize("return", value.as_ref().map(expr_sexpr))
        }
        Stmt::Import { alias, path } => {
            parenthesize("import", [path.clone(), alias.name.clone()])
        }
    }
}

/// One s-expression per statement, newline separated.
pub fn program_sexpr(statements: &[Stmt]) -> String {
    statements
        .iter()
        .map(stmt_sexpr)
        .collect::<Vec<_>>()
        .join("\n")
}

fn function_sexpr(head: &str, decl: &FunctionDecl) -> String {
    let params = parenthesize_list(decl.params.iter().map(|p| p.name.clone()));
    parenthesize(
        head,
        [decl.name.name.clone(), params]
            .into_iter()
            .chain(decl.body.statements.iter().map(stmt_sexpr)),
    )
}

fn parenthesize(head: &str, parts: impl IntoIterator<Item = String>) -> String {
    let mut out = String::from("(");
    out.push_str(head);
    for part in parts {
        out.push(' ');
        out.push_str(&part);
    }
    out.push(')');
    out
}

fn parenthesize_list(parts: impl IntoIterator<Item = String>) -> String {
    let parts: Vec<String> = parts.into_iter().collect();
    format!("({})", parts.join(" "))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn sexpr(source: &str) -> String {
        let tokens = lurry_lexer::tokenize(source).unwrap();
        program_sexpr(&lurry_parse::parse(&tokens).unwrap())
    }

    #[test]
    fn test_precedence_is_visible() {
        assert_eq!(sexpr("1 + 2 * 3"), "(+ 1 (* 2 3))");
        assert_eq!(sexpr("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
        assert_eq!(sexpr("-a == !b"), "(== (- a) (! b))");
        assert_eq!(sexpr("a || b && c"), "(|| a (&& b c))");
    }

    #[test]
    fn test_calls_and_members() {
        assert_eq!(sexpr("f(1, x)"), "(call f 1 x)");
        assert_eq!(sexpr("u.save(1)"), "(method u save 1)");
        assert_eq!(sexpr("u.name"), "(get u name)");
        assert_eq!(sexpr("u.name = \"a\""), "(set u name \"a\")");
        assert_eq!(sexpr("x = 1"), "(= x 1)");
    }

    #[test]
    fn test_statements() {
        assert_eq!(
            sexpr("var a = 1 + 2 * 3; println a;"),
            "(var a (+ 1 (* 2 3)))\n(println a)"
        );
        assert_eq!(
            sexpr("if a { return 1; } else return;"),
            "(if a (block (return 1)) (return))"
        );
        assert_eq!(
            sexpr("fun add(a, b) = a + b;"),
            "(fun add (a b) (return (+ a b)))"
        );
        assert_eq!(
            sexpr("toUser(id) { #name; }"),
            "(mapper toUser (id) #name)"
        );
        assert_eq!(
            sexpr("import app.User as U;"),
            "(import app.User U)"
        );
    }

    #[test]
    fn test_deep_blocks() {
        let depth = 3000;
        let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
        let rendered = sexpr(&source);
        assert_eq!(rendered.matches("block").count(), depth);
        assert!(rendered.starts_with("(block (block"));
        assert!(rendered.ends_with(&")".repeat(depth)));
    }
}

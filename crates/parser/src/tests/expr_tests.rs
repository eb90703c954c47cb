// Expression Parsing Tests
//
// Tests for literals, the variable, constants, function calls and the
// calculator notations (√, %, ×, ÷, implicit products).

use crate::ast::{BinaryOp, Constant, Expr, Function};
use crate::parse;

fn parse_expr(input: &str) -> Expr {
    parse(input).unwrap_or_else(|e| panic!("Parse error for {:?}: {:?}", input, e))
}

fn num(value: f64) -> Expr {
    Expr::Number(value)
}

// ==================== LITERAL TESTS ====================

#[test]
fn test_literal_int() {
    assert_eq!(parse_expr("42"), num(42.0));
}

#[test]
fn test_literal_decimal() {
    assert_eq!(parse_expr("3.14"), num(3.14));
    assert_eq!(parse_expr(".5"), num(0.5));
}

#[test]
fn test_variable() {
    assert_eq!(parse_expr("x"), Expr::Variable);
}

#[test]
fn test_constants() {
    assert_eq!(parse_expr("pi"), Expr::Constant(Constant::Pi));
    assert_eq!(parse_expr("π"), Expr::Constant(Constant::Pi));
    assert_eq!(parse_expr("e"), Expr::Constant(Constant::E));
}

// ==================== FUNCTION TESTS ====================

#[test]
fn test_every_named_function() {
    for (name, func) in [
        ("sin", Function::Sin),
        ("cos", Function::Cos),
        ("tan", Function::Tan),
        ("cot", Function::Cot),
        ("log", Function::Log),
        ("ln", Function::Ln),
        ("sqrt", Function::Sqrt),
    ] {
        let expr = parse_expr(&format!("{}(x)", name));
        assert_eq!(expr, Expr::call(func, Expr::Variable), "function {}", name);
    }
}

#[test]
fn test_nested_calls() {
    let expr = parse_expr("sqrt(ln(x))");
    assert_eq!(
        expr,
        Expr::call(Function::Sqrt, Expr::call(Function::Ln, Expr::Variable))
    );
}

#[test]
fn test_radical_symbol() {
    assert_eq!(parse_expr("√(16)"), Expr::call(Function::Sqrt, num(16.0)));
    assert_eq!(parse_expr("√x"), Expr::call(Function::Sqrt, Expr::Variable));
}

#[test]
fn test_radical_binds_tighter_than_power() {
    // √x^2 = (√x)^2
    let expr = parse_expr("√x^2");
    assert_eq!(
        expr,
        Expr::pow(Expr::call(Function::Sqrt, Expr::Variable), num(2.0))
    );
}

// ==================== CALCULATOR NOTATION ====================

#[test]
fn test_percent_divides_by_hundred() {
    assert_eq!(parse_expr("50%"), Expr::div(num(50.0), num(100.0)));
}

#[test]
fn test_keypad_operators() {
    let expr = parse_expr("6 × 2 ÷ 3");
    assert_eq!(
        expr,
        Expr::div(Expr::mul(num(6.0), num(2.0)), num(3.0))
    );
}

#[test]
fn test_implicit_product_number_variable() {
    assert_eq!(parse_expr("3x"), Expr::mul(num(3.0), Expr::Variable));
}

#[test]
fn test_implicit_product_with_group() {
    assert_eq!(
        parse_expr("2(x + 1)"),
        Expr::mul(num(2.0), Expr::add(Expr::Variable, num(1.0)))
    );
}

#[test]
fn test_implicit_product_variable_group() {
    // x(x + 1) is a product, not a call
    assert_eq!(
        parse_expr("x(x + 1)"),
        Expr::mul(Expr::Variable, Expr::add(Expr::Variable, num(1.0)))
    );
}

#[test]
fn test_implicit_product_with_constant() {
    assert_eq!(
        parse_expr("2π"),
        Expr::mul(num(2.0), Expr::Constant(Constant::Pi))
    );
}

#[test]
fn test_implicit_product_before_power() {
    // 3x^2 = 3*(x^2)
    assert_eq!(
        parse_expr("3x^2"),
        Expr::mul(num(3.0), Expr::pow(Expr::Variable, num(2.0)))
    );
}

// ==================== COMPOUND TESTS ====================

#[test]
fn test_cubic() {
    let expr = parse_expr("x^3 - 3*x^2 + 2");
    match expr {
        Expr::Binary {
            op: BinaryOp::Add,
            lhs,
            rhs,
        } => {
            assert_eq!(*rhs, num(2.0));
            match *lhs {
                Expr::Binary {
                    op: BinaryOp::Sub, ..
                } => {}
                other => panic!("Expected Sub, got {:?}", other),
            }
        }
        other => panic!("Expected Add at top, got {:?}", other),
    }
}

#[test]
fn test_rational_function() {
    let expr = parse_expr("(2x + 1)/(x - 3)");
    match expr {
        Expr::Binary {
            op: BinaryOp::Div, ..
        } => {}
        other => panic!("Expected Div, got {:?}", other),
    }
}

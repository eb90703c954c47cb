use crate::ast::{BinaryOp, Constant, Expr, Function, VARIABLE};
use chumsky::prelude::*;
use lexer::token::Token;

/// Parser for a complete expression: trailing input is an error
pub fn parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    expr_parser().then_ignore(end())
}

pub fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> + Clone {
    recursive(|expr| {
        let number = select! { Token::Number(text) => text }.try_map(|text: String, span| {
            text.parse::<f64>()
                .map(Expr::Number)
                .map_err(|_| Simple::custom(span, format!("invalid number '{}'", text)))
        });

        let call = select! { Token::Identifier(name) => name }
            .try_map(|name: String, span| {
                Function::from_name(&name)
                    .ok_or_else(|| Simple::custom(span, format!("unknown function '{}'", name)))
            })
            .then(
                expr.clone()
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map(|(func, arg)| Expr::call(func, arg));

        let name = select! { Token::Identifier(name) => name }.try_map(|name: String, span| {
            match name.as_str() {
                VARIABLE => Ok(Expr::Variable),
                "pi" => Ok(Expr::Constant(Constant::Pi)),
                "e" => Ok(Expr::Constant(Constant::E)),
                _ if Function::from_name(&name).is_some() => Err(Simple::custom(
                    span,
                    format!("function '{}' expects a parenthesized argument", name),
                )),
                _ => Err(Simple::custom(span, format!("unknown identifier '{}'", name))),
            }
        });

        let pi = just(Token::Pi).to(Expr::Constant(Constant::Pi));

        let group = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        // IMPORTANT: call must come BEFORE name
        // so that sin(x) is not rejected as a bare function name
        let primary = number.or(call).or(name).or(pi).or(group);

        // √x and √(x + 1)
        let radical = just(Token::Radical)
            .repeated()
            .then(primary)
            .foldr(|_, operand| Expr::call(Function::Sqrt, operand));

        // 50% -> 50 / 100
        let percent = radical
            .then(just(Token::Percent).repeated())
            .foldl(|operand, _| Expr::div(operand, Expr::Number(100.0)))
            .boxed();

        // Right associative: 2^3^2 = 2^(3^2), and the exponent may carry a sign (x^-1)
        let power = recursive(|power| {
            let exponent = sign()
                .repeated()
                .then(power)
                .foldr(apply_sign);

            percent
                .then(just(Token::Caret).ignore_then(exponent).or_not())
                .map(|(base, exponent)| match exponent {
                    Some(exponent) => Expr::pow(base, exponent),
                    None => base,
                })
        })
        .boxed();

        // -x^2 = -(x^2)
        let unary = sign()
            .repeated()
            .then(power.clone())
            .foldr(apply_sign)
            .boxed();

        // 3x, 2(x + 1), x sin(x); never between two literals (3 4 is an error)
        let implicit = power.try_map(|rhs: Expr, span| {
            if rhs.starts_with_number() {
                Err(Simple::custom(span, "missing operator between numbers"))
            } else {
                Ok((BinaryOp::Mul, rhs))
            }
        });

        let product = unary
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .then(unary)
                    .or(implicit)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
            .boxed();

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs));

        sum.boxed()
    })
}

/// Prefix sign: `true` for minus
fn sign() -> impl Parser<Token, bool, Error = Simple<Token>> + Clone {
    just(Token::Minus)
        .to(true)
        .or(just(Token::Plus).to(false))
}

fn apply_sign(negate: bool, operand: Expr) -> Expr {
    if negate {
        Expr::neg(operand)
    } else {
        operand
    }
}

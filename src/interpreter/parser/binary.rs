use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_primary, parse_unary},
            utils::descend,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current nesting level, checked against `MAX_NESTING`.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let column = *column;
            tokens.next();
            depth = descend(depth, column)?;
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`, and implicit
/// multiplication: when a token that can start an operand (number,
/// imaginary literal, name or `(`) directly follows an operand, a `Mul` node
/// is synthesized at the column of that token. This accepts `2(3+4)`,
/// `3i(1+2)` and `x y`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary | unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current nesting level, checked against `MAX_NESTING`.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        let Some((token, column)) = tokens.peek().copied() else {
            break;
        };
        let column = *column;

        let op = if let Some(op) = token_to_binary_operator(token)
                    && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            op
        } else if token.starts_operand() {
            BinaryOperator::Mul
        } else {
            break;
        };

        depth = descend(depth, column)?;
        let right = parse_unary(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                column };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`. The exponent may carry its own sign, so `2 ** -1` is
/// accepted, while a sign in front of the base applies to the whole power:
/// `-2 ** 2` is `-(2 ** 2)`.
///
/// The rule is: `exponent := primary ("**" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting level, checked against `MAX_NESTING`.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, depth)?;

    if let Some((Token::Pow, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        let exponent = parse_unary(tokens, descend(depth, column)?)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   column });
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is an explicit binary
/// operator (`+`, `-`, `*`, `/`, `**`, `=`), `None` for all other tokens.
/// `raiz` is a function and has no operator token.
///
/// # Example
/// ```
/// use complexa::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Pow),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

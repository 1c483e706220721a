use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
            utils::{descend, expect_closing_paren, operand_expected, parse_comma_separated},
        },
        value::complex::ComplexNumber,
    },
};

/// Name of the conjugate function, matched case-insensitively.
const CONJ: &str = "conj";
/// Name of the n-th root function, matched case-insensitively.
const ROOT: &str = "raiz";

/// Parses a unary expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation), nested
/// up to `MAX_NESTING` deep. A sign applies to a whole power, so `-2**2` parses as
/// `-(2**2)`.
///
/// If no sign is present, the function delegates to [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting level, checked against `MAX_NESTING`.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match sign_operator(tokens) {
        Some((op, column)) => {
            let expr = parse_unary(tokens, descend(depth, column)?)?;
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               column })
        },
        None => parse_exponent(tokens, depth),
    }
}

/// Consumes a leading `+` or `-` and returns the matching unary operator.
fn sign_operator<'a, I>(tokens: &mut Peekable<I>) -> Option<(UnaryOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Plus, column)) => (UnaryOperator::Plus, *column),
        Some((Token::Minus, column)) => (UnaryOperator::Negate, *column),
        _ => return None,
    };
    tokens.next();
    Some(op)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - real and imaginary literals
/// - variable names
/// - function calls, `conj(x)` and `raiz(x, n)`
/// - the prefix form `conj x`
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | IMAGINARY
///              | "(" expression ")"
///              | NAME "(" arguments ")"
///              | "conj" signed
///              | NAME
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting level, checked against `MAX_NESTING`.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, column)) = tokens.next() else {
        return Err(operand_expected(&Token::EndOfInput, 0));
    };
    let column = *column;

    match token {
        Token::Number(n) => Ok(Expr::Literal { value: ComplexNumber::new(*n, 0.0),
                                               column }),
        Token::Imaginary(n) => Ok(Expr::Literal { value: ComplexNumber::new(0.0, *n),
                                                  column }),
        Token::LParen => parse_grouping(tokens, column, depth),
        Token::Name(name) => parse_identifier_or_function(tokens, name, column, depth),
        tok => Err(operand_expected(tok, column)),
    }
}

/// Parses the rest of a parenthesized expression.
///
/// The opening parenthesis is already consumed. The enclosed expression may
/// itself contain `=`. Failure to find the closing parenthesis yields
/// `ParseError::ExpectedClosingParen` pointing at the opening one.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         open_column: usize,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, descend(depth, open_column)?)?;
    expect_closing_paren(tokens, open_column)?;
    Ok(expr)
}

/// Parses a variable reference or function call.
///
/// Supported forms:
///
/// - `name`: a variable, case-sensitive
/// - `conj(expr)` and `raiz(expr, expr)`: built-in calls
/// - `conj operand`: conjugate without parentheses
///
/// Function names are matched case-insensitively. Any other name directly
/// followed by `(` is an unknown function.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the name.
/// - `depth`: Current nesting level, checked against `MAX_NESTING`.
/// - `name`: The name as written.
/// - `column`: Column of the name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is followed by `(` but is not a known function,
/// - a call has the wrong number of arguments,
/// - the closing `)` is missing,
/// - the prefix `conj` has no operand.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       name: &str,
                                       column: usize,
                                       depth: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let lowered = name.to_ascii_lowercase();

    if let Some((Token::LParen, open_column)) = tokens.peek() {
        let open_column = *open_column;
        tokens.next();
        return parse_function_call(tokens, name, &lowered, column, open_column, depth);
    }

    if lowered == CONJ {
        let operand = parse_signed_operand(tokens, descend(depth, column)?)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Conj,
                                  expr: Box::new(operand),
                                  column });
    }

    Ok(Expr::Variable { name: name.to_string(),
                        column })
}

/// Parses the arguments of `conj(...)` or `raiz(...)` and builds the node.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              name: &str,
                              lowered: &str,
                              column: usize,
                              open_column: usize,
                              depth: usize)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expected = match lowered {
        CONJ => 1,
        ROOT => 2,
        _ => {
            return Err(ParseError::UnknownFunction { name: name.to_string(),
                                                     column });
        },
    };

    let inner = descend(depth, open_column)?;
    let mut args =
        parse_comma_separated(tokens, |tokens| parse_expression(tokens, inner), open_column)?;
    if args.len() != expected {
        return Err(ParseError::ArgumentCountMismatch { name: lowered.to_string(),
                                                       expected,
                                                       found: args.len(),
                                                       column });
    }

    let first = args.remove(0);
    match args.pop() {
        Some(order) => Ok(Expr::BinaryOp { left: Box::new(first),
                                           op: BinaryOperator::Root,
                                           right: Box::new(order),
                                           column }),
        None => Ok(Expr::UnaryOp { op: UnaryOperator::Conj,
                                   expr: Box::new(first),
                                   column }),
    }
}

/// Parses the operand of a parenthesis-free `conj`: a primary expression
/// with any number of leading signs. A following `**` applies to the
/// conjugate, so `conj z**2` is `(conj z)**2`.
///
/// Grammar: `signed := ("+" | "-") signed | primary`
fn parse_signed_operand<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match sign_operator(tokens) {
        Some((op, column)) => {
            let expr = parse_signed_operand(tokens, descend(depth, column)?)?;
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               column })
        },
        None => parse_primary(tokens, depth),
    }
}

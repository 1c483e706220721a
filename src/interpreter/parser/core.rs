use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single expression tree.
///
/// The sequence must hold exactly one expression followed by
/// [`Token::EndOfInput`]. A stray `)` after the expression is reported as an
/// unmatched parenthesis; any other leftover token as trailing input.
///
/// # Parameters
/// - `tokens`: Tokens with their columns, as produced by
///   [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The root of the parsed expression.
///
/// # Errors
/// - `EmptyExpression` if there is nothing to parse.
/// - `UnmatchedClosingParen` or `UnexpectedTrailingTokens` for leftovers.
/// - Propagates any error from the grammar rules.
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if matches!(tokens.first(), None | Some((Token::EndOfInput, _))) {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        Some((Token::EndOfInput, _)) | None => {
            debug!("parsed expression rooted at column {}", expr.column());
            Ok(expr)
        },
        Some((Token::RParen, column)) => Err(ParseError::UnmatchedClosingParen { column: *column }),
        Some((tok, column)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  tok.to_string(),
                                                       column: *column, })
        },
    }
}

/// Parses a full expression.
///
/// This is the loosest level of the grammar. At most one `=` is accepted; a
/// second one is left unconsumed and reported by the caller, so `a = b = c`
/// is rejected rather than chained.
///
/// Grammar: `expression := additive ("=" additive)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Current nesting level, checked against `MAX_NESTING`.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens, depth)?;

    if let Some((Token::Equals, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        let right = parse_additive(tokens, depth)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: BinaryOperator::Equals,
                                   right: Box::new(right),
                                   column });
    }

    Ok(left)
}

use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Deepest nesting the parser accepts.
///
/// Each parenthesis, sign, power, prefix `conj` and each link of a `+`/`-`
/// or `*`/`/` chain counts as one level. Keeping the tree shallow bounds
/// recursion in the parser, the evaluator, the renderers and `Drop`.
pub const MAX_NESTING: usize = 256;

/// Returns the depth one level below `depth`.
///
/// # Errors
/// `ParseError::NestingTooDeep` once [`MAX_NESTING`] is reached.
pub(in crate::interpreter::parser) const fn descend(depth: usize,
                                                    column: usize)
                                                    -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { column,
                                                limit: MAX_NESTING });
    }
    Ok(depth + 1)
}

/// Parses a comma-separated list of items up to the closing `)`.
///
/// The opening `(` must already be consumed. An immediately encountered `)`
/// produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or `)`.
/// - `parse_item`: Function used to parse each list element.
/// - `open_column`: Column of the opening `(`, for error reporting.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - a token other than `,` or `)` follows an item,
/// - the input ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    open_column: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((Token::EndOfInput, _)) | None => {
                return Err(ParseError::ExpectedClosingParen { column: open_column });
            },
            Some((tok, column)) => {
                return Err(ParseError::UnexpectedToken { expected: "',' or ')'".to_string(),
                                                         found:    tok.to_string(),
                                                         column:   *column, });
            },
        }
    }
    Ok(items)
}

/// Consumes the `)` that closes a group opened at `open_column`.
///
/// # Errors
/// - `ExpectedClosingParen` if the input ends first.
/// - `UnexpectedToken` if another token stands where `)` belongs.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  open_column: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((Token::EndOfInput, _)) | None => {
            Err(ParseError::ExpectedClosingParen { column: open_column })
        },
        Some((tok, column)) => Err(ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                                 found:    tok.to_string(),
                                                                 column:   *column, }),
    }
}

/// Builds the error for a token that cannot start an operand.
///
/// End of input gets its own variant so callers can tell an incomplete
/// expression from a malformed one.
pub(in crate::interpreter::parser) fn operand_expected(token: &Token, column: usize) -> ParseError {
    let expected = "an operand".to_string();
    match token {
        Token::EndOfInput => ParseError::UnexpectedEndOfInput { expected, column },
        tok => ParseError::UnexpectedToken { expected,
                                             found: tok.to_string(),
                                             column },
    }
}

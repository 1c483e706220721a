use std::fmt::Display;

use log::{debug, trace};
use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Where two shapes could match, the longest one wins, so `**` is never read
/// as two `*` and `5i` is never read as `5` followed by `i`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Real literal tokens, such as `3` or `2.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Imaginary literal tokens, such as `4i` or `0.5i`. Carries the
    /// coefficient of `i`.
    #[regex(r"[0-9]+(\.[0-9]+)?i", parse_imaginary)]
    Imaginary(f64),
    /// Identifier tokens; variable names and the function keywords `conj`
    /// and `raiz`. The first character is an ASCII letter or `_`; later ones
    /// may be any Unicode word character.
    #[regex(r"[a-zA-Z_]\w*", |lex| lex.slice().to_string())]
    Name(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `**`
    #[token("**")]
    Pow,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Appended once after the last real token.
    EndOfInput,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Imaginary(n) => write!(f, "imaginary number {n}i"),
            Self::Name(name) => write!(f, "name '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Pow => write!(f, "'**'"),
            Self::Equals => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

impl Token {
    /// Returns `true` if the token can begin an operand without a preceding
    /// operator. Such a token directly after an operand means implicit
    /// multiplication, as in `2(3+4)`, `3i(1+2)` or `x y`.
    ///
    /// Signs are excluded: `2 -3` is a subtraction.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::lexer::Token;
    ///
    /// assert!(Token::LParen.starts_operand());
    /// assert!(Token::Name("x".to_string()).starts_operand());
    /// assert!(!Token::Minus.starts_operand());
    /// ```
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Imaginary(_) | Self::Name(_) | Self::LParen)
    }
}

/// Why a piece of source text could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// The text matches no token shape.
    #[default]
    InvalidCharacter,
    /// A numeric literal too large for a finite `f64`.
    NumberOutOfRange,
}

/// Converts source text into tokens paired with their column.
///
/// Whitespace is skipped. The returned sequence always ends with
/// [`Token::EndOfInput`], positioned at the end of the source.
///
/// # Errors
/// - `ParseError::InvalidCharacter` for the first piece of text that matches
///   no token shape.
/// - `ParseError::NumberOutOfRange` for a literal whose value is not a finite
///   `f64`.
///
/// # Example
/// ```
/// use complexa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2**3i").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Pow, 1),
///                 (Token::Imaginary(3.0), 3),
///                 (Token::EndOfInput, 5)]);
///
/// assert!(tokenize("3 + $").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start;
        match token {
            Ok(tok) => {
                trace!("token {tok} at column {column}");
                tokens.push((tok, column));
            },
            Err(e) => {
                let text = lexer.slice().to_string();
                return Err(match e {
                               LexError::InvalidCharacter => {
                                   ParseError::InvalidCharacter { text, column }
                               },
                               LexError::NumberOutOfRange => {
                                   ParseError::NumberOutOfRange { text, column }
                               },
                           });
            },
        }
    }

    tokens.push((Token::EndOfInput, source.len()));
    debug!("tokenized {} token(s) from {source:?}", tokens.len() - 1);

    Ok(tokens)
}

/// Parses a real literal from the current token slice.
///
/// # Errors
/// `LexError::NumberOutOfRange` if the value is not a finite float.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    finite(lex.slice())
}

/// Parses an imaginary literal, dropping the trailing `i`.
fn parse_imaginary(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    finite(lex.slice().strip_suffix('i').unwrap_or_default())
}

fn finite(digits: &str) -> Result<f64, LexError> {
    digits.parse::<f64>()
          .ok()
          .filter(|v| v.is_finite())
          .ok_or(LexError::NumberOutOfRange)
}

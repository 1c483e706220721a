#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// Every variant carries the column (0-based byte offset into the source)
/// where the problem was detected.
pub enum ParseError {
    /// A character that matches none of the token shapes.
    InvalidCharacter {
        /// The offending text.
        text:   String,
        /// Column of the offending text.
        column: usize,
    },
    /// A numeric literal whose value does not fit in a finite `f64`.
    NumberOutOfRange {
        /// The literal as written.
        text:   String,
        /// Column of the literal.
        column: usize,
    },
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the grammar expected at this point.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Column of the token.
        column:   usize,
    },
    /// Reached the end of input while an operand or delimiter was required.
    UnexpectedEndOfInput {
        /// What the grammar expected at this point.
        expected: String,
        /// Column where the input ended.
        column:   usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Column of the matching `(`.
        column: usize,
    },
    /// A `)` without a matching `(`.
    UnmatchedClosingParen {
        /// Column of the stray `)`.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Column of the extra token.
        column: usize,
    },
    /// A name followed by `(` that is not a known function.
    UnknownFunction {
        /// The function name as written.
        name:   String,
        /// Column of the name.
        column: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// Number of arguments the function takes.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Column of the name.
        column:   usize,
    },
    /// Parentheses, signs, powers or operator chains nest deeper than the
    /// parser allows.
    NestingTooDeep {
        /// Column of the token where the limit was reached.
        column: usize,
        /// The nesting limit.
        limit:  usize,
    },
    /// The input contained no tokens.
    EmptyExpression,
    /// A complex literal such as `3+4i` could not be read.
    InvalidLiteral {
        /// The rejected input.
        input: String,
    },
}

impl ParseError {
    /// Returns `true` for errors raised by the tokenizer rather than the
    /// grammar.
    ///
    /// # Example
    /// ```
    /// use complexa::error::ParseError;
    ///
    /// let err = ParseError::InvalidCharacter { text:   "$".to_string(),
    ///                                          column: 4, };
    /// assert!(err.is_lexical());
    /// assert!(!ParseError::EmptyExpression.is_lexical());
    /// ```
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self,
                 Self::InvalidCharacter { .. } | Self::NumberOutOfRange { .. })
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { text, column } => {
                write!(f, "Lexical error at column {column}: Invalid character '{text}'.")
            },
            Self::NumberOutOfRange { text, column } => {
                write!(f, "Lexical error at column {column}: Numeric literal '{text}' is out of range.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    column, } => write!(f,
                                                        "Syntax error at column {column}: Expected {expected}, found {found}."),
            Self::UnexpectedEndOfInput { expected, column } => write!(f,
                                                                      "Syntax error at column {column}: Expected {expected}, found end of input."),
            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Syntax error at column {column}: Parenthesis opened here is never closed."),
            Self::UnmatchedClosingParen { column } => write!(f,
                                                             "Syntax error at column {column}: Closing parenthesis ')' has no matching '('."),
            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Syntax error at column {column}: Extra tokens after expression: {token}."),
            Self::UnknownFunction { name, column } => {
                write!(f, "Syntax error at column {column}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          column, } => write!(f,
                                                              "Syntax error at column {column}: Function '{name}' takes {expected} argument(s), but {found} were supplied."),
            Self::NestingTooDeep { column, limit } => write!(f,
                                                             "Syntax error at column {column}: Expression nests deeper than {limit} levels."),
            Self::EmptyExpression => write!(f, "Syntax error: Empty expression."),
            Self::InvalidLiteral { input } => {
                write!(f, "Invalid complex number '{input}'. Expected a form such as 3, 4i or 3+4i.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

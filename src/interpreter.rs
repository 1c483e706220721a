/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST with a set of variable bindings and produces
/// a complex number, or a boolean for the equality operator.
///
/// # Responsibilities
/// - Evaluates every node kind, left operand before right.
/// - Resolves variables against the caller's bindings.
/// - Reports undefined variables and the domain errors of complex
///   arithmetic.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression and produces a sequence of tokens:
/// real and imaginary literals, names, operators and delimiters, each paired
/// with its column. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens terminated by an end-of-input marker.
/// - Prefers the longest match (`**` over `*`, `5i` over `5`).
/// - Reports invalid characters with their position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per
/// precedence level, from equality (loosest) down to primary expressions.
///
/// # Responsibilities
/// - Encodes precedence, right-associative power, prefix signs and implicit
///   multiplication.
/// - Recognizes the built-in functions `conj` and `raiz`.
/// - Rejects unbalanced parentheses, trailing input and missing operands.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines `ComplexNumber` with its arithmetic, power and tolerant
///   equality.
/// - Defines the `Value` enum returned by evaluation.
pub mod value;

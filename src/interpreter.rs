/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks each top-level expression, performs the arithmetic,
/// manages variables, user-defined functions and their parameter frames, and
/// renders the output of the program.
///
/// # Responsibilities
/// - Evaluates AST nodes in a fresh context per run.
/// - Resolves names against parameters, variables and functions.
/// - Reports runtime errors such as undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// numbers, identifiers and single-character operators, each tagged with its
/// line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Rejects number literals that do not fit in an `f64`.
pub mod lexer;
/// Per-run configuration.
///
/// Holds the switches that select between compatible and strict behavior,
/// such as how function parameters are scoped.
pub mod options;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt (top-down operator precedence) parser: each token
/// kind maps to an optional prefix handler, an optional infix handler and a
/// left binding power, and a single loop combines them into expression
/// trees.
///
/// # Responsibilities
/// - Converts tokens into a program of top-level expressions.
/// - Encodes operator precedence and associativity as binding powers.
/// - Validates the shape of assignments and function declarations.
pub mod parser;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A name was read as a variable or parameter, or called as a function,
    /// without being defined.
    #[error("Error on line {line}: {name} is undefined.")]
    UndefinedIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function. Only raised
    /// when strict arity checking is enabled.
    #[error("Error on line {line}: Function '{name}' expects {expected} argument(s), but found {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments actually passed.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// User-defined functions called each other deeper than allowed.
    #[error("Error on line {line}: Call to '{name}' exceeds the maximum call depth of {limit}.")]
    CallDepthExceeded {
        /// The function whose call crossed the limit.
        name:  String,
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

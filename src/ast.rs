use std::fmt;

/// An abstract syntax tree (AST) node.
///
/// A program is an ordered list of `Expr` values, one per top-level
/// statement. Statements are plain expressions, assignments or function
/// declarations; the last two only ever appear at the top level because `=`
/// has the lowest binding power of all operators.
///
/// Every variant records the line of the token that introduced it so runtime
/// errors can point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value; always finite.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or function parameter by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Variable assignment: `x = 5`.
    Assignment {
        /// Name of the variable being assigned.
        name:  String,
        /// Expression producing the new value.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function declaration: `square(x) = x * x`.
    FunctionDecl {
        /// Name of the function.
        name:   String,
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// Expression evaluated on every call.
        body:   Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Returns the source line this node was parsed from.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assignment { line, .. }
            | Self::FunctionDecl { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation: `-x`.
    Negate,
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, the truncated remainder with the sign of the dividend.
    Mod,
    /// `^`, exponentiation.
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        f.write_str(symbol)
    }
}

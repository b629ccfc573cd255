use std::{collections::HashMap, rc::Rc};

use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            frame::CallStack,
            function::core::{
                BUILTIN_CONSTANTS, BUILTIN_FUNCTIONS, Function, UserFunction, lookup_builtin,
            },
        },
        options::Options,
    },
    util::num::format_number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state of one run: variables, functions
/// and the parameter frames of calls in progress. A context starts out with
/// the builtin constants and functions and is meant to be discarded once the
/// program has been evaluated; nothing carries over between runs.
pub struct Context {
    /// Variable values by name. Seeded with `pi` and `e`.
    pub variables: HashMap<String, f64>,
    /// Callable functions by name. Seeded with the builtins; declarations
    /// such as `square(x) = x * x` add to it or replace entries.
    pub functions: HashMap<String, Function>,
    /// Parameter frames of the user-defined calls being evaluated.
    pub frames:    CallStack,
    /// The configuration this context was created with.
    pub options:   Options,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Context {
    /// Creates a fresh evaluation context holding only the builtins.
    ///
    /// With [`Options::legacy_tan`] set, `tan` is registered as an alias of
    /// `cos`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let variables = BUILTIN_CONSTANTS.iter()
                                         .map(|(name, value)| ((*name).to_string(), *value))
                                         .collect();

        let mut functions = BUILTIN_FUNCTIONS.iter()
                                             .filter_map(|name| lookup_builtin(name))
                                             .map(|b| (b.name.to_string(), Function::Builtin(b)))
                                             .collect::<HashMap<_, _>>();

        if options.legacy_tan
           && let Some(cos) = lookup_builtin("cos")
        {
            functions.insert("tan".to_string(), Function::Builtin(cos));
        }

        Self { variables,
               functions,
               frames: CallStack::new(options.frame_mode),
               options }
    }

    /// Evaluates a whole program and renders its output.
    ///
    /// Statements run in order, so later ones see the variables and functions
    /// defined by earlier ones. Every statement that produces a value
    /// contributes its canonical decimal form to the output; the forms are
    /// concatenated without a separator. Assignments and declarations
    /// contribute nothing.
    ///
    /// # Errors
    /// The first failing statement aborts the run; its error is returned and
    /// output accumulated so far is dropped.
    ///
    /// # Example
    /// ```
    /// use tdcalc::interpreter::{
    ///     evaluator::core::Context, lexer::tokenize, parser::core::parse_program,
    /// };
    ///
    /// let tokens = tokenize("x = 4\nsqrt(x)\nx * 2").unwrap();
    /// let program = parse_program(&tokens).unwrap();
    ///
    /// assert_eq!(Context::default().evaluate(&program).unwrap(), "28");
    /// ```
    pub fn evaluate(&mut self, program: &[Expr]) -> EvalResult<String> {
        let mut output = String::new();
        for statement in program {
            if let Some(value) = self.eval(statement)? {
                trace!("line {}: {value}", statement.line());
                output.push_str(&format_number(value));
            }
        }
        Ok(output)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, names, unary and
    /// binary operations, calls, assignments and function declarations.
    ///
    /// # Returns
    /// `Some(f64)` for expressions that produce a value, or `None` for
    /// assignments and declarations, which only change the context.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<f64>> {
        match expr {
            Expr::Number { value, .. } => Ok(Some(*value)),
            Expr::Identifier { name, line } => self.eval_variable(name, *line).map(Some),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval_number(expr)?;
                Ok(Some(Self::eval_unary(*op, value)))
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval_number(left)?;
                let right = self.eval_number(right)?;
                Ok(Some(Self::eval_binary(*op, left, right)))
            },
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, *line).map(Some),
            Expr::Assignment { name, value, .. } => {
                let value = self.eval_number(value)?;
                self.variables.insert(name.clone(), value);
                Ok(None)
            },
            Expr::FunctionDecl { name, params, body, .. } => {
                let func = UserFunction { params: params.clone(),
                                          body:   (**body).clone(), };
                self.functions.insert(name.clone(), Function::User(Rc::new(func)));
                Ok(None)
            },
        }
    }

    /// Evaluates an expression that is used as an operand.
    ///
    /// Assignments and declarations have no value; in operand position they
    /// read as NaN. The parser never places them there, but the evaluator
    /// does not rely on it.
    pub fn eval_number(&mut self, expr: &Expr) -> EvalResult<f64> {
        Ok(self.eval(expr)?.unwrap_or(f64::NAN))
    }

    /// Resolves a name, first among the parameters of the active call, then
    /// among the variables.
    ///
    /// # Errors
    /// `UndefinedIdentifier` if the name is in neither place, or is a
    /// parameter that received no argument.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        let value = match self.frames.lookup(name) {
            Some(binding) => binding,
            None => self.variables.get(name).copied(),
        };

        value.ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                                line })
    }
}

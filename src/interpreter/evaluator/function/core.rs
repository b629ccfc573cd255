use std::rc::Rc;

use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        frame::Frame,
        function::{builtin, min_max},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments and cannot fail; domain errors
/// surface as NaN or infinities.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin uses exactly `n` arguments.
/// - `Variadic` means the builtin accepts any number of arguments.
///
/// Arity is only enforced when strict arity checking is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `Builtin` (builtin metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A function that every run starts with.
        pub struct Builtin {
            /// Name the builtin is registered under.
            pub name:  &'static str,
            /// Number of arguments the builtin uses.
            pub arity: Arity,
            /// The implementation.
            pub func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"    => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"    => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"    => { arity: Arity::Exact(1), func: builtin::tan },
    "asin"   => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"   => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"   => { arity: Arity::Exact(1), func: builtin::atan },
    "abs"    => { arity: Arity::Exact(1), func: builtin::abs },
    "round"  => { arity: Arity::Exact(1), func: builtin::round },
    "ceil"   => { arity: Arity::Exact(1), func: builtin::ceil },
    "floor"  => { arity: Arity::Exact(1), func: builtin::floor },
    "log"    => { arity: Arity::Exact(1), func: builtin::log },
    "exp"    => { arity: Arity::Exact(1), func: builtin::exp },
    "sqrt"   => { arity: Arity::Exact(1), func: builtin::sqrt },
    "max"    => { arity: Arity::Variadic, func: |args| min_max::min_max("max", args) },
    "min"    => { arity: Arity::Variadic, func: |args| min_max::min_max("min", args) },
    "random" => { arity: Arity::Exact(0), func: builtin::random },
}

/// Names of the builtin constants and their values.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI),
                                                ("e", std::f64::consts::E)];

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => true,
        }
    }
}

/// Looks up a builtin by name.
///
/// # Example
/// ```
/// use tdcalc::interpreter::evaluator::function::core::lookup_builtin;
///
/// let sqrt = lookup_builtin("sqrt").unwrap();
/// assert_eq!((sqrt.func)(&[9.0]), 3.0);
/// assert!(lookup_builtin("square").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// A function declared in the program, such as `square(x) = x * x`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// Expression evaluated on every call.
    pub body:   Expr,
}

/// Anything that can be called by name.
#[derive(Clone)]
pub enum Function {
    /// One of the functions every run starts with.
    Builtin(&'static Builtin),
    /// A function declared by the program.
    User(Rc<UserFunction>),
}

impl Context {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right before the name is resolved, so
    /// an error inside an argument wins over an unknown function name.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `UndefinedIdentifier` if no function is registered under `name`.
    /// - Propagates errors from the arguments and the callee.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<f64> {
        let arg_vals = arguments.iter()
                                .map(|argument| self.eval_number(argument))
                                .collect::<EvalResult<Vec<_>>>()?;

        let function = self.functions
                           .get(name)
                           .cloned()
                           .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                                              line })?;

        trace!("calling {name} with {arg_vals:?}");
        match function {
            Function::Builtin(builtin) => self.call_builtin(builtin, name, &arg_vals, line),
            Function::User(func) => self.call_user_defined_function(name, &func, arg_vals, line),
        }
    }

    /// Executes a builtin, checking its arity first if strict arity is on.
    fn call_builtin(&self,
                    builtin: &Builtin,
                    name: &str,
                    arg_vals: &[f64],
                    line: usize)
                    -> EvalResult<f64> {
        if self.options.strict_arity
           && let Arity::Exact(expected) = builtin.arity
           && !builtin.arity.check(arg_vals.len())
        {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected,
                                                             found: arg_vals.len(),
                                                             line });
        }
        Ok((builtin.func)(arg_vals))
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound to the supplied arguments in a new frame and the
    /// body is evaluated with it. Extra arguments are dropped; parameters
    /// without an argument are bound to no value, so reading one fails with
    /// `UndefinedIdentifier`. How the frame interacts with frames of calls
    /// already in progress depends on the configured frame mode.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if strict arity is on and the counts differ.
    /// - `CallDepthExceeded` if too many calls are already in progress.
    /// - Propagates errors from the body.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  func: &UserFunction,
                                  arg_vals: Vec<f64>,
                                  line: usize)
                                  -> EvalResult<f64> {
        if self.options.strict_arity && arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: func.params.len(),
                                                             found: arg_vals.len(),
                                                             line });
        }

        if self.frames.depth() >= self.options.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { name: name.to_string(),
                                                         limit: self.options.max_call_depth,
                                                         line });
        }

        let mut values = arg_vals.into_iter();
        let frame = func.params
                        .iter()
                        .map(|param| (param.clone(), values.next()))
                        .collect::<Frame>();

        self.frames.enter(frame);
        let result = self.eval_number(&func.body);
        self.frames.leave();

        result
    }
}

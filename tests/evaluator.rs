use tdcalc::{
    Options,
    ast::{BinaryOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            frame::{CallStack, Frame},
            function::core::{BUILTIN_FUNCTIONS, Function, lookup_builtin},
        },
        lexer::tokenize,
        options::FrameMode,
        parser::core::parse_program,
    },
};

fn evaluate(context: &mut Context, source: &str) -> EvalResult<String> {
    let program = parse_program(&tokenize(source).unwrap()).unwrap();
    context.evaluate(&program)
}

fn frame(bindings: &[(&str, Option<f64>)]) -> Frame {
    bindings.iter().map(|(name, value)| ((*name).to_string(), *value)).collect()
}

#[test]
fn fresh_context_holds_only_builtins() {
    let context = Context::default();

    assert_eq!(context.variables.len(), 2);
    assert_eq!(context.variables["pi"], std::f64::consts::PI);
    assert_eq!(context.variables["e"], std::f64::consts::E);
    assert_eq!(context.functions.len(), BUILTIN_FUNCTIONS.len());
    assert_eq!(context.frames.depth(), 0);
}

#[test]
fn statements_update_the_context() {
    let mut context = Context::default();

    assert_eq!(evaluate(&mut context, "x = 3\nsq(v) = v * v"), Ok(String::new()));
    assert_eq!(context.variables["x"], 3.0);
    assert!(matches!(context.functions["sq"], Function::User(_)));

    assert_eq!(evaluate(&mut context, "sq(x)"), Ok("9".to_string()));
}

#[test]
fn runtime_errors_carry_name_and_line() {
    let mut context = Context::default();

    assert_eq!(evaluate(&mut context, "1\n\nq + 1"),
               Err(RuntimeError::UndefinedIdentifier { name: "q".to_string(),
                                                       line: 3, }));
}

#[test]
fn assignment_keeps_earlier_state_when_it_fails() {
    let mut context = Context::default();

    assert!(evaluate(&mut context, "x = 1\nx = nope").is_err());
    assert_eq!(context.variables["x"], 1.0);
}

#[test]
fn call_stack_is_empty_after_calls() {
    let mut context = Context::default();

    assert_eq!(evaluate(&mut context, "f(x) = x + 1\nf(f(1))"), Ok("3".to_string()));
    assert_eq!(context.frames.depth(), 0);
    assert_eq!(context.frames.lookup("x"), None);
}

#[test]
fn call_stack_is_reset_after_a_failed_call() {
    let mut context = Context::default();

    assert!(evaluate(&mut context, "f(x) = x + nope\nf(1)").is_err());
    assert_eq!(context.frames.depth(), 0);
}

#[test]
fn shared_frames_replace_each_other() {
    let mut stack = CallStack::new(FrameMode::Shared);

    stack.enter(frame(&[("x", Some(1.0))]));
    stack.enter(frame(&[("y", Some(2.0))]));
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.lookup("x"), None);
    assert_eq!(stack.lookup("y"), Some(Some(2.0)));

    stack.leave();
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.lookup("x"), None);
    assert_eq!(stack.lookup("y"), None);
}

#[test]
fn nested_frames_restore_the_caller() {
    let mut stack = CallStack::new(FrameMode::Nested);

    stack.enter(frame(&[("x", Some(1.0))]));
    stack.enter(frame(&[("y", Some(2.0))]));
    assert_eq!(stack.lookup("x"), None);

    stack.leave();
    assert_eq!(stack.lookup("x"), Some(Some(1.0)));
    stack.leave();
    assert_eq!(stack.depth(), 0);
}

#[test]
fn unbound_parameter_is_present_but_empty() {
    let mut stack = CallStack::new(FrameMode::Shared);

    stack.enter(frame(&[("x", None)]));
    assert_eq!(stack.lookup("x"), Some(None));
}

#[test]
fn legacy_tan_swaps_the_registered_builtin() {
    let context = Context::new(Options::default().with_legacy_tan(true));

    let Function::Builtin(tan) = &context.functions["tan"] else {
        panic!("tan should be a builtin");
    };
    assert_eq!(tan.name, "cos");
    assert_eq!((tan.func)(&[0.0]), 1.0);
}

#[test]
fn builtin_table_lookups() {
    let tan = lookup_builtin("tan").unwrap();
    assert!(((tan.func)(&[std::f64::consts::FRAC_PI_4]) - 1.0).abs() < 1e-12);

    let round = lookup_builtin("round").unwrap();
    assert_eq!((round.func)(&[-0.5]), 0.0);
    assert_eq!((round.func)(&[1.5]), 2.0);

    let max = lookup_builtin("max").unwrap();
    assert_eq!((max.func)(&[]), f64::NEG_INFINITY);
}

#[test]
fn round_to_zero_keeps_the_sign() {
    let round = lookup_builtin("round").unwrap();

    assert!((round.func)(&[-0.4]).is_sign_negative());
    assert!((round.func)(&[-0.5]).is_sign_negative());
    assert!((round.func)(&[-0.0]).is_sign_negative());
    assert!((round.func)(&[0.4]).is_sign_positive());
}

#[test]
fn min_max_prefer_the_signed_zero() {
    let min = lookup_builtin("min").unwrap();
    let max = lookup_builtin("max").unwrap();

    assert!((min.func)(&[0.0, -0.0]).is_sign_negative());
    assert!((min.func)(&[-0.0, 0.0]).is_sign_negative());
    assert!((max.func)(&[0.0, -0.0]).is_sign_positive());
    assert!((max.func)(&[-0.0, 0.0]).is_sign_positive());
}

#[test]
fn operators() {
    assert_eq!(Context::eval_unary(UnaryOperator::Negate, 2.0), -2.0);
    assert_eq!(Context::eval_binary(BinaryOperator::Sub, 1.0, 3.0), -2.0);
    assert_eq!(Context::eval_binary(BinaryOperator::Mod, 5.5, 2.0), 1.5);
    assert!(Context::eval_binary(BinaryOperator::Mod, 1.0, 0.0).is_nan());
    assert!(Context::eval_binary(BinaryOperator::Pow, -1.0, f64::INFINITY).is_nan());
    assert_eq!(Context::eval_binary(BinaryOperator::Pow, 0.0, 0.0), 1.0);
}

#[test]
fn depth_limit_applies_per_context() {
    let mut context = Context::new(Options::default().with_max_call_depth(3));

    assert_eq!(evaluate(&mut context, "f(x) = x\ng(x) = f(x)\nh(x) = g(x)\nh(1)"),
               Ok("1".to_string()));
    assert_eq!(evaluate(&mut context, "k(x) = h(x)\nk(1)"),
               Err(RuntimeError::CallDepthExceeded { name:  "f".to_string(),
                                                     limit: 3,
                                                     line:  2, }));
}

use tdcalc::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::core::{ParseResult, left_binding_power, parse_program},
    },
};

fn parse(source: &str) -> ParseResult<Vec<Expr>> {
    parse_program(&tokenize(source).unwrap())
}

fn parse_one(source: &str) -> Expr {
    let mut program = parse(source).unwrap();
    assert_eq!(program.len(), 1, "expected a single statement in {source:?}");
    program.remove(0)
}

fn num(value: f64) -> Expr {
    Expr::Number { value, line: 1 }
}

fn ident(name: &str) -> Expr {
    Expr::Identifier { name: name.to_string(),
                       line: 1 }
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

fn neg(expr: Expr) -> Expr {
    Expr::UnaryOp { op:   UnaryOperator::Negate,
                    expr: Box::new(expr),
                    line: 1, }
}

fn call(name: &str, arguments: Vec<Expr>) -> Expr {
    Expr::Call { name: name.to_string(),
                 arguments,
                 line: 1 }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse_one("2+3*4"),
               bin(num(2.0), BinaryOperator::Add, bin(num(3.0), BinaryOperator::Mul, num(4.0))));
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(parse_one("(2+3)*4"),
               bin(bin(num(2.0), BinaryOperator::Add, num(3.0)), BinaryOperator::Mul, num(4.0)));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(parse_one("1-2-3"),
               bin(bin(num(1.0), BinaryOperator::Sub, num(2.0)), BinaryOperator::Sub, num(3.0)));
    assert_eq!(parse_one("8/4%3"),
               bin(bin(num(8.0), BinaryOperator::Div, num(4.0)), BinaryOperator::Mod, num(3.0)));
}

#[test]
fn power_is_right_associative() {
    assert_eq!(parse_one("2^3^2"),
               bin(num(2.0), BinaryOperator::Pow, bin(num(3.0), BinaryOperator::Pow, num(2.0))));
}

#[test]
fn negation_takes_only_its_atom() {
    assert_eq!(parse_one("-2^2"), bin(neg(num(2.0)), BinaryOperator::Pow, num(2.0)));
    assert_eq!(parse_one("2^-1"), bin(num(2.0), BinaryOperator::Pow, neg(num(1.0))));
}

#[test]
fn calls_and_bare_names() {
    assert_eq!(parse_one("random()"), call("random", vec![]));
    assert_eq!(parse_one("max(1, x+2)"),
               call("max", vec![num(1.0), bin(ident("x"), BinaryOperator::Add, num(2.0))]));
    assert_eq!(parse_one("x"), ident("x"));
}

#[test]
fn assignment() {
    assert_eq!(parse_one("x = 1 + 2"),
               Expr::Assignment { name:  "x".to_string(),
                                  value: Box::new(bin(num(1.0),
                                                      BinaryOperator::Add,
                                                      num(2.0))),
                                  line:  1, });
}

#[test]
fn function_declaration() {
    assert_eq!(parse_one("f(x, y) = x * y"),
               Expr::FunctionDecl { name:   "f".to_string(),
                                    params: vec!["x".to_string(), "y".to_string()],
                                    body:   Box::new(bin(ident("x"),
                                                         BinaryOperator::Mul,
                                                         ident("y"))),
                                    line:   1, });
}

#[test]
fn statements_need_no_separator() {
    assert_eq!(parse("2 3").unwrap(), vec![num(2.0), num(3.0)]);
    assert_eq!(parse("x = 1 x").unwrap().len(), 2);
    assert_eq!(parse("").unwrap(), vec![]);
}

#[test]
fn nodes_record_their_line() {
    let program = parse("1\n\nzz").unwrap();
    assert_eq!(program[1].line(), 3);
}

#[test]
fn missing_operand_is_an_unexpected_end() {
    assert_eq!(parse("1+"),
               Err(ParseError::UnexpectedToken { token: "(end)".to_string(),
                                                 line:  1, }));
}

#[test]
fn stray_tokens_are_unexpected() {
    assert_eq!(parse(")"),
               Err(ParseError::UnexpectedToken { token: ")".to_string(),
                                                 line:  1, }));
    assert_eq!(parse("f(,)"),
               Err(ParseError::UnexpectedToken { token: ",".to_string(),
                                                 line:  1, }));
    assert_eq!(parse("()"),
               Err(ParseError::UnexpectedToken { token: ")".to_string(),
                                                 line:  1, }));
}

#[test]
fn unclosed_parentheses() {
    assert_eq!(parse("(1+2"), Err(ParseError::MissingClosingParen { line: 1 }));
    assert_eq!(parse("max(1, 2"), Err(ParseError::MissingClosingParen { line: 1 }));
}

#[test]
fn assignment_is_not_allowed_inside_groups() {
    assert_eq!(parse("(x = 1)"), Err(ParseError::MissingClosingParen { line: 1 }));
}

#[test]
fn invalid_assignment_targets() {
    assert_eq!(parse("f(2) = 3"), Err(ParseError::InvalidArgumentName { line: 1 }));
    assert_eq!(parse("f(x, y+1) = 3"), Err(ParseError::InvalidArgumentName { line: 1 }));
    assert_eq!(parse("2 = 3"), Err(ParseError::InvalidLvalue { line: 1 }));
    assert_eq!(parse("a + b = 3"), Err(ParseError::InvalidLvalue { line: 1 }));
}

#[test]
fn assignments_do_not_chain() {
    assert_eq!(parse("a = b = 1"), Err(ParseError::InvalidLvalue { line: 1 }));
}

#[test]
fn binding_power_table() {
    use tdcalc::interpreter::lexer::Token;

    assert_eq!(left_binding_power(&Token::Caret), 6);
    assert_eq!(left_binding_power(&Token::Star), 4);
    assert_eq!(left_binding_power(&Token::Percent), 4);
    assert_eq!(left_binding_power(&Token::Minus), 3);
    assert_eq!(left_binding_power(&Token::Equals), 1);
    assert_eq!(left_binding_power(&Token::RParen), 0);
    assert_eq!(left_binding_power(&Token::Number(1.0)), 0);
    assert_eq!(left_binding_power(&Token::End), 0);
}

use postfix::{evaluate, tokenize, ErrorKind, Token};

fn kind_of(expression: &str) -> ErrorKind {
    match evaluate(expression) {
        Ok(v) => panic!("{:?} unexpectedly evaluated to {}", expression, v),
        Err(e) => e.kind(),
    }
}

#[test]
fn sample_expressions() {
    assert_eq!(evaluate("8 2 /"), Ok(4));
    assert_eq!(evaluate("2 6 + 2 * 2 /"), Ok(8));
    assert_eq!(kind_of("1 2 + $ 9 22 * / -"), ErrorKind::InvalidToken);
}

#[test]
fn error_kinds() {
    assert_eq!(kind_of("1 2 + $ 9 22 * /  -"), ErrorKind::InvalidToken);
    assert_eq!(kind_of("5 +"), ErrorKind::InsufficientOperands);
    assert_eq!(kind_of("4 0 /"), ErrorKind::DivisionByZero);
    assert_eq!(kind_of("3 4"), ErrorKind::MalformedExpression);
    assert_eq!(kind_of(""), ErrorKind::MalformedExpression);
    assert_eq!(kind_of("   "), ErrorKind::MalformedExpression);
}

#[test]
fn invalid_token_is_reported() {
    let err = evaluate("1 2 + $ 9 22 * / -").unwrap_err();
    assert_eq!(err.to_string(), "Invalid element: $");
}

#[test]
fn evaluate_from_many_threads() {
    let handles = (0..8u32)
        .map(|i| std::thread::spawn(move || evaluate(&format!("{} 2 * 1 +", i))))
        .collect::<Vec<_>>();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), Ok(2 * i as i64 + 1));
    }
}

#[test]
fn tokens_are_public() {
    assert_eq!(tokenize("7 x").unwrap()[1], Token::Invalid("x".to_string()));
}

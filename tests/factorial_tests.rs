use abacus::{Env, EvalError, Expr, TrigMode};

fn eval(expr: &str) -> Result<f64, EvalError> {
    let env = Env::build(TrigMode::Radians, 0.0, 0.0);
    Expr::parse(expr)?.eval(&env)
}

#[test]
fn small_factorials_are_exact() {
    assert_eq!(eval("factorial(0)").unwrap(), 1.0);
    let mut expected = 1.0;
    for n in 1..=15u32 {
        expected *= f64::from(n);
        assert_eq!(eval(&format!("factorial({n})")).unwrap(), expected);
        assert_eq!(eval(&format!("{n}!")).unwrap(), expected);
    }
}

#[test]
fn near_integer_inputs_are_accepted() {
    assert_eq!(eval("factorial(5.0000000000000004)").unwrap(), 120.0);
}

#[test]
fn negative_and_fractional_inputs_are_domain_errors() {
    match eval("factorial(-1)").unwrap_err() {
        EvalError::Domain(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
    match eval("factorial(2.3)").unwrap_err() {
        EvalError::Domain(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn huge_factorial_saturates_to_infinity() {
    assert!(eval("170!").unwrap().is_finite());
    assert!(eval("171!").unwrap().is_infinite());
}

#[test]
fn non_finite_inputs_are_domain_errors() {
    assert!(matches!(eval("inf!").unwrap_err(), EvalError::Domain(_)));
    assert!(matches!(eval("nan!").unwrap_err(), EvalError::Domain(_)));
}

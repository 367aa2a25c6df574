use abacus::{Env, EvalError, Expr, TrigMode};

fn eval(expr: &str) -> Result<f64, EvalError> {
    let env = Env::build(TrigMode::Radians, 0.0, 0.0);
    Expr::parse(expr)?.eval(&env)
}

#[test]
fn two_plus_two() {
    assert_eq!(eval("2+2").unwrap(), 4.0);
}

#[test]
fn power_alias_with_grouping() {
    assert_eq!(eval("2*(3+4)^2").unwrap(), 98.0);
}

#[test]
fn postfix_factorial() {
    assert_eq!(eval("5!").unwrap(), 120.0);
    assert_eq!(eval("(3+2)!").unwrap(), 120.0);
}

#[test]
fn sqrt_of_two() {
    assert!((eval("sqrt(2)").unwrap() - 1.41421356237).abs() < 1e-11);
}

#[test]
fn ln_alias_is_natural_log() {
    assert!((eval("ln(5)").unwrap() - 1.60943791243).abs() < 1e-11);
}

#[test]
fn ans_and_mem_bind_to_session_values() {
    let env = Env::build(TrigMode::Radians, 6.0, 4.0);
    assert_eq!(Expr::parse("ANS * Mem").unwrap().eval(&env).unwrap(), 24.0);
}

#[test]
fn constants_are_bound() {
    assert!(eval("tau - 2*pi").unwrap().abs() < 1e-15);
    assert!(eval("inf").unwrap().is_infinite());
    assert!(eval("nan").unwrap().is_nan());
    assert!((eval("e").unwrap() - std::f64::consts::E).abs() < 1e-15);
}

#[test]
fn floor_division_and_modulo_follow_divisor_sign() {
    assert_eq!(eval("-7 // 2").unwrap(), -4.0);
    assert_eq!(eval("-7 % 2").unwrap(), 1.0);
    assert_eq!(eval("7 % -2").unwrap(), -1.0);
    assert_eq!(eval("7 // 2").unwrap(), 3.0);
}

#[test]
fn scientific_literals() {
    assert_eq!(eval("1.5e3").unwrap(), 1500.0);
    assert_eq!(eval("2E-2").unwrap(), 0.02);
    assert_eq!(eval(".5 * 4").unwrap(), 2.0);
}

#[test]
fn reuse_parsed_expression_across_environments() {
    let expr = Expr::parse("ans + 1").unwrap();
    let a = expr.eval(&Env::build(TrigMode::Radians, 1.0, 0.0)).unwrap();
    let b = expr.eval(&Env::build(TrigMode::Radians, 41.0, 0.0)).unwrap();
    assert_eq!(a, 2.0);
    assert_eq!(b, 42.0);
}

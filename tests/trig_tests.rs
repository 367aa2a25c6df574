use abacus::{Env, EvalError, Expr, TrigMode};

fn eval_mode(expr: &str, mode: TrigMode) -> f64 {
    Expr::parse(expr)
        .unwrap()
        .eval(&Env::build(mode, 0.0, 0.0))
        .unwrap()
}

#[test]
fn sin_30_degrees() {
    assert!((eval_mode("sin(30)", TrigMode::Degrees) - 0.5).abs() < 1e-12);
}

#[test]
fn sin_30_radians() {
    // sin of 30 radians, not degrees
    assert!((eval_mode("sin(30)", TrigMode::Radians) + 0.98803162).abs() < 1e-8);
}

#[test]
fn forward_trig_converts_input() {
    assert!((eval_mode("cos(60)", TrigMode::Degrees) - 0.5).abs() < 1e-12);
    assert!((eval_mode("tan(45)", TrigMode::Degrees) - 1.0).abs() < 1e-12);
    assert!((eval_mode("sin(pi/6)", TrigMode::Radians) - 0.5).abs() < 1e-12);
}

#[test]
fn inverse_trig_converts_output() {
    assert!((eval_mode("asin(0.5)", TrigMode::Degrees) - 30.0).abs() < 1e-12);
    assert!((eval_mode("acos(0.5)", TrigMode::Degrees) - 60.0).abs() < 1e-12);
    assert!((eval_mode("atan(1)", TrigMode::Degrees) - 45.0).abs() < 1e-12);
    assert!(
        (eval_mode("asin(1)", TrigMode::Radians) - std::f64::consts::FRAC_PI_2).abs() < 1e-15
    );
}

#[test]
fn inverse_trig_domain() {
    let env = Env::build(TrigMode::Degrees, 0.0, 0.0);
    let err = Expr::parse("asin(2)").unwrap().eval(&env).unwrap_err();
    assert!(matches!(err, EvalError::Domain(_)));
    let err = Expr::parse("acos(-1.5)").unwrap().eval(&env).unwrap_err();
    assert!(matches!(err, EvalError::Domain(_)));
}

#[test]
fn mode_setter_accepts_any_case() {
    let mut mode = TrigMode::Radians;
    mode.set("DEG").unwrap();
    assert_eq!(mode, TrigMode::Degrees);
    mode.set("Rad").unwrap();
    assert_eq!(mode, TrigMode::Radians);
}

#[test]
fn mode_setter_rejects_unknown_and_keeps_mode() {
    let mut mode = TrigMode::Degrees;
    match mode.set("grad") {
        Err(EvalError::InvalidMode(s)) => assert_eq!(s, "grad"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(mode, TrigMode::Degrees);
}

#[test]
fn default_mode_is_radians() {
    assert_eq!(TrigMode::default(), TrigMode::Radians);
}

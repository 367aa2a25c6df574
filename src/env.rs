use std::collections::HashMap;
use std::f64::consts;

use crate::error::EvalError;
use crate::trig::TrigMode;

type Builtin = Box<dyn Fn(&[f64]) -> Result<f64, EvalError>>;

/// Bindings for a single evaluation: constants and session variables by
/// name, plus the whitelisted functions. Built fresh per call; nothing in
/// the core persists between evaluations.
pub struct Env {
    names: HashMap<&'static str, f64>,
    funcs: HashMap<&'static str, Builtin>,
}

impl Env {
    /// Assembles the bindings for one evaluation. The trig entries pass
    /// through the mode adapter so callers see degrees or radians per
    /// `mode`; `ans` and `mem` are the caller's session values.
    pub fn build(mode: TrigMode, ans: f64, mem: f64) -> Self {
        let mut names = HashMap::new();
        names.insert("pi", consts::PI);
        names.insert("e", consts::E);
        names.insert("tau", consts::TAU);
        names.insert("inf", f64::INFINITY);
        names.insert("nan", f64::NAN);
        names.insert("ans", ans);
        names.insert("mem", mem);

        let mut funcs: HashMap<&'static str, Builtin> = HashMap::new();
        funcs.insert("abs", unary("abs", |x| Ok(x.abs())));
        funcs.insert("round", unary("round", |x| Ok(x.round_ties_even())));
        funcs.insert("floor", unary("floor", |x| Ok(x.floor())));
        funcs.insert("ceil", unary("ceil", |x| Ok(x.ceil())));
        funcs.insert(
            "sqrt",
            unary("sqrt", |x| {
                if x < 0.0 {
                    return Err(EvalError::Domain("sqrt() of a negative number".into()));
                }
                Ok(x.sqrt())
            }),
        );
        funcs.insert(
            "exp",
            unary("exp", |x| {
                let out = x.exp();
                if out.is_infinite() && x.is_finite() {
                    return Err(EvalError::Overflow);
                }
                Ok(out)
            }),
        );
        // log(x) is the natural log; log(x, b) rebases via ln(x)/ln(b).
        funcs.insert(
            "log",
            Box::new(|args: &[f64]| match args {
                [x] => ln_checked(*x),
                [x, base] => {
                    if *base <= 0.0 || *base == 1.0 {
                        return Err(EvalError::Domain(
                            "log() base must be positive and not 1".into(),
                        ));
                    }
                    Ok(ln_checked(*x)? / base.ln())
                }
                _ => Err(EvalError::Arity {
                    name: "log",
                    expected: "1 or 2",
                    got: args.len(),
                }),
            }),
        );
        funcs.insert(
            "log10",
            unary("log10", |x| {
                if x <= 0.0 {
                    return Err(EvalError::Domain("log10() of a non-positive number".into()));
                }
                Ok(x.log10())
            }),
        );
        funcs.insert("sin", forward(mode, "sin", f64::sin));
        funcs.insert("cos", forward(mode, "cos", f64::cos));
        funcs.insert("tan", forward(mode, "tan", f64::tan));
        funcs.insert("asin", inverse(mode, "asin", f64::asin));
        funcs.insert("acos", inverse(mode, "acos", f64::acos));
        funcs.insert("atan", {
            // atan accepts the whole real line; only the output converts.
            let g = mode.wrap_inverse(f64::atan);
            unary("atan", move |x| Ok(g(x)))
        });
        funcs.insert("factorial", unary("factorial", factorial));

        Self { names, funcs }
    }

    pub(crate) fn name(&self, name: &str) -> Result<f64, EvalError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownName(name.to_string()))
    }

    pub(crate) fn call(&self, name: &str, args: &[f64]) -> Result<f64, EvalError> {
        let f = self
            .funcs
            .get(name)
            .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
        f(args)
    }
}

fn unary(name: &'static str, f: impl Fn(f64) -> Result<f64, EvalError> + 'static) -> Builtin {
    Box::new(move |args| match args {
        [x] => f(*x),
        _ => Err(EvalError::Arity {
            name,
            expected: "1",
            got: args.len(),
        }),
    })
}

fn forward(mode: TrigMode, name: &'static str, f: fn(f64) -> f64) -> Builtin {
    let g = mode.wrap_forward(f);
    unary(name, move |x| Ok(g(x)))
}

fn inverse(mode: TrigMode, name: &'static str, f: fn(f64) -> f64) -> Builtin {
    let g = mode.wrap_inverse(f);
    unary(name, move |x| {
        if !(-1.0..=1.0).contains(&x) {
            return Err(EvalError::Domain(format!("{name}() input outside [-1, 1]")));
        }
        Ok(g(x))
    })
}

fn ln_checked(x: f64) -> Result<f64, EvalError> {
    if x <= 0.0 {
        return Err(EvalError::Domain("log() of a non-positive number".into()));
    }
    Ok(x.ln())
}

/// Factorial of a value within 1e-12 of a non-negative integer.
fn factorial(x: f64) -> Result<f64, EvalError> {
    let n = x.round();
    if !x.is_finite() || (x - n).abs() > 1e-12 || n < 0.0 {
        return Err(EvalError::Domain(
            "factorial() only defined for non-negative integers".into(),
        ));
    }
    if n > 170.0 {
        // 171! exceeds the f64 range; inf is the representational limit.
        return Ok(f64::INFINITY);
    }
    let mut acc = 1.0;
    for i in 2..=n as u32 {
        acc *= f64::from(i);
    }
    Ok(acc)
}

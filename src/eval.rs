use crate::ast::{Ast, BinOp, UnOp};
use crate::env::Env;
use crate::error::EvalError;

/// Walks the tree and produces a value. The match is exhaustive over the
/// node kinds with no fallback arm; a new node kind cannot compile without
/// an explicit handler here.
pub(crate) fn eval_ast(ast: &Ast, env: &Env) -> Result<f64, EvalError> {
    match ast {
        Ast::Num(v) => Ok(*v),
        Ast::Var(name) => env.name(name),
        Ast::Unary(op, a) => {
            let v = eval_ast(a, env)?;
            Ok(match op {
                UnOp::Plus => v,
                UnOp::Minus => -v,
            })
        }
        Ast::Bin(op, a, b) => {
            // Left operand evaluates fully before the right.
            let l = eval_ast(a, env)?;
            let r = eval_ast(b, env)?;
            apply(*op, l, r)
        }
        Ast::Call { name, args } => {
            let mut vals = Vec::with_capacity(args.len());
            for a in args {
                vals.push(eval_ast(a, env)?);
            }
            env.call(name, &vals)
        }
    }
}

fn apply(op: BinOp, l: f64, r: f64) -> Result<f64, EvalError> {
    match op {
        BinOp::Add => Ok(l + r),
        BinOp::Sub => Ok(l - r),
        BinOp::Mul => Ok(l * r),
        BinOp::Div => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(l / r)
        }
        BinOp::FloorDiv => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok((l / r).floor())
        }
        BinOp::Mod => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            // Floor semantics: the result takes the divisor's sign.
            Ok(l - r * (l / r).floor())
        }
        BinOp::Pow => pow(l, r),
    }
}

fn pow(l: f64, r: f64) -> Result<f64, EvalError> {
    if l == 0.0 && r < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    let out = l.powf(r);
    if out.is_infinite() && l.is_finite() && r.is_finite() {
        return Err(EvalError::Overflow);
    }
    Ok(out)
}

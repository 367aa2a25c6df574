use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unknown name: {0}")]
    UnknownName(String),
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("unsupported expression: {0}")]
    Unsupported(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("numeric overflow")]
    Overflow,
    #[error("domain error: {0}")]
    Domain(String),
    #[error("invalid trig mode '{0}' (expected 'deg' or 'rad')")]
    InvalidMode(String),
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
    #[error("{name}() expects {expected} argument(s), got {got}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },
}

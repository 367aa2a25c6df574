mod ast;
mod env;
mod error;
mod eval;
mod lexer;
mod parser;
mod preprocess;
mod trig;

pub use env::Env;
pub use error::EvalError;
pub use parser::Expr;
pub use preprocess::preprocess;
pub use trig::TrigMode;

use log::debug;

use crate::ast::{Ast, BinOp, UnOp};
use crate::env::Env;
use crate::error::EvalError;
use crate::eval::eval_ast;
use crate::lexer::{Lexer, Token};
use crate::preprocess::preprocess;

/// Nesting bound for the recursive grammar rules. Deep input fails with
/// `TooDeep` instead of exhausting the stack.
const MAX_DEPTH: usize = 64;

/// A parsed expression, ready to evaluate against an [`Env`].
///
/// The only way to obtain one is [`Expr::parse`], so every tree went
/// through the whitelisted grammar and the nesting-depth bound.
#[derive(Clone, Debug)]
pub struct Expr {
    root: Ast,
}

impl Expr {
    /// Canonicalizes and parses `text` into an expression tree.
    pub fn parse(text: &str) -> Result<Self, EvalError> {
        let canon = preprocess(text);
        let parser = Parser::new(&canon)?;
        let root = parser.parse()?;
        debug!("parsed `{canon}` -> {root:?}");
        Ok(Self { root })
    }

    /// Evaluates the expression against the supplied bindings.
    pub fn eval(&self, env: &Env) -> Result<f64, EvalError> {
        eval_ast(&self.root, env)
    }
}

pub(crate) struct Parser<'a> {
    lex: Lexer<'a>,
    look: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(s: &'a str) -> Result<Self, EvalError> {
        let mut lex = Lexer::new(s);
        let look = lex.next_token()?;
        Ok(Self {
            lex,
            look,
            depth: 0,
        })
    }
    fn bump(&mut self) -> Result<(), EvalError> {
        self.look = self.lex.next_token()?;
        Ok(())
    }
    fn expect(&mut self, t: &Token) -> Result<(), EvalError> {
        if std::mem::discriminant(&self.look) == std::mem::discriminant(t) {
            self.bump()
        } else {
            Err(EvalError::Parse(format!("expected {:?}", t)))
        }
    }
    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }
    pub(crate) fn parse(mut self) -> Result<Ast, EvalError> {
        let expr = self.additive()?;
        if !matches!(self.look, Token::Eof) {
            return Err(EvalError::Parse("trailing tokens".into()));
        }
        Ok(expr)
    }
    fn additive(&mut self) -> Result<Ast, EvalError> {
        self.enter()?;
        let mut node = self.multiplicative()?;
        loop {
            let op = match self.look {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                _ => break,
            };
            self.bump()?;
            let rhs = self.multiplicative()?;
            node = Ast::Bin(op, Box::new(node), Box::new(rhs));
        }
        self.depth -= 1;
        Ok(node)
    }
    fn multiplicative(&mut self) -> Result<Ast, EvalError> {
        let mut node = self.unary()?;
        loop {
            let op = match self.look {
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                Token::SlashSlash => BinOp::FloorDiv,
                Token::Percent => BinOp::Mod,
                _ => break,
            };
            self.bump()?;
            let rhs = self.unary()?;
            node = Ast::Bin(op, Box::new(node), Box::new(rhs));
        }
        Ok(node)
    }
    fn unary(&mut self) -> Result<Ast, EvalError> {
        self.enter()?;
        let node = match self.look {
            Token::Plus => {
                self.bump()?;
                Ast::Unary(UnOp::Plus, Box::new(self.unary()?))
            }
            Token::Minus => {
                self.bump()?;
                Ast::Unary(UnOp::Minus, Box::new(self.unary()?))
            }
            _ => self.power()?,
        };
        self.depth -= 1;
        Ok(node)
    }
    fn power(&mut self) -> Result<Ast, EvalError> {
        let base = self.postfix()?;
        if matches!(self.look, Token::StarStar) {
            self.bump()?;
            // Right-associative; the exponent may carry its own sign, so it
            // re-enters at the unary level.
            let exp = self.unary()?;
            return Ok(Ast::Bin(BinOp::Pow, Box::new(base), Box::new(exp)));
        }
        Ok(base)
    }
    fn postfix(&mut self) -> Result<Ast, EvalError> {
        let mut node = self.primary()?;
        // Postfix factorial binds to the preceding primary and repeats:
        // 3!! is factorial(factorial(3)), 2**3! is 2**(3!).
        while matches!(self.look, Token::Bang) {
            self.bump()?;
            node = Ast::Call {
                name: "factorial".into(),
                args: vec![node],
            };
        }
        Ok(node)
    }
    fn primary(&mut self) -> Result<Ast, EvalError> {
        match self.look.clone() {
            Token::Num(v) => {
                self.bump()?;
                Ok(Ast::Num(v))
            }
            Token::Ident(s) => {
                self.bump()?;
                if matches!(self.look, Token::LParen) {
                    self.bump()?;
                    let mut args = Vec::new();
                    if !matches!(self.look, Token::RParen) {
                        loop {
                            args.push(self.additive()?);
                            if matches!(self.look, Token::Comma) {
                                self.bump()?;
                                continue;
                            }
                            break;
                        }
                    }
                    self.expect(&Token::RParen)?;
                    Ok(Ast::Call { name: s, args })
                } else {
                    Ok(Ast::Var(s))
                }
            }
            Token::LParen => {
                self.bump()?;
                let e = self.additive()?;
                self.expect(&Token::RParen)?;
                Ok(e)
            }
            _ => Err(EvalError::Parse(
                "expected number, identifier, or '('".into(),
            )),
        }
    }
}

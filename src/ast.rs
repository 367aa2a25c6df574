/// Expression nodes. All intermediate and final values are `f64`.
/// This enum is the entire evaluable surface: the parser cannot produce
/// any other shape, and the evaluator matches on it with no fallback arm.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Ast {
    /// Numeric literal (e.g. 1, 3.14, 2e10)
    Num(f64),
    /// Name reference (e.g. pi, ans)
    Var(String),
    /// Unary sign (+a, -a)
    Unary(UnOp, Box<Ast>),
    /// Binary arithmetic (a op b)
    Bin(BinOp, Box<Ast>, Box<Ast>),
    /// Function call name(args..). The name always comes from a plain
    /// identifier token, never a dotted or computed path.
    Call { name: String, args: Vec<Ast> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum UnOp {
    Plus,
    Minus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

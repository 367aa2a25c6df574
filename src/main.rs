use std::io::{self, Write};

use anyhow::Result;
use log::info;

use abacus::{Env, Expr, TrigMode};

const DEFAULT_PRECISION: usize = 12;

struct Session {
    trig: TrigMode,
    precision: usize,
    ans: f64,
    mem: f64,
    history: Vec<(String, f64)>,
}

impl Session {
    fn new() -> Self {
        Self {
            trig: TrigMode::Radians,
            precision: DEFAULT_PRECISION,
            ans: 0.0,
            mem: 0.0,
            history: Vec::new(),
        }
    }

    fn env(&self) -> Env {
        Env::build(self.trig, self.ans, self.mem)
    }
}

enum Outcome {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("Advanced Calculator. Type 'help' for commands, 'quit' to exit.");
    println!();

    loop {
        line.clear();
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }
        if stdin.read_line(&mut line).unwrap_or(0) == 0 {
            println!();
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match dispatch(input, &mut session) {
            Outcome::Continue => {}
            Outcome::Quit => break,
        }
    }

    info!("calculator exiting");
    Ok(())
}

fn dispatch(input: &str, session: &mut Session) -> Outcome {
    let lower = input.to_ascii_lowercase();
    match lower.as_str() {
        "quit" | "exit" => {
            println!("Bye.");
            return Outcome::Quit;
        }
        "help" => {
            print_help();
            return Outcome::Continue;
        }
        "history" => {
            show_history(session);
            return Outcome::Continue;
        }
        "clear" => {
            print!("{}", "\n".repeat(60));
            return Outcome::Continue;
        }
        "mr" => {
            println!("{}", format_result(session.mem, session.precision));
            return Outcome::Continue;
        }
        "mc" => {
            session.mem = 0.0;
            println!("Memory cleared.");
            return Outcome::Continue;
        }
        "reset" => {
            *session = Session::new();
            println!("State reset.");
            return Outcome::Continue;
        }
        _ => {}
    }

    if lower.starts_with("mode") {
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            [_, m] => match session.trig.set(m) {
                Ok(()) => println!("Trig mode set to {}.", session.trig),
                Err(_) => println!("Usage: mode deg|rad"),
            },
            _ => println!("Usage: mode deg|rad"),
        }
        return Outcome::Continue;
    }
    if lower.starts_with("precision") {
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            [_, n] => match n.parse::<usize>() {
                Ok(n) => {
                    session.precision = n.clamp(1, 50);
                    println!("Precision set to {}.", session.precision);
                }
                Err(_) => println!("Usage: precision N"),
            },
            _ => println!("Usage: precision N"),
        }
        return Outcome::Continue;
    }
    if lower.starts_with("m+") || lower.starts_with("m-") {
        memory_op(input, session);
        return Outcome::Continue;
    }

    // Everything else is an expression. Session state only changes on
    // success; a failed evaluation leaves ans, mem, and history alone.
    match Expr::parse(input).and_then(|e| e.eval(&session.env())) {
        Ok(value) => {
            session.ans = value;
            session.history.push((input.to_string(), value));
            println!("{}", format_result(value, session.precision));
        }
        Err(e) => println!("Error: {e}"),
    }
    Outcome::Continue
}

/// `m+ [x]` / `m- [x]`: adjust memory by x, or by ans when x is omitted.
fn memory_op(input: &str, session: &mut Session) {
    let (op, arg) = input.split_at(2);
    let arg = arg.trim();
    let delta = if arg.is_empty() {
        Ok(session.ans)
    } else {
        Expr::parse(arg).and_then(|e| e.eval(&session.env()))
    };
    match delta {
        Ok(d) => {
            if op.eq_ignore_ascii_case("m+") {
                session.mem += d;
            } else {
                session.mem -= d;
            }
            println!("Memory = {}", format_result(session.mem, session.precision));
        }
        Err(e) => println!("Memory op error: {e}"),
    }
}

fn show_history(session: &Session) {
    if session.history.is_empty() {
        println!("(no history)");
        return;
    }
    let start = session.history.len().saturating_sub(20);
    for (i, (expr, result)) in session.history[start..].iter().enumerate() {
        println!("{:>2}: {}  =  {}", i + 1, expr, result);
    }
}

/// Integer display when the value is within 10^-precision of an integer
/// (and inside exact i64 range), otherwise `precision` significant digits.
fn format_result(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    if x.abs() < 1e15 && (x - x.round()).abs() < 10f64.powi(-(precision as i32)) {
        return format!("{}", x.round() as i64);
    }
    format!("{}", round_sig(x, precision))
}

fn round_sig(x: f64, sig: usize) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let mag = x.abs().log10().floor() as i32;
    let factor = 10f64.powi(sig as i32 - 1 - mag);
    (x * factor).round() / factor
}

fn print_help() {
    println!(
        "\
Commands:
  help             Show this help
  history          Show recent results
  clear            Clear the screen
  mode deg|rad     Set trig mode (default: rad)
  precision N      Set display precision (default: 12)
  m+ [x]           Add x (or ans if omitted) to memory
  m- [x]           Subtract x (or ans if omitted) from memory
  mr               Print memory value
  mc               Clear memory (set to 0)
  reset            Reset ans, mem, mode, precision, history
  quit / exit      Leave the calculator

Usage:
  - Enter expressions directly:
      2+2, 2*(3+4)^2, 5!, sqrt(2), log(8,2), ln(5)
      sin(30) with mode deg, or sin(pi/6) with mode rad
  - Variables:
      ans (last answer), mem (memory register)"
    );
}

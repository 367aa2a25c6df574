use crate::error::EvalError;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Ident(String),
    Num(f64),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    Percent,
    Bang,
    LParen,
    RParen,
    Comma,
    Eof,
}

pub(crate) struct Lexer<'a> {
    src: &'a [u8],
    i: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(s: &'a str) -> Self {
        Self {
            src: s.as_bytes(),
            i: 0,
        }
    }
    fn peek(&self) -> Option<u8> {
        self.src.get(self.i).copied()
    }
    fn peek2(&self) -> Option<u8> {
        self.src.get(self.i + 1).copied()
    }
    fn bump(&mut self) -> Option<u8> {
        let ch = self.src.get(self.i).copied();
        if ch.is_some() {
            self.i += 1;
        }
        ch
    }
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.i += 1;
            } else {
                break;
            }
        }
    }
    pub(crate) fn next_token(&mut self) -> Result<Token, EvalError> {
        self.skip_ws();
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };
        match c {
            b'(' => {
                self.bump();
                Ok(Token::LParen)
            }
            b')' => {
                self.bump();
                Ok(Token::RParen)
            }
            b'+' => {
                self.bump();
                Ok(Token::Plus)
            }
            b'-' => {
                self.bump();
                Ok(Token::Minus)
            }
            b'*' => {
                self.bump();
                if self.peek() == Some(b'*') {
                    self.bump();
                    Ok(Token::StarStar)
                } else {
                    Ok(Token::Star)
                }
            }
            b'/' => {
                self.bump();
                if self.peek() == Some(b'/') {
                    self.bump();
                    Ok(Token::SlashSlash)
                } else {
                    Ok(Token::Slash)
                }
            }
            b'%' => {
                self.bump();
                Ok(Token::Percent)
            }
            // `^` normally arrives rewritten to `**`; accept it directly
            // so canonical and raw spellings lex the same.
            b'^' => {
                self.bump();
                Ok(Token::StarStar)
            }
            b'!' => {
                self.bump();
                if self.peek() == Some(b'=') {
                    Err(EvalError::Unsupported("comparison operators".into()))
                } else {
                    Ok(Token::Bang)
                }
            }
            b',' => {
                self.bump();
                Ok(Token::Comma)
            }
            // Everything below is valid Python expression syntax that the
            // restricted grammar refuses to represent. Naming the construct
            // beats a bare syntax error.
            b'=' => {
                if self.peek2() == Some(b'=') {
                    Err(EvalError::Unsupported("comparison operators".into()))
                } else {
                    Err(EvalError::Unsupported("assignment".into()))
                }
            }
            b'<' | b'>' => Err(EvalError::Unsupported("comparison operators".into())),
            b'.' => {
                if self.peek2().is_some_and(|d| d.is_ascii_digit()) {
                    self.lex_number()
                } else {
                    Err(EvalError::Unsupported("attribute access".into()))
                }
            }
            b'[' | b']' => Err(EvalError::Unsupported("subscripting".into())),
            b'"' | b'\'' => Err(EvalError::Unsupported("string literals".into())),
            b'&' | b'|' | b'~' => Err(EvalError::Unsupported("bitwise operators".into())),
            b'{' | b'}' => Err(EvalError::Unsupported("collection literals".into())),
            b':' => Err(EvalError::Unsupported("lambda and slice syntax".into())),
            b';' => Err(EvalError::Unsupported("statements".into())),
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_alphabetic() || c == b'_' => self.lex_ident(),
            c if c.is_ascii_graphic() => {
                Err(EvalError::Parse(format!("unexpected character '{}'", c as char)))
            }
            _ => Err(EvalError::Parse("unexpected character".into())),
        }
    }
    fn lex_number(&mut self) -> Result<Token, EvalError> {
        let start = self.i;
        let mut seen_dot = false;
        let mut seen_exp = false;
        // Mantissa (integer and fractional) and optional scientific exponent.
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.i += 1;
            } else if c == b'.' && !seen_dot && !seen_exp {
                seen_dot = true;
                self.i += 1;
            } else if (c == b'e' || c == b'E') && !seen_exp {
                seen_exp = true;
                self.i += 1;
                // Optional sign after the exponent marker.
                if let Some(sign) = self.peek() {
                    if sign == b'+' || sign == b'-' {
                        self.i += 1;
                    }
                }
                // Exponent digits (if any). If none, parse() errors below.
                while let Some(d) = self.peek() {
                    if d.is_ascii_digit() {
                        self.i += 1;
                    } else {
                        break;
                    }
                }
            } else {
                break;
            }
        }
        let s = std::str::from_utf8(&self.src[start..self.i]).unwrap();
        let v: f64 = s
            .parse()
            .map_err(|e| EvalError::Parse(format!("invalid number '{}': {}", s, e)))?;
        Ok(Token::Num(v))
    }
    fn lex_ident(&mut self) -> Result<Token, EvalError> {
        let start = self.i;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' {
                self.i += 1;
            } else {
                break;
            }
        }
        let s = std::str::from_utf8(&self.src[start..self.i])
            .unwrap()
            .to_string();
        Ok(Token::Ident(s))
    }
}

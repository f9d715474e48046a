use crate::eval::{EvalError, NameRole, Token};

fn is_name_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_name(c: u8) -> bool {
    is_name_start(c) || c.is_ascii_digit()
}

fn is_exp(c: u8) -> bool {
    c == b'e' || c == b'E'
}

/// Scales `value` by `10^exp` with exponentiation by squaring, so literal
/// construction does not depend on the platform's float parser.
fn scale_by_power_of_ten(mut value: f64, exp: i64) -> f64 {
    let mut power = 10.0_f64;
    let mut magnitude = exp.unsigned_abs();
    while magnitude != 0 {
        if magnitude & 1 != 0 {
            if exp < 0 {
                value /= power;
            } else {
                value *= power;
            }
        }
        magnitude >>= 1;
        power *= power;
    }
    value
}

pub(crate) struct Lexer<'a> {
    src: &'a [u8],
    i: usize,
    max_name_length: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(s: &'a str, max_name_length: usize) -> Self {
        Self {
            src: s.as_bytes(),
            i: 0,
            max_name_length,
        }
    }

    /// Next byte without consuming it; `0` stands for end of input.
    fn peek(&self) -> u8 {
        self.src.get(self.i).copied().unwrap_or(0)
    }

    fn bump(&mut self) -> u8 {
        let c = self.peek();
        if c != 0 {
            self.i += 1;
        }
        c
    }

    fn bump_if(&mut self, expected: u8) -> bool {
        if self.peek() == expected {
            self.i += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn next_token(&mut self) -> Result<Token<'a>, EvalError> {
        loop {
            let c = self.peek();
            if c == 0 {
                // Cursor stays on the terminator, so End repeats.
                return Ok(Token::End);
            }
            if c <= b' ' {
                self.i += 1;
                continue;
            }
            if c.is_ascii_digit() || c == b'.' {
                return self.lex_number();
            }
            if is_name_start(c) {
                return self.lex_name(NameRole::Function);
            }

            self.i += 1;
            let token = match c {
                b'$' => return self.lex_name(NameRole::Variable),
                b'>' => {
                    if self.bump_if(b'=') {
                        Token::GreaterEq
                    } else {
                        Token::Greater
                    }
                }
                b'<' => {
                    if self.bump_if(b'=') {
                        Token::LessEq
                    } else {
                        Token::Less
                    }
                }
                b'=' => {
                    // A lone '=' is still equality.
                    self.bump_if(b'=');
                    Token::Equal
                }
                b'+' => Token::Add,
                b'-' => Token::Subtract,
                b'*' => Token::Multiply,
                b'/' => Token::Divide,
                b'(' => Token::OpenBracket,
                b')' => Token::CloseBracket,
                _ => return Err(EvalError::IllegalCharacter),
            };
            return Ok(token);
        }
    }

    fn lex_number(&mut self) -> Result<Token<'a>, EvalError> {
        let mut value = 0.0_f64;
        let mut exp: i64 = 0;

        if self.peek() != b'.' {
            if !self.peek().is_ascii_digit() {
                return Err(EvalError::InvalidLiteral);
            }
            while self.peek().is_ascii_digit() {
                value = value * 10.0 + f64::from(self.bump() - b'0');
            }
        }

        if self.bump_if(b'.') {
            if !self.peek().is_ascii_digit() {
                return Err(EvalError::InvalidLiteral);
            }
            while self.peek().is_ascii_digit() {
                value = value * 10.0 + f64::from(self.bump() - b'0');
                exp = exp.checked_sub(1).ok_or(EvalError::LiteralOutOfRange)?;
            }
        }

        if is_exp(self.peek()) {
            self.bump();
            let negative = match self.peek() {
                b'-' => {
                    self.bump();
                    true
                }
                b'+' => {
                    self.bump();
                    false
                }
                _ => false,
            };

            if !self.peek().is_ascii_digit() {
                return Err(EvalError::InvalidLiteral);
            }
            let mut magnitude: i64 = 0;
            while self.peek().is_ascii_digit() {
                let digit = i64::from(self.bump() - b'0');
                magnitude = magnitude
                    .checked_mul(10)
                    .and_then(|m| m.checked_add(digit))
                    .ok_or(EvalError::LiteralOutOfRange)?;
            }

            exp = if negative {
                exp.checked_sub(magnitude)
            } else {
                exp.checked_add(magnitude)
            }
            .ok_or(EvalError::LiteralOutOfRange)?;
        }

        Ok(Token::Number(scale_by_power_of_ten(value, exp)))
    }

    fn lex_name(&mut self, role: NameRole) -> Result<Token<'a>, EvalError> {
        let start = self.i;
        while is_name(self.peek()) {
            if self.i - start >= self.max_name_length.saturating_sub(1) {
                return Err(EvalError::NameTooLong);
            }
            self.i += 1;
        }
        // Name bytes are ASCII, so the slice is always valid UTF-8.
        let name = std::str::from_utf8(&self.src[start..self.i])
            .map_err(|_| EvalError::IllegalCharacter)?;
        Ok(Token::Name { name, role })
    }
}

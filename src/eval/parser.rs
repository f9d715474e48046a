use crate::eval::lexer::Lexer;
use crate::eval::{EvalError, Limits, NameRole, ProductOperator, Resolver, Token};
use log::{debug, trace};
use std::any::Any;

/// State of one top-level evaluation. Each grammar rule consumes tokens and
/// returns the value of what it parsed; no tree is built.
struct EvalContext<'a> {
    resolver: Option<&'a dyn Resolver>,
    user_data: &'a mut dyn Any,
    lexer: Lexer<'a>,
    depth: usize,
    max_depth: usize,
    token: Token<'a>,
}

impl<'a> EvalContext<'a> {
    fn bump(&mut self) -> Result<(), EvalError> {
        self.token = self.lexer.next_token()?;
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        if self.depth >= self.max_depth {
            trace!("Nesting depth {} reached", self.depth);
            return Err(EvalError::StackOverflow);
        }
        self.depth += 1;
        let result = self.sum();
        self.depth -= 1;
        result
    }

    fn sum(&mut self) -> Result<f64, EvalError> {
        let mut lhs = self.product()?;
        loop {
            match self.token {
                Token::Add => {
                    self.bump()?;
                    lhs += self.product()?;
                }
                Token::Subtract => {
                    self.bump()?;
                    lhs -= self.product()?;
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn product(&mut self) -> Result<f64, EvalError> {
        let mut lhs = self.unary()?;
        while let Some(operator) = ProductOperator::from_token(&self.token) {
            self.bump()?;
            let rhs = self.unary()?;
            lhs = operator.apply(lhs, rhs);
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        let mut negate = false;
        while self.token == Token::Subtract {
            negate = !negate;
            self.bump()?;
        }
        let value = self.term()?;
        Ok(if negate { -value } else { value })
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let value = match self.token {
            Token::Number(value) => value,
            Token::OpenBracket => {
                self.bump()?;
                let value = self.expr()?;
                if self.token != Token::CloseBracket {
                    return Err(EvalError::ExpectedCloseBracket);
                }
                value
            }
            Token::Name {
                name,
                role: NameRole::Function,
            } => {
                trace!("Resolving function '{}'", name);
                let function = self
                    .resolver
                    .and_then(|resolver| resolver.get_function(name, &mut *self.user_data))
                    .ok_or(EvalError::UndefinedFunction)?;

                self.bump()?;
                if self.token != Token::OpenBracket {
                    return Err(EvalError::ExpectedOpenBracket);
                }
                self.bump()?;
                let arg = self.expr()?;
                if self.token != Token::CloseBracket {
                    return Err(EvalError::ExpectedCloseBracket);
                }
                function(arg, &mut *self.user_data)?
            }
            Token::Name {
                name,
                role: NameRole::Variable,
            } => {
                trace!("Resolving variable '{}'", name);
                let resolver = self.resolver.ok_or(EvalError::UndefinedVariable)?;
                resolver.get_variable(name, &mut *self.user_data)?
            }
            _ => return Err(EvalError::ExpectedTerm),
        };
        self.bump()?;
        Ok(value)
    }
}

/// Evaluates `expression` with explicit bounds on name length and nesting.
///
/// See [`crate::evaluate`] for the grammar and resolver contract.
pub fn evaluate_with_limits(
    expression: &str,
    resolver: Option<&dyn Resolver>,
    user_data: &mut dyn Any,
    limits: &Limits,
) -> Result<f64, EvalError> {
    debug!("Evaluating expression: {}", expression);

    let mut lexer = Lexer::new(expression, limits.max_name_length);
    let token = lexer.next_token()?;
    let mut ctx = EvalContext {
        resolver,
        user_data,
        lexer,
        depth: 0,
        max_depth: limits.max_depth,
        token,
    };

    let result = ctx.expr().and_then(|value| {
        if ctx.token == Token::End {
            Ok(value)
        } else {
            Err(EvalError::UnexpectedCharacter)
        }
    });

    debug!("Evaluation result: {:?}", result);
    result
}

use thiserror::Error;

/// Everything that can stop an evaluation.
///
/// The taxonomy is flat: there are no nested causes, and errors raised by
/// resolver callbacks are passed back to the caller untouched. Each variant
/// carries a stable numeric code (see [`EvalError::code`]); code `0` is
/// reserved for success.
#[repr(u8)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalError {
    #[error("illegal character")]
    IllegalCharacter = 1,
    #[error("invalid literal")]
    InvalidLiteral = 2,
    #[error("literal out-of-range")]
    LiteralOutOfRange = 3,
    #[error("name too long")]
    NameTooLong = 4,
    #[error("unexpected character")]
    UnexpectedCharacter = 5,
    #[error("expected term")]
    ExpectedTerm = 6,
    #[error("stack overflow")]
    StackOverflow = 7,
    #[error("undefined function")]
    UndefinedFunction = 8,
    #[error("undefined variable")]
    UndefinedVariable = 9,
    #[error("expected open bracket")]
    ExpectedOpenBracket = 10,
    #[error("expected close bracket")]
    ExpectedCloseBracket = 11,
}

impl EvalError {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::IllegalCharacter),
            2 => Some(Self::InvalidLiteral),
            3 => Some(Self::LiteralOutOfRange),
            4 => Some(Self::NameTooLong),
            5 => Some(Self::UnexpectedCharacter),
            6 => Some(Self::ExpectedTerm),
            7 => Some(Self::StackOverflow),
            8 => Some(Self::UndefinedFunction),
            9 => Some(Self::UndefinedVariable),
            10 => Some(Self::ExpectedOpenBracket),
            11 => Some(Self::ExpectedCloseBracket),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IllegalCharacter => "illegal character",
            Self::InvalidLiteral => "invalid literal",
            Self::LiteralOutOfRange => "literal out-of-range",
            Self::NameTooLong => "name too long",
            Self::UnexpectedCharacter => "unexpected character",
            Self::ExpectedTerm => "expected term",
            Self::StackOverflow => "stack overflow",
            Self::UndefinedFunction => "undefined function",
            Self::UndefinedVariable => "undefined variable",
            Self::ExpectedOpenBracket => "expected open bracket",
            Self::ExpectedCloseBracket => "expected close bracket",
        }
    }
}

/// Human readable text for an error.
pub fn error_to_string(error: EvalError) -> &'static str {
    error.as_str()
}

/// Human readable text for a raw result code, `0` being success.
pub fn code_to_string(code: u8) -> &'static str {
    if code == 0 {
        return "ok";
    }
    EvalError::from_code(code).map_or("undefined error", EvalError::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EvalError; 11] = [
        EvalError::IllegalCharacter,
        EvalError::InvalidLiteral,
        EvalError::LiteralOutOfRange,
        EvalError::NameTooLong,
        EvalError::UnexpectedCharacter,
        EvalError::ExpectedTerm,
        EvalError::StackOverflow,
        EvalError::UndefinedFunction,
        EvalError::UndefinedVariable,
        EvalError::ExpectedOpenBracket,
        EvalError::ExpectedCloseBracket,
    ];

    #[test]
    fn test_codes_are_stable() {
        for (i, error) in ALL.iter().enumerate() {
            assert_eq!(error.code() as usize, i + 1);
            assert_eq!(EvalError::from_code(error.code()), Some(*error));
        }
    }

    #[test]
    fn test_display_matches_error_to_string() {
        for error in ALL {
            assert_eq!(error.to_string(), error_to_string(error));
        }
    }

    #[test]
    fn test_code_to_string() {
        assert_eq!(code_to_string(0), "ok");
        assert_eq!(code_to_string(7), "stack overflow");
        assert_eq!(code_to_string(11), "expected close bracket");
        assert_eq!(code_to_string(12), "undefined error");
        assert_eq!(code_to_string(255), "undefined error");
    }
}

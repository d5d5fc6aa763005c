#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum ErrorKind {
    #[error("Unknown character `{ch}` at offset {offset}")]
    Lexical { ch: char, offset: usize },
    /// The literal exceeds 2^53 - 1, the largest integer evaluation keeps exact.
    #[error("Number literal `{0}` is out of range")]
    NumberOutOfRange(String),
    #[error("{0}")]
    Syntax(String),
    #[error("Calls are nested deeper than the limit of {0}")]
    NestingTooDeep(usize),
    #[error("Formula is empty")]
    EmptyProgram,
    #[error("Unknown variable `{segment}` in `{path}`")]
    UnknownVariable { segment: String, path: String },
    #[error("Variable `{0}` does not resolve to a number")]
    NotANumber(String),
    #[error("Unknown function `{0}`")]
    UnknownFunction(String),
    #[error("Function `{name}` takes {expected} arguments, found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Cannot evaluate node of type `{0}`")]
    UnknownNode(&'static str),
}

impl ErrorKind {
    /// Stable code for machine consumers, e.g. a formula-correction loop.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Lexical { .. } | Self::NumberOutOfRange(_) => "LEXICAL_ERROR",
            Self::Syntax(_) => "SYNTAX_ERROR",
            Self::NestingTooDeep(_) => "NESTING_TOO_DEEP",
            Self::EmptyProgram => "EMPTY_PROGRAM",
            Self::UnknownVariable { .. } => "UNKNOWN_VARIABLE",
            Self::NotANumber(_) => "NOT_A_NUMBER",
            Self::UnknownFunction(_) => "UNKNOWN_FUNCTION",
            Self::ArityMismatch { .. } => "ARITY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::UnknownNode(_) => "UNKNOWN_NODE",
        }
    }
}

pub type PResult<T> = Result<T, ErrorKind>;

//! A sandboxed formula evaluator.
//!
//! Formulas are nested calls to a fixed set of arithmetic operators over
//! integer literals and dotted paths into a runtime context, e.g.
//! `Add(3, person.age)`. Nothing outside the operator table can be invoked.

mod error;
mod runtime;
mod syntax;

pub use error::{ErrorKind, PResult};
pub use runtime::{check, lookup, BinaryFn, Context, Interpreter, Operator, Value, OPERATORS};
pub use syntax::{
    parse, tokenize, Lexer, Node, Parser, Token, DEFAULT_MAX_DEPTH, MAX_EXACT_INTEGER,
};

use log::debug;
use serde::Serialize;

/// Evaluation options shared by [`Evaluator::evaluate`] and [`Evaluator::validate`].
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn parse<'src>(&self, formula: &'src str) -> PResult<Node<'src>> {
        let tokens = tokenize(formula)?;
        Parser::new(tokens).with_max_depth(self.max_depth).parse()
    }

    pub fn evaluate<C: Context>(&self, formula: &str, context: C) -> PResult<f64> {
        let ast = self.parse(formula)?;
        let value = Interpreter::new(context).interpret(&ast)?;
        debug!("{formula:?} evaluated to {value}");
        Ok(value)
    }

    pub fn validate(&self, formula: &str) -> Validation {
        match self.parse(formula).and_then(|ast| check(&ast)) {
            Ok(()) => Validation::Valid,
            Err(why) => {
                debug!("{formula:?} is invalid: {why}");
                Validation::Invalid(why)
            }
        }
    }
}

/// Outcome of [`validate`]. Serializes as `{"valid": true}` or
/// `{"valid": false, "code": ..., "error": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid,
    Invalid(ErrorKind),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error(&self) -> Option<&ErrorKind> {
        match self {
            Self::Valid => None,
            Self::Invalid(why) => Some(why),
        }
    }
}

#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for Validation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let report = match self {
            Self::Valid => ValidationReport {
                valid: true,
                code: None,
                error: None,
            },
            Self::Invalid(why) => ValidationReport {
                valid: false,
                code: Some(why.code()),
                error: Some(why.to_string()),
            },
        };
        report.serialize(serializer)
    }
}

/// Tokenizes, parses and evaluates `formula`, failing with the first error
/// from any stage.
pub fn evaluate<C: Context>(formula: &str, context: C) -> PResult<f64> {
    Evaluator::default().evaluate(formula, context)
}

/// Checks that `formula` would evaluate given suitable data.
pub fn validate(formula: &str) -> Validation {
    Evaluator::default().validate(formula)
}

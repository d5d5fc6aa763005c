use log::{debug, trace};

use super::{builtin, value::Context};
use crate::{
    error::{ErrorKind, PResult},
    syntax::Node,
};

pub struct Interpreter<C> {
    context: C,
}

impl<C: Context> Interpreter<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    /// Evaluates the first expression of a program. Any further top-level
    /// expressions are parsed but never run.
    pub fn interpret(&self, ast: &Node) -> PResult<f64> {
        match ast {
            Node::Program { body } => {
                if body.len() > 1 {
                    debug!(
                        "ignoring {} trailing top-level expressions",
                        body.len() - 1
                    );
                }
                let first = body.first().ok_or(ErrorKind::EmptyProgram)?;
                self.eval_expr(first)
            }
            expr => self.eval_expr(expr),
        }
    }

    fn eval_expr(&self, expr: &Node) -> PResult<f64> {
        match expr {
            Node::NumberLiteral { value } => Ok(*value as f64),
            Node::Variable { value } => {
                let resolved = self.context.resolve(value)?;
                trace!("{value} = {resolved}");
                Ok(resolved)
            }
            Node::CallExpression { name, params } => {
                let args = params
                    .iter()
                    .map(|param| self.eval_expr(param))
                    .collect::<PResult<Vec<_>>>()?;

                let result = builtin::lookup(name)?.apply(&args)?;
                trace!("{name}{args:?} = {result}");
                Ok(result)
            }
            other => Err(ErrorKind::UnknownNode(other.kind())),
        }
    }
}

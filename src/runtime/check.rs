use super::builtin::{self, Operator};
use crate::{
    error::{ErrorKind, PResult},
    syntax::Node,
};

/// Checks a parsed program without data: it must have a first expression,
/// and every call in it must name a known operator with the right arity.
pub fn check(ast: &Node) -> PResult<()> {
    match ast {
        Node::Program { body } => match body.first() {
            None => Err(ErrorKind::EmptyProgram),
            Some(first) => visit_expr(first),
        },
        expr => visit_expr(expr),
    }
}

fn visit_expr(expr: &Node) -> PResult<()> {
    match expr {
        Node::NumberLiteral { .. } | Node::Variable { .. } => Ok(()),
        Node::CallExpression { name, params } => {
            for param in params {
                visit_expr(param)?;
            }

            builtin::lookup(name)?;
            if params.len() != Operator::ARITY {
                return Err(ErrorKind::ArityMismatch {
                    name: name.to_string(),
                    expected: Operator::ARITY,
                    found: params.len(),
                });
            }
            Ok(())
        }
        other => Err(ErrorKind::UnknownNode(other.kind())),
    }
}

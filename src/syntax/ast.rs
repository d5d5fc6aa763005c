use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Node<'src> {
    /// Root of a parsed formula. Only the first expression is ever evaluated.
    Program { body: Vec<Node<'src>> },
    NumberLiteral { value: i64 },
    /// Dotted path into the runtime context, e.g. `person.age`.
    Variable { value: String },
    CallExpression {
        name: &'src str,
        params: Vec<Node<'src>>,
    },
}

impl<'src> Node<'src> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Program { .. } => "Program",
            Self::NumberLiteral { .. } => "NumberLiteral",
            Self::Variable { .. } => "Variable",
            Self::CallExpression { .. } => "CallExpression",
        }
    }
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Program { body } => {
                for (i, node) in body.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{node}")?;
                }
                Ok(())
            }
            Self::NumberLiteral { value } => write!(f, "{value}"),
            Self::Variable { value } => write!(f, "{value}"),
            Self::CallExpression { name, params } => {
                write!(f, "{name}(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ")")
            }
        }
    }
}

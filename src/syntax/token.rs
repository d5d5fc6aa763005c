use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    Number(i64),
    /// An identifier whose next significant character is `(`.
    Function(&'src str),
    Variable(&'src str),

    LParen,
    RParen,
    Comma,
    Dot,
}

impl<'src> Token<'src> {
    /// The token type as it appears in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Function(_) => "function",
            Self::Variable(_) => "variable",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Dot => "dot",
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum TokenValue<'a> {
    Number(i64),
    Text(&'a str),
}

#[derive(Serialize)]
struct TaggedToken<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: TokenValue<'a>,
}

/// Serializes as `{"type": ..., "value": ...}`; punctuation carries its own
/// character as the value.
impl Serialize for Token<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match *self {
            Self::Number(v) => TokenValue::Number(v),
            Self::Function(id) | Self::Variable(id) => TokenValue::Text(id),
            Self::LParen => TokenValue::Text("("),
            Self::RParen => TokenValue::Text(")"),
            Self::Comma => TokenValue::Text(","),
            Self::Dot => TokenValue::Text("."),
        };

        TaggedToken {
            kind: self.kind(),
            value,
        }
        .serialize(serializer)
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Function(id) | Self::Variable(id) => write!(f, "{id}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
        }
    }
}

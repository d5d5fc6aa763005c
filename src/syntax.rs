mod ast;
mod lexer;
mod parser;
mod token;

pub use ast::Node;
pub use lexer::{tokenize, Lexer, MAX_EXACT_INTEGER};
pub use parser::{parse, Parser, DEFAULT_MAX_DEPTH};
pub use token::Token;

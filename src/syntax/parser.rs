use std::{iter::Peekable, vec::IntoIter};

use log::debug;

use crate::{
    error::{ErrorKind, PResult},
    syntax::{ast::Node, token::Token},
};

pub const DEFAULT_MAX_DEPTH: usize = 64;

pub struct Parser<'src> {
    tokens: Peekable<IntoIter<Token<'src>>>,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limits how deeply call expressions may nest.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses expressions until the tokens run out. Adjacent expressions
    /// become separate entries of the program body.
    pub fn parse(mut self) -> PResult<Node<'src>> {
        let mut body = vec![];

        while self.tokens.peek().is_some() {
            body.push(self.walk(0)?);
        }

        debug!("parsed program with {} top-level expressions", body.len());
        Ok(Node::Program { body })
    }

    fn walk(&mut self, depth: usize) -> PResult<Node<'src>> {
        match self.tokens.next() {
            None => Err(ErrorKind::Syntax(
                "Expected expression, found end of input".into(),
            )),
            Some(Token::Number(value)) => Ok(Node::NumberLiteral { value }),
            Some(Token::Function(name)) => {
                if depth >= self.max_depth {
                    return Err(ErrorKind::NestingTooDeep(self.max_depth));
                }
                self.expect(Token::LParen)?;
                self.parse_call_expr(name, depth)
            }
            Some(Token::Variable(head)) => self.parse_variable(head),
            Some(other) => Err(ErrorKind::Syntax(format!(
                "Unexpected token of type `{}`",
                other.kind()
            ))),
        }
    }

    fn parse_call_expr(&mut self, name: &'src str, depth: usize) -> PResult<Node<'src>> {
        let mut params = vec![];

        match self.tokens.peek() {
            Some(Token::RParen) => (),
            _ => loop {
                params.push(self.walk(depth + 1)?);

                match self.tokens.peek() {
                    None => {
                        return Err(ErrorKind::Syntax(
                            "Expected `,` or `)`, found end of input".into(),
                        ))
                    }
                    Some(Token::RParen) => break,
                    Some(Token::Comma) => self.eat(),
                    Some(other) => {
                        return Err(ErrorKind::Syntax(format!(
                            "Expected `,` or `)`, found `{}`",
                            other.kind()
                        )))
                    }
                }
            },
        }
        self.eat();

        Ok(Node::CallExpression { name, params })
    }

    fn parse_variable(&mut self, head: &'src str) -> PResult<Node<'src>> {
        let mut path = head.to_string();

        while let Some(Token::Dot) = self.tokens.peek() {
            self.eat();
            match self.tokens.next() {
                Some(Token::Variable(segment)) => {
                    path.push('.');
                    path.push_str(segment);
                }
                None => {
                    return Err(ErrorKind::Syntax(
                        "Expected `variable` after `dot`, found end of input".into(),
                    ))
                }
                Some(other) => {
                    return Err(ErrorKind::Syntax(format!(
                        "Expected `variable` after `dot`, found `{}`",
                        other.kind()
                    )))
                }
            }
        }

        Ok(Node::Variable { value: path })
    }

    fn expect(&mut self, expected: Token<'src>) -> PResult<()> {
        match self.tokens.next() {
            None => Err(ErrorKind::Syntax(format!(
                "Expected `{}`, found end of input",
                expected.kind()
            ))),
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(ErrorKind::Syntax(format!(
                "Expected `{}`, found `{}`",
                expected.kind(),
                token.kind()
            ))),
        }
    }

    #[inline]
    fn eat(&mut self) {
        let _ = self.tokens.next();
    }
}

pub fn parse(tokens: Vec<Token<'_>>) -> PResult<Node<'_>> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod test {
    use super::{parse, Parser};
    use crate::{
        error::ErrorKind,
        syntax::{ast::Node, lexer::tokenize, token::Token},
    };

    fn parse_str(s: &str) -> Result<Node<'_>, ErrorKind> {
        parse(tokenize(s)?)
    }

    fn body(program: Node) -> Vec<Node> {
        match program {
            Node::Program { body } => body,
            other => panic!("Expected program, found {other:?}"),
        }
    }

    #[test]
    fn parse_from_tokens() {
        use Token::*;

        let tokens = vec![
            Function("Add"),
            LParen,
            Number(3),
            Comma,
            Variable("person"),
            Dot,
            Variable("age"),
            RParen,
        ];
        let expected = Node::Program {
            body: vec![Node::CallExpression {
                name: "Add",
                params: vec![
                    Node::NumberLiteral { value: 3 },
                    Node::Variable {
                        value: "person.age".into(),
                    },
                ],
            }],
        };

        assert_eq!(parse(tokens).unwrap(), expected);
    }

    #[test]
    fn parse_nested_call() {
        let program = body(parse_str("Multiply(Add(1,2),3)").unwrap());
        let expected = Node::CallExpression {
            name: "Multiply",
            params: vec![
                Node::CallExpression {
                    name: "Add",
                    params: vec![
                        Node::NumberLiteral { value: 1 },
                        Node::NumberLiteral { value: 2 },
                    ],
                },
                Node::NumberLiteral { value: 3 },
            ],
        };

        assert_eq!(program, vec![expected]);
    }

    #[test]
    fn parse_any_arity() {
        let program = body(parse_str("Noop()").unwrap());
        assert_eq!(
            program,
            vec![Node::CallExpression {
                name: "Noop",
                params: vec![]
            }]
        );

        let program = body(parse_str("Sum(1, 2, 3, 4)").unwrap());
        assert!(matches!(&program[0], Node::CallExpression { params, .. } if params.len() == 4));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse_str("").unwrap(), Node::Program { body: vec![] });
    }

    #[test]
    fn parse_adjacent_expressions() {
        let program = body(parse_str("1 Add(2, 3) a.b").unwrap());
        assert_eq!(program.len(), 3);
        assert_eq!(program[0], Node::NumberLiteral { value: 1 });
        assert_eq!(
            program[2],
            Node::Variable {
                value: "a.b".into()
            }
        );
    }

    #[test]
    fn missing_closing_paren() {
        let err = parse_str("Add(1,2").unwrap_err();
        assert_eq!(
            err,
            ErrorKind::Syntax("Expected `,` or `)`, found end of input".into())
        );
    }

    #[test]
    fn trailing_comma() {
        let err = parse_str("Add(1,)").unwrap_err();
        assert_eq!(
            err,
            ErrorKind::Syntax("Unexpected token of type `)`".into())
        );
    }

    #[test]
    fn dot_without_variable() {
        let err = parse_str("person.1").unwrap_err();
        assert_eq!(
            err,
            ErrorKind::Syntax("Expected `variable` after `dot`, found `number`".into())
        );

        let err = parse_str("person.").unwrap_err();
        assert!(matches!(err, ErrorKind::Syntax(msg) if msg.ends_with("end of input")));
    }

    #[test]
    fn unexpected_leading_token() {
        let err = parse_str(", 1").unwrap_err();
        assert_eq!(err, ErrorKind::Syntax("Unexpected token of type `,`".into()));

        let err = parse_str(".a").unwrap_err();
        assert_eq!(err, ErrorKind::Syntax("Unexpected token of type `dot`".into()));
    }

    #[test]
    fn missing_separator() {
        let err = parse_str("Add(1 2)").unwrap_err();
        assert_eq!(
            err,
            ErrorKind::Syntax("Expected `,` or `)`, found `number`".into())
        );
    }

    #[test]
    fn function_token_without_paren() {
        let err = parse(vec![Token::Function("Add"), Token::Number(1)]).unwrap_err();
        assert_eq!(
            err,
            ErrorKind::Syntax("Expected `(`, found `number`".into())
        );
    }

    #[test]
    fn nesting_limit() {
        let formula = "Add(Add(Add(1, 1), 1), 1)";

        let tokens = tokenize(formula).unwrap();
        assert!(Parser::new(tokens).with_max_depth(3).parse().is_ok());

        let tokens = tokenize(formula).unwrap();
        let err = Parser::new(tokens).with_max_depth(2).parse().unwrap_err();
        assert_eq!(err, ErrorKind::NestingTooDeep(2));
    }

    #[test]
    fn deep_nesting_is_rejected_not_overflowed() {
        let depth = 100_000;
        let formula = format!("{}1{}", "Add(".repeat(depth), ")".repeat(depth));
        let err = parse_str(&formula).unwrap_err();
        assert_eq!(err, ErrorKind::NestingTooDeep(super::DEFAULT_MAX_DEPTH));
    }
}

use std::{iter::Peekable, str::CharIndices};

use log::trace;

use super::token::Token;
use crate::error::{ErrorKind, PResult};

/// Largest literal that evaluation (in `f64`) still represents exactly, 2^53 - 1.
pub const MAX_EXACT_INTEGER: i64 = (1 << 53) - 1;

pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((_, ' ')) = self.chars.peek() {
            self.bump();
        }

        let token = match self.chars.next()? {
            (_, '(') => Token::LParen,
            (_, ')') => Token::RParen,
            (_, ',') => Token::Comma,
            (_, '.') => Token::Dot,
            (off, c) if c.is_ascii_digit() => match self.read_number(off) {
                Ok(token) => token,
                Err(why) => return Some(Err(why)),
            },
            (off, c) if Self::is_id_part(c) => self.read_id(off),
            (offset, ch) => return Some(Err(ErrorKind::Lexical { ch, offset })),
        };

        trace!("token {token:?}");
        Some(Ok(token))
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize) -> PResult<Token<'src>> {
        let s = self.slice_until(from_off, |c| !c.is_ascii_digit());
        match s.parse::<i64>() {
            Ok(v) if v <= MAX_EXACT_INTEGER => Ok(Token::Number(v)),
            _ => Err(ErrorKind::NumberOutOfRange(s.to_string())),
        }
    }

    fn read_id(&mut self, from_off: usize) -> Token<'src> {
        let s = self.slice_until(from_off, |c| !Self::is_id_part(c));

        // Probe past spaces on a copy of the cursor; the spaces are still
        // consumed as ordinary whitespace afterwards.
        let mut probe = self.chars.clone();
        while let Some((_, ' ')) = probe.peek() {
            probe.next();
        }

        match probe.peek() {
            Some((_, '(')) => Token::Function(s),
            _ => Token::Variable(s),
        }
    }

    fn is_id_part(c: char) -> bool {
        c.is_ascii_alphabetic()
    }
}

/// Scans the whole formula, stopping at the first unrecognized character.
pub fn tokenize(src: &str) -> PResult<Vec<Token<'_>>> {
    let tokens = Lexer::new(src).collect::<PResult<Vec<_>>>()?;
    trace!("tokenized {src:?} into {} tokens", tokens.len());
    Ok(tokens)
}

use log::debug;

use crate::error::SyntaxError;
use crate::{Lexeme, Production, Symbol, Token};

/// Recursive descent over a token stream
///
/// ```text
/// grammar    := production+
/// production := Variable Colon symbol+ Semicolon
/// symbol     := Variable | Terminal
/// ```
pub(crate) struct GrammarParser<'a> {
    lexemes: &'a [Lexeme],
    pos: usize,
    end: &'a str,
}

impl<'a> GrammarParser<'a> {
    pub fn new(lexemes: &'a [Lexeme], end: &'a str) -> Self {
        Self {
            lexemes,
            pos: 0,
            end,
        }
    }

    pub fn parse(mut self) -> Result<Vec<Production>, SyntaxError> {
        let mut productions = Vec::new();
        while self.pos < self.lexemes.len() {
            let is_start = productions.is_empty();
            productions.push(self.production(is_start)?);
        }
        if productions.is_empty() {
            return Err(SyntaxError::EmptyGrammar);
        }
        debug!("Parsed {} productions", productions.len());
        Ok(productions)
    }

    fn production(&mut self, is_start: bool) -> Result<Production, SyntaxError> {
        let lhs = match self.peek("variable")? {
            Lexeme {
                token: Token::Variable(name),
                ..
            } => name.clone(),
            _ => return Err(self.unexpected("variable")),
        };
        self.pos += 1;

        match self.peek("colon")?.token {
            Token::Colon => self.pos += 1,
            _ => return Err(self.unexpected("colon")),
        }

        let mut rhs: Vec<Symbol> = Vec::new();
        loop {
            let lexeme = self.peek("symbol or semicolon")?;
            match &lexeme.token {
                Token::Semicolon => break,
                Token::Terminal(name) if name == self.end => {
                    return Err(SyntaxError::ReservedTerminal {
                        name: name.clone(),
                        offset: lexeme.offset,
                    });
                }
                Token::Terminal(_) | Token::Variable(_) => rhs.extend(lexeme.token.to_symbol()),
                Token::Colon => return Err(self.unexpected("symbol or semicolon")),
            }
            self.pos += 1;
        }

        if rhs.is_empty() {
            return Err(SyntaxError::EmptyRightHandSide {
                nonterminal: lhs,
                index: self.pos,
            });
        }
        // Semicolon
        self.pos += 1;

        Ok(Production { lhs, rhs, is_start })
    }

    fn peek(&self, expected: &'static str) -> Result<&'a Lexeme, SyntaxError> {
        self.lexemes
            .get(self.pos)
            .ok_or(SyntaxError::UnexpectedEnd { expected })
    }

    /// Error for the token at the current position
    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        match self.lexemes.get(self.pos) {
            Some(lexeme) => SyntaxError::UnexpectedToken {
                expected,
                found: lexeme.token.to_string(),
                index: self.pos,
                offset: lexeme.offset,
            },
            None => SyntaxError::UnexpectedEnd { expected },
        }
    }
}

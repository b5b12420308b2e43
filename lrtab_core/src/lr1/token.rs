use std::fmt;
use std::str::CharIndices;

use log::debug;

use crate::error::SyntaxError;
use crate::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<Name>`
    Variable(String),
    /// `[name]`
    Terminal(String),
    Colon,
    Semicolon,
}

impl Token {
    /// The right-hand side symbol a variable or terminal token stands for
    pub fn to_symbol(&self) -> Option<Symbol> {
        match self {
            Token::Variable(name) => Some(Symbol::Nonterminal(name.clone())),
            Token::Terminal(name) => Some(Symbol::Terminal(name.clone())),
            Token::Colon | Token::Semicolon => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Token::Variable(name) => write!(f, "variable <{}>", name),
            Token::Terminal(name) => write!(f, "terminal [{}]", name),
            Token::Colon => write!(f, "colon"),
            Token::Semicolon => write!(f, "semicolon"),
        }
    }
}

/// A token together with the byte offset it starts at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub offset: usize,
}

/// Split grammar text into tokens
///
/// Names are taken verbatim up to the closing delimiter. Whitespace between tokens is skipped,
/// every other character outside of a name is rejected.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, SyntaxError> {
    let mut lexemes = Vec::new();
    let mut chars = input.char_indices();

    while let Some((offset, character)) = chars.next() {
        let token = match character {
            ' ' | '\t' | '\r' | '\n' => continue,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '<' => Token::Variable(read_name(&mut chars, offset, '>')?),
            '[' => Token::Terminal(read_name(&mut chars, offset, ']')?),
            character => {
                return Err(SyntaxError::UnexpectedCharacter { character, offset });
            }
        };
        lexemes.push(Lexeme { token, offset });
    }

    debug!("Tokenized grammar into {} tokens", lexemes.len());
    Ok(lexemes)
}

fn read_name(chars: &mut CharIndices, start: usize, delimiter: char) -> Result<String, SyntaxError> {
    let mut name = String::new();
    for (_, character) in chars {
        if character == delimiter {
            if name.is_empty() {
                return Err(SyntaxError::EmptyName { offset: start });
            }
            return Ok(name);
        }
        name.push(character);
    }
    Err(SyntaxError::UnterminatedName {
        delimiter,
        offset: start,
    })
}

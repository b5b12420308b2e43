use std::fmt;

use thiserror::Error;

use crate::lr1::{Action, Symbol};

/// Malformed grammar text, reported by the tokenizer or the grammar parser
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SyntaxError {
    #[error("unexpected character `{character}` at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },
    #[error("missing closing `{delimiter}` for name starting at offset {offset}")]
    UnterminatedName { delimiter: char, offset: usize },
    #[error("empty name at offset {offset}")]
    EmptyName { offset: usize },
    #[error("expected {expected} but got {found} (token {index}, offset {offset})")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        index: usize,
        offset: usize,
    },
    #[error("expected {expected} but reached the end of the grammar")]
    UnexpectedEnd { expected: &'static str },
    #[error("production for <{nonterminal}> has an empty right-hand side (token {index})")]
    EmptyRightHandSide { nonterminal: String, index: usize },
    #[error("terminal [{name}] at offset {offset} is reserved for the end of input")]
    ReservedTerminal { name: String, offset: usize },
    #[error("grammar contains no productions")]
    EmptyGrammar,
}

/// Errors raised while compiling a grammar into a parse table
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GenerationError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("grammar has no start production")]
    MissingStartProduction,
    #[error("nonterminal <{nonterminal}> is used in a production of <{lhs}> but never defined")]
    UndefinedNonterminal { nonterminal: String, lhs: String },
    #[error("productions {:?} share the right-hand side `{}`", .productions, display_rhs(.rhs))]
    DuplicateRightHandSide {
        rhs: Vec<Symbol>,
        productions: Vec<usize>,
    },
    #[error("grammar is ambiguous: {0}")]
    GrammarAmbiguity(Conflict),
}

fn display_rhs(rhs: &[Symbol]) -> String {
    let symbols: Vec<String> = rhs.iter().map(|symbol| symbol.to_string()).collect();
    symbols.join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    ShiftReduce,
    ReduceReduce,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ConflictKind::ShiftReduce => write!(f, "shift-reduce"),
            ConflictKind::ReduceReduce => write!(f, "reduce-reduce"),
        }
    }
}

/// Two competing actions for the same ACTION cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub state: usize,
    pub terminal: String,
    pub existing: Action,
    pub incoming: Action,
}

impl Conflict {
    pub fn kind(&self) -> ConflictKind {
        match (&self.existing, &self.incoming) {
            (Action::Reduce(_), Action::Reduce(_)) => ConflictKind::ReduceReduce,
            (Action::Shift(_), _) | (_, Action::Shift(_)) => ConflictKind::ShiftReduce,
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{} conflict in state {} on [{}]: {} vs. {}",
            self.kind(),
            self.state,
            self.terminal,
            self.existing,
            self.incoming
        )
    }
}

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::error::{GenerationError, SyntaxError};
use crate::lr1::grammar_parser::GrammarParser;
use crate::{tokenize, Options, Production, Symbol};

/// A parsed grammar
///
/// `terminals` and `nonterminals` keep the order in which names were first encountered. The
/// end-of-input terminal is always the last entry of `terminals`.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub start: String,
    pub end: String,
    pub productions: Vec<Production>,
    pub terminals: IndexSet<String>,
    pub nonterminals: IndexSet<String>,
}

impl Grammar {
    /// Parse grammar text using the default end-of-input name
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        Self::parse_with(source, &Options::default())
    }

    pub fn parse_with(source: &str, options: &Options) -> Result<Self, SyntaxError> {
        let lexemes = tokenize(source)?;
        let productions = GrammarParser::new(&lexemes, &options.end_of_input).parse()?;
        Ok(Self::from_productions(productions, &options.end_of_input))
    }

    /// Build a grammar from already parsed productions
    ///
    /// The first production is the start production, regardless of the `is_start` flags passed in.
    pub fn from_productions(mut productions: Vec<Production>, end: &str) -> Self {
        let mut terminals = IndexSet::new();
        let mut nonterminals = IndexSet::new();

        for (idx, production) in productions.iter_mut().enumerate() {
            production.is_start = idx == 0;
            nonterminals.insert(production.lhs.clone());
            for symbol in production.rhs.iter() {
                match symbol {
                    Symbol::Terminal(t) => terminals.insert(t.clone()),
                    Symbol::Nonterminal(n) => nonterminals.insert(n.clone()),
                };
            }
        }
        terminals.insert(end.to_owned());

        let start = productions
            .first()
            .map(|production| production.lhs.clone())
            .unwrap_or_default();

        Grammar {
            start,
            end: end.to_owned(),
            productions,
            terminals,
            nonterminals,
        }
    }

    /// The production flagged as start production, together with its index
    pub fn start_production(&self) -> Option<(usize, &Production)> {
        self.productions
            .iter()
            .enumerate()
            .find(|(_, production)| production.is_start)
    }

    /// All productions with `lhs` as left-hand side
    pub fn productions_for<'g>(
        &'g self,
        lhs: &'g str,
    ) -> impl Iterator<Item = (usize, &'g Production)> + 'g {
        self.productions
            .iter()
            .enumerate()
            .filter(move |(_, production)| production.lhs == lhs)
    }

    /// Whether at least one production has `nonterminal` as its left-hand side
    pub fn is_defined(&self, nonterminal: &str) -> bool {
        self.productions_for(nonterminal).next().is_some()
    }

    /// Reject grammars that use a nonterminal no production defines
    ///
    /// Every right-hand side is checked, including those of productions unreachable from the
    /// start production.
    pub fn check_defined_nonterminals(&self) -> Result<(), GenerationError> {
        for production in self.productions.iter() {
            for symbol in production.rhs.iter() {
                if let Symbol::Nonterminal(n) = symbol {
                    if !self.is_defined(n) {
                        return Err(GenerationError::UndefinedNonterminal {
                            nonterminal: n.clone(),
                            lhs: production.lhs.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Reject grammars in which two productions share the same right-hand side
    ///
    /// Reduce actions are resolved by right-hand side, so such a grammar has no unambiguous
    /// reduce target.
    pub fn check_unique_right_hand_sides(&self) -> Result<(), GenerationError> {
        let mut seen: HashSet<&[Symbol]> = HashSet::new();
        for production in self.productions.iter() {
            if !seen.insert(production.rhs.as_slice()) {
                let productions = self
                    .productions
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| other.rhs == production.rhs)
                    .map(|(idx, _)| idx)
                    .collect();
                return Err(GenerationError::DuplicateRightHandSide {
                    rhs: production.rhs.clone(),
                    productions,
                });
            }
        }
        Ok(())
    }
}

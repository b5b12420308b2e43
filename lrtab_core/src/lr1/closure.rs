use std::collections::VecDeque;

use log::trace;

use crate::error::GenerationError;
use crate::{Grammar, Item, ItemSet, Sets, Symbol};

/// Item closure over a fixed grammar
///
/// The closure of an item set contains, for every item with a dot in front of a nonterminal,
/// the items for all productions of that nonterminal with the dot at the start.
pub struct Closure<'g> {
    grammar: &'g Grammar,
    sets: &'g Sets,
}

impl<'g> Closure<'g> {
    pub fn new(grammar: &'g Grammar, sets: &'g Sets) -> Self {
        Self { grammar, sets }
    }

    /// Close a set of seed items
    ///
    /// Items are expanded breadth-first. An item whose core is already present only has its
    /// lookahead merged; the newly added terminals are queued again so they reach the items
    /// derived from it.
    pub fn close<I>(&self, seeds: I) -> Result<ItemSet, GenerationError>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut closure = ItemSet::new();
        let mut unclosed = VecDeque::new();
        for seed in seeds {
            if let Some(added) = closure.merge(seed) {
                unclosed.push_back(added);
            }
        }

        while let Some(item) = unclosed.pop_front() {
            let nonterminal = match item.next_symbol() {
                Some(Symbol::Nonterminal(n)) => n,
                Some(Symbol::Terminal(_)) | None => continue,
            };

            let productions: Vec<_> = self.grammar.productions_for(nonterminal).collect();
            if productions.is_empty() {
                return Err(GenerationError::UndefinedNonterminal {
                    nonterminal: nonterminal.clone(),
                    lhs: item.lhs.clone(),
                });
            }

            let lookahead = match item.rhs.get(item.dot + 1) {
                // Terminals that can follow the nonterminal inside this production
                Some(next_symbol) => self.sets.first(next_symbol),
                // At the end of the production, whatever may follow the item follows the
                // nonterminal as well
                None => item.lookahead.clone(),
            };

            for (production_idx, production) in productions {
                let new_item = Item::new(production_idx, production, lookahead.clone());
                if let Some(added) = closure.merge(new_item) {
                    unclosed.push_back(added);
                }
            }
        }

        trace!("Closed item set with {} items", closure.len());
        Ok(closure)
    }
}

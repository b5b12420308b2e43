use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{Grammar, Lookahead, Symbol};

/// FIRST set per nonterminal
pub type FirstSets = BTreeMap<String, BTreeSet<String>>;

/// FOLLOW set per nonterminal, may contain the end-of-input terminal
pub type FollowSets = BTreeMap<String, BTreeSet<String>>;

/// FIRST and FOLLOW sets of a grammar
///
/// Computed once per grammar and shared read-only by every closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sets {
    pub first: FirstSets,
    pub follow: FollowSets,
}

impl Sets {
    /// Solve the FIRST and FOLLOW equations by fixed-point iteration
    ///
    /// Only the first symbol of a right-hand side contributes to FIRST, as right-hand sides
    /// are never empty.
    pub fn compute(grammar: &Grammar) -> Self {
        let mut first = empty_sets(grammar);
        let mut first_passes = 1;
        while first_pass(grammar, &mut first) {
            first_passes += 1;
        }

        let mut follow = empty_sets(grammar);
        if let Some(set) = follow.get_mut(&grammar.start) {
            set.insert(grammar.end.clone());
        }
        let mut follow_passes = 1;
        while follow_pass(grammar, &first, &mut follow) {
            follow_passes += 1;
        }

        debug!(
            "FIRST sets stable after {} passes, FOLLOW sets after {} passes",
            first_passes, follow_passes
        );
        Sets { first, follow }
    }

    /// FIRST set of a single symbol
    ///
    /// The FIRST set of a terminal `t` is `{t}`.
    pub fn first(&self, symbol: &Symbol) -> Lookahead {
        match symbol {
            Symbol::Terminal(t) => {
                let mut set = BTreeSet::new();
                set.insert(t.clone());
                set
            }
            Symbol::Nonterminal(n) => self.first.get(n).cloned().unwrap_or_default(),
        }
    }
}

fn empty_sets(grammar: &Grammar) -> BTreeMap<String, BTreeSet<String>> {
    grammar
        .nonterminals
        .iter()
        .map(|n| (n.clone(), BTreeSet::new()))
        .collect()
}

/// One pass over all productions applying the FIRST equations
///
/// Returns whether any set grew.
pub(crate) fn first_pass(grammar: &Grammar, first: &mut FirstSets) -> bool {
    let mut changed = false;
    for production in grammar.productions.iter() {
        let additions: Vec<String> = match production.rhs.first() {
            Some(Symbol::Terminal(t)) => vec![t.clone()],
            Some(Symbol::Nonterminal(n)) => first
                .get(n)
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default(),
            None => Vec::new(),
        };
        let set = first.entry(production.lhs.clone()).or_default();
        for terminal in additions {
            changed |= set.insert(terminal);
        }
    }
    changed
}

/// One pass over all productions applying the FOLLOW equations
///
/// Returns whether any set grew.
pub(crate) fn follow_pass(grammar: &Grammar, first: &FirstSets, follow: &mut FollowSets) -> bool {
    let mut changed = false;
    for production in grammar.productions.iter() {
        for (pos, symbol) in production.rhs.iter().enumerate() {
            let nonterminal = match symbol {
                Symbol::Nonterminal(n) => n,
                Symbol::Terminal(_) => continue,
            };
            let additions: Vec<String> = match production.rhs.get(pos + 1) {
                None => follow
                    .get(&production.lhs)
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default(),
                Some(Symbol::Terminal(t)) => vec![t.clone()],
                Some(Symbol::Nonterminal(next)) => first
                    .get(next)
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default(),
            };
            let set = follow.entry(nonterminal.clone()).or_default();
            for terminal in additions {
                changed |= set.insert(terminal);
            }
        }
    }
    changed
}

use std::collections::hash_map::DefaultHasher;
use std::collections::{btree_map, BTreeMap, HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use log::{debug, trace, warn};

use crate::error::{Conflict, GenerationError};
use crate::{
    Action, Closure, ConflictPolicy, Grammar, Item, ItemSet, Lookahead, Options, Production, Sets,
    State, Symbol,
};

/// ACTION entries per state id, keyed by terminal
pub type ActionTable = Vec<BTreeMap<String, Action>>;

/// GOTO entries per state id, keyed by nonterminal
pub type GotoTable = Vec<BTreeMap<String, usize>>;

#[derive(Debug)]
pub struct ParseTable {
    pub grammar: Grammar,
    pub sets: Sets,
    pub states: Vec<State>,
    pub actions: ActionTable,
    pub gotos: GotoTable,
    /// Conflicts recorded under `ConflictPolicy::Report`; always empty under `ConflictPolicy::Fail`
    pub conflicts: Vec<Conflict>,
}

impl ParseTable {
    /// Generate an LR(1) parse table, failing on the first conflict
    pub fn generate(grammar: Grammar) -> Result<Self, GenerationError> {
        Self::generate_with(grammar, &Options::default())
    }

    pub fn generate_with(grammar: Grammar, options: &Options) -> Result<Self, GenerationError> {
        let start = grammar
            .start_production()
            .map(|(idx, _)| idx)
            .ok_or(GenerationError::MissingStartProduction)?;
        grammar.check_defined_nonterminals()?;
        grammar.check_unique_right_hand_sides()?;
        let sets = Sets::compute(&grammar);

        let automaton = ParseTableGenerator::new(&grammar, &sets, options.conflicts).generate(start)?;
        debug!(
            "Generated {} states with {} conflicts",
            automaton.states.len(),
            automaton.conflicts.len()
        );

        Ok(ParseTable {
            grammar,
            sets,
            states: automaton.states,
            actions: automaton.actions,
            gotos: automaton.gotos,
            conflicts: automaton.conflicts,
        })
    }

    pub fn action(&self, state: usize, terminal: &str) -> Option<Action> {
        self.actions.get(state)?.get(terminal).copied()
    }

    pub fn goto(&self, state: usize, nonterminal: &str) -> Option<usize> {
        self.gotos.get(state)?.get(nonterminal).copied()
    }

    pub fn start_production(&self) -> Option<(usize, &Production)> {
        self.grammar.start_production()
    }
}

struct Automaton {
    states: Vec<State>,
    actions: ActionTable,
    gotos: GotoTable,
    conflicts: Vec<Conflict>,
}

/// Items advanced over the same symbol, forming the seeds of a successor state
struct Transition {
    kernel: Item,
    seeds: Vec<Item>,
}

impl Transition {
    fn add(transitions: &mut IndexMap<String, Transition>, symbol: &str, item: Item) {
        transitions
            .entry(symbol.to_owned())
            .or_insert_with(|| Transition {
                kernel: item.clone(),
                seeds: Vec::new(),
            })
            .seeds
            .push(item);
    }
}

struct ParseTableGenerator<'g> {
    grammar: &'g Grammar,
    closure: Closure<'g>,
    policy: ConflictPolicy,
    states: Vec<State>,
    /// State ids by hash of kernel and item set
    state_index: HashMap<u64, Vec<usize>>,
    unprocessed: VecDeque<usize>,
    actions: ActionTable,
    gotos: GotoTable,
    conflicts: Vec<Conflict>,
}

impl<'g> ParseTableGenerator<'g> {
    fn new(grammar: &'g Grammar, sets: &'g Sets, policy: ConflictPolicy) -> Self {
        Self {
            grammar,
            closure: Closure::new(grammar, sets),
            policy,
            states: Vec::new(),
            state_index: HashMap::new(),
            unprocessed: VecDeque::new(),
            actions: Vec::new(),
            gotos: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    fn generate(mut self, start: usize) -> Result<Automaton, GenerationError> {
        let mut lookahead = Lookahead::new();
        lookahead.insert(self.grammar.end.clone());
        let kernel = Item::new(start, &self.grammar.productions[start], lookahead);
        let items = self.closure.close(vec![kernel.clone()])?;
        self.add_state(kernel, items);

        while let Some(current_state) = self.unprocessed.pop_front() {
            self.expand_state(current_state)?;
        }

        Ok(Automaton {
            states: self.states,
            actions: self.actions,
            gotos: self.gotos,
            conflicts: self.conflicts,
        })
    }

    /// Fill the ACTION and GOTO rows of a state
    ///
    /// Complete items yield reduce actions for each of their lookahead terminals. All other items
    /// are grouped by the symbol after their dot; each group, with the dot advanced, seeds the
    /// successor state for that symbol.
    fn expand_state(&mut self, current_state: usize) -> Result<(), GenerationError> {
        let items = self.states[current_state].items.clone();
        let mut gotos = IndexMap::new();
        let mut shifts = IndexMap::new();

        for item in items.iter() {
            match item.next_symbol() {
                None => {
                    for terminal in item.lookahead.iter() {
                        self.set_action(current_state, terminal, Action::Reduce(item.production))?;
                    }
                }
                Some(Symbol::Nonterminal(n)) => Transition::add(&mut gotos, n, item.advance()),
                Some(Symbol::Terminal(t)) => Transition::add(&mut shifts, t, item.advance()),
            }
        }

        for (nonterminal, transition) in gotos {
            let target = self.successor(transition)?;
            trace!("GOTO({}, <{}>) = {}", current_state, nonterminal, target);
            self.gotos[current_state].insert(nonterminal, target);
        }

        for (terminal, transition) in shifts {
            let target = self.successor(transition)?;
            self.set_action(current_state, &terminal, Action::Shift(target))?;
        }

        Ok(())
    }

    /// Close a transition's seeds and find or create the resulting state
    fn successor(&mut self, transition: Transition) -> Result<usize, GenerationError> {
        let items = self.closure.close(transition.seeds)?;
        let kernel = transition.kernel;

        let hash = state_hash(&kernel, &items);
        if let Some(candidates) = self.state_index.get(&hash) {
            if let Some(&id) = candidates
                .iter()
                .find(|&&id| self.states[id].is_same(&kernel, &items))
            {
                return Ok(id);
            }
        }

        Ok(self.add_state(kernel, items))
    }

    fn add_state(&mut self, kernel: Item, items: ItemSet) -> usize {
        let id = self.states.len();
        trace!("State {}: kernel {}, {} items", id, kernel, items.len());
        self.state_index
            .entry(state_hash(&kernel, &items))
            .or_insert_with(Vec::new)
            .push(id);
        self.states.push(State { id, kernel, items });
        self.actions.push(BTreeMap::new());
        self.gotos.push(BTreeMap::new());
        self.unprocessed.push_back(id);
        id
    }

    /// Write an ACTION cell
    ///
    /// A second, different action for an occupied cell is a conflict. It either aborts generation
    /// or is recorded while the first action stays in place, depending on the conflict policy.
    fn set_action(
        &mut self,
        state: usize,
        terminal: &str,
        action: Action,
    ) -> Result<(), GenerationError> {
        match self.actions[state].entry(terminal.to_owned()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(action);
                Ok(())
            }
            btree_map::Entry::Occupied(entry) => {
                let existing = *entry.get();
                if existing == action {
                    return Ok(());
                }
                let conflict = Conflict {
                    state,
                    terminal: terminal.to_owned(),
                    existing,
                    incoming: action,
                };
                match self.policy {
                    ConflictPolicy::Fail => Err(GenerationError::GrammarAmbiguity(conflict)),
                    ConflictPolicy::Report => {
                        warn!("{}", conflict);
                        self.conflicts.push(conflict);
                        Ok(())
                    }
                }
            }
        }
    }
}

fn state_hash(kernel: &Item, items: &ItemSet) -> u64 {
    let mut hasher = DefaultHasher::new();
    kernel.hash(&mut hasher);
    items.hash(&mut hasher);
    hasher.finish()
}

use std::collections::{btree_set, BTreeSet};
use std::fmt;
use std::iter::FromIterator;

use crate::{Production, Symbol};

/// Set of lookahead terminals
///
/// Using BTreeSet here, as its equality, ordering and hash do not depend on insertion order.
pub type Lookahead = BTreeSet<String>;

/// LR(1) item
///
/// The core of an item is its production and dot position; `lhs` and `rhs` are copies of the
/// production's sides.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Debug)]
pub struct Item {
    pub production: usize,
    pub lhs: String,
    pub rhs: Vec<Symbol>,
    pub dot: usize,
    pub lookahead: Lookahead,
}

impl Item {
    /// Item for `production` with the dot in front of the first symbol
    pub fn new(production_idx: usize, production: &Production, lookahead: Lookahead) -> Self {
        Item {
            production: production_idx,
            lhs: production.lhs.clone(),
            rhs: production.rhs.clone(),
            dot: 0,
            lookahead,
        }
    }

    pub fn next_symbol(&self) -> Option<&Symbol> {
        self.rhs.get(self.dot)
    }

    /// Whether the dot is at the end, i.e. the item calls for a reduction
    pub fn is_complete(&self) -> bool {
        self.dot == self.rhs.len()
    }

    /// Copy of this item with the dot moved over the next symbol
    pub fn advance(&self) -> Item {
        Item {
            dot: self.dot + 1,
            ..self.clone()
        }
    }

    /// Same production and dot position, lookahead ignored
    pub fn same_core(&self, other: &Item) -> bool {
        self.production == other.production
            && self.dot == other.dot
            && self.lhs == other.lhs
            && self.rhs == other.rhs
    }

    pub fn dotted_rule_string(&self) -> String {
        let mut result = format!("<{}> →", self.lhs);
        for p in 0..=self.rhs.len() {
            if p == self.dot {
                result.push_str(" •");
            }
            if p < self.rhs.len() {
                result.push_str(&format!(" {}", self.rhs[p]));
            }
        }
        result
    }

    pub fn lookahead_string(&self) -> String {
        let lookahead_strings: Vec<&str> = self.lookahead.iter().map(String::as_str).collect();
        lookahead_strings.join(", ")
    }
}

impl fmt::Display for Item {
    fn fmt<'f>(&self, f: &mut fmt::Formatter<'f>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{} {{{}}}",
            self.dotted_rule_string(),
            self.lookahead_string()
        )
    }
}

/// A set of items with unique cores
///
/// Items sharing a core are merged into one item carrying the union of their lookaheads.
/// Equality and hashing are independent of the order in which items were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemSet {
    items: BTreeSet<Item>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging its lookahead into an existing item with the same core
    ///
    /// Returns the part of `item` that was not yet present: the whole item if its core is new,
    /// otherwise the item restricted to the newly added lookahead terminals. Returns `None` if
    /// nothing changed.
    pub fn merge(&mut self, item: Item) -> Option<Item> {
        let existing = self.get_core(&item).cloned();

        match existing {
            None => {
                self.items.insert(item.clone());
                Some(item)
            }
            Some(mut merged) => {
                let added: Lookahead = item
                    .lookahead
                    .difference(&merged.lookahead)
                    .cloned()
                    .collect();
                if added.is_empty() {
                    return None;
                }
                self.items.remove(&merged);
                merged.lookahead.extend(added.iter().cloned());
                self.items.insert(merged);
                Some(Item {
                    lookahead: added,
                    ..item
                })
            }
        }
    }

    /// The item with the same core as `item`, if present
    pub fn get_core(&self, item: &Item) -> Option<&Item> {
        // Items are ordered by core first and the empty lookahead is the smallest one, so an item
        // with the same core is the first one at or after this lower bound.
        let lower_bound = Item {
            lookahead: Lookahead::new(),
            ..item.clone()
        };
        self.items
            .range(lower_bound..)
            .next()
            .filter(|other| other.same_core(item))
    }

    pub fn iter(&self) -> btree_set::Iter<Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut set = ItemSet::new();
        for item in iter {
            set.merge(item);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = btree_set::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//! Canonical LR(1) table construction for grammars written in the
//! `<Nonterminal> : [terminal] <Nonterminal> ;` notation.
//!
//! ```ignore
//! let grammar = lrtab_core::Grammar::parse("<S> : [a] ;")?;
//! let table = lrtab_core::ParseTable::generate(grammar)?;
//! ```

mod error;
mod lr1;

pub use crate::error::{Conflict, ConflictKind, GenerationError, SyntaxError};
pub use crate::lr1::*;

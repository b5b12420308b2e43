mod token;
pub use self::token::{tokenize, Lexeme, Token};

mod grammar;
mod grammar_parser;
pub use self::grammar::Grammar;

mod rule;
pub use self::rule::Production;

mod sets;
pub use self::sets::{FirstSets, FollowSets, Sets};

mod options;
pub use self::options::{ConflictPolicy, Options, DEFAULT_END_OF_INPUT};

mod parse_table;
pub use self::parse_table::{ActionTable, GotoTable, ParseTable};

mod closure;
pub use self::closure::Closure;

mod state;
pub use self::state::State;

mod item;
pub use self::item::{Item, ItemSet, Lookahead};

mod symbol;
pub use self::symbol::Symbol;

mod action;
pub use self::action::Action;

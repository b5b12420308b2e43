use std::fmt;

/// A grammar symbol on the right-hand side of a production
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

impl fmt::Display for Symbol {
    fn fmt<'a>(&self, f: &mut fmt::Formatter<'a>) -> Result<(), fmt::Error> {
        match self {
            Symbol::Terminal(t) => write!(f, "[{}]", t),
            Symbol::Nonterminal(n) => write!(f, "<{}>", n),
        }
    }
}

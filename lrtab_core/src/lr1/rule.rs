use std::fmt;

use crate::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    pub lhs: String,
    pub rhs: Vec<Symbol>,
    /// Set for the first declared production only
    pub is_start: bool,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "<{}> :", self.lhs)?;
        for symbol in self.rhs.iter() {
            write!(f, " {}", symbol)?;
        }
        write!(f, " ;")
    }
}

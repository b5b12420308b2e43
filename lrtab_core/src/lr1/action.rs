use std::fmt;

/// An ACTION table entry
///
/// `Shift` carries the target state id, `Reduce` the index of the production to reduce by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Action::Shift(state) => write!(f, "s{}", state),
            Action::Reduce(production) => write!(f, "r{}", production),
        }
    }
}

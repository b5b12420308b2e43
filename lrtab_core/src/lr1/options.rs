/// Name of the terminal that marks the end of input unless configured otherwise
pub const DEFAULT_END_OF_INPUT: &str = "eof";

/// What to do when two actions compete for the same ACTION cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Abort generation with `GenerationError::GrammarAmbiguity`
    Fail,
    /// Keep the action written first and record the conflict in `ParseTable::conflicts`
    Report,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        ConflictPolicy::Fail
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub end_of_input: String,
    pub conflicts: ConflictPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            end_of_input: DEFAULT_END_OF_INPUT.to_owned(),
            conflicts: ConflictPolicy::default(),
        }
    }
}

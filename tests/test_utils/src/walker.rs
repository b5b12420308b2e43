use lrtab_core::{Action, ParseTable};

use crate::TerminalStream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Shift { terminal: String, state: usize },
    Reduce { production: usize, goto: usize },
    /// Reduction by the start production with nothing left on the input
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    MissingAction { state: usize, terminal: String },
    MissingGoto { state: usize, nonterminal: String },
    MissingStartProduction,
    StackUnderflow,
}

/// Run a shift-reduce trace of `input` through the ACTION and GOTO tables
///
/// Every table lookup the trace needs must succeed; the first missing cell is returned as an
/// error.
pub fn walk(parse_table: &ParseTable, input: &[&str]) -> Result<Vec<Step>, WalkError> {
    let (start, _) = parse_table
        .start_production()
        .ok_or(WalkError::MissingStartProduction)?;
    let mut stream = TerminalStream::new(input, &parse_table.grammar.end);
    let mut stack = vec![0];
    let mut steps = Vec::new();

    loop {
        let state = *stack.last().ok_or(WalkError::StackUnderflow)?;
        let terminal = stream.terminal();
        match parse_table.action(state, terminal) {
            None => {
                return Err(WalkError::MissingAction {
                    state,
                    terminal: terminal.to_owned(),
                });
            }
            Some(Action::Shift(target)) => {
                stack.push(target);
                steps.push(Step::Shift {
                    terminal: terminal.to_owned(),
                    state: target,
                });
                stream.advance();
            }
            Some(Action::Reduce(production)) => {
                let production_rule = &parse_table.grammar.productions[production];
                if stack.len() <= production_rule.rhs.len() {
                    return Err(WalkError::StackUnderflow);
                }
                stack.truncate(stack.len() - production_rule.rhs.len());

                if production == start && stack.len() == 1 && stream.is_at_end() {
                    steps.push(Step::Accept);
                    return Ok(steps);
                }

                let top = *stack.last().ok_or(WalkError::StackUnderflow)?;
                let target = parse_table.goto(top, &production_rule.lhs).ok_or_else(|| {
                    WalkError::MissingGoto {
                        state: top,
                        nonterminal: production_rule.lhs.clone(),
                    }
                })?;
                stack.push(target);
                steps.push(Step::Reduce {
                    production,
                    goto: target,
                });
            }
        }
    }
}

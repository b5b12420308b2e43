#![cfg(test)]

use std::collections::BTreeSet;

use lrtab_core::{
    Action, ConflictKind, ConflictPolicy, GenerationError, Grammar, Options, ParseTable,
};
use matches::assert_matches;
use pretty_assertions::assert_eq;
use test_utils::{walk, Step, WalkError};

const SINGLE_TERMINAL: &str = "<S> : [a] ;";

const EXPRESSIONS: &str = "
    <E> : <E> [plus] <T> ;
    <E> : <T> ;
    <T> : [id] ;
";

const DANGLING_ELSE: &str = "
    <P> : <S> ;
    <S> : [if] <E> [then] <S> ;
    <S> : [if] <E> [then] <S> [else] <S> ;
    <S> : [other] ;
    <E> : [cond] ;
";

const ARITHMETIC: &str = "
    <P> : <E> ;
    <E> : <E> [plus] <T> ;
    <E> : <T> ;
    <T> : <T> [times] <F> ;
    <T> : <F> ;
    <F> : [lparen] <E> [rparen] ;
    <F> : [id] ;
";

fn generate(source: &str) -> Result<ParseTable, GenerationError> {
    let grammar = Grammar::parse(source)?;
    ParseTable::generate(grammar)
}

fn reductions(steps: &[Step]) -> Vec<usize> {
    steps
        .iter()
        .filter_map(|step| match step {
            Step::Reduce { production, .. } => Some(*production),
            _ => None,
        })
        .collect()
}

#[test]
fn test_single_terminal() {
    let table = generate(SINGLE_TERMINAL).unwrap();

    assert_eq!(table.states.len(), 2);
    assert_eq!(table.action(0, "a"), Some(Action::Shift(1)));
    assert_eq!(table.action(1, "eof"), Some(Action::Reduce(0)));
    assert_eq!(table.action(0, "eof"), None);
    assert_eq!(table.action(1, "a"), None);

    assert_eq!(
        walk(&table, &["a"]).unwrap(),
        vec![
            Step::Shift {
                terminal: "a".to_owned(),
                state: 1
            },
            Step::Accept
        ]
    );
}

#[test]
fn test_single_terminal_rejects_other_input() {
    let table = generate(SINGLE_TERMINAL).unwrap();

    assert_eq!(
        walk(&table, &[]).unwrap_err(),
        WalkError::MissingAction {
            state: 0,
            terminal: "eof".to_owned()
        }
    );
    assert_eq!(
        walk(&table, &["a", "a"]).unwrap_err(),
        WalkError::MissingAction {
            state: 1,
            terminal: "a".to_owned()
        }
    );
}

#[test]
fn test_left_recursive_expressions() {
    let table = generate(EXPRESSIONS).unwrap();
    assert!(table.conflicts.is_empty());

    let steps = walk(&table, &["id", "plus", "id"]).unwrap();
    assert_eq!(steps.last(), Some(&Step::Accept));
    assert_eq!(reductions(&steps), vec![2, 1, 2]);

    let steps = walk(&table, &["id", "plus", "id", "plus", "id"]).unwrap();
    assert_eq!(steps.last(), Some(&Step::Accept));
    assert_eq!(reductions(&steps), vec![2, 1, 2, 0, 2]);
}

#[test]
fn test_left_recursive_expressions_reject_malformed_input() {
    let table = generate(EXPRESSIONS).unwrap();

    assert_matches!(
        walk(&table, &["id", "id"]),
        Err(WalkError::MissingAction { ref terminal, .. }) if terminal == "id"
    );
    assert_matches!(
        walk(&table, &["id", "plus"]),
        Err(WalkError::MissingAction { ref terminal, .. }) if terminal == "eof"
    );
}

#[test]
fn test_arithmetic_with_precedence_levels() {
    let table = generate(ARITHMETIC).unwrap();
    assert!(table.conflicts.is_empty());

    let input = ["id", "plus", "id", "times", "lparen", "id", "plus", "id", "rparen"];
    let steps = walk(&table, &input).unwrap();
    assert_eq!(steps.last(), Some(&Step::Accept));

    assert_matches!(
        walk(&table, &["lparen", "id"]),
        Err(WalkError::MissingAction { .. })
    );
}

#[test]
fn test_undefined_nonterminal() {
    let err = generate("<S> : [a] <Undefined> ;").unwrap_err();
    assert_eq!(
        err,
        GenerationError::UndefinedNonterminal {
            nonterminal: "Undefined".to_owned(),
            lhs: "S".to_owned(),
        }
    );
}

#[test]
fn test_undefined_nonterminal_outside_reachable_productions() {
    let err = generate("<S> : [a] ; <X> : [b] <Undefined> ;").unwrap_err();
    assert_eq!(
        err,
        GenerationError::UndefinedNonterminal {
            nonterminal: "Undefined".to_owned(),
            lhs: "X".to_owned(),
        }
    );
}

#[test]
fn test_duplicate_right_hand_side() {
    let err = generate("<P> : <S> ; <S> : [a] ; <T> : [a] ;").unwrap_err();
    assert_matches!(
        err,
        GenerationError::DuplicateRightHandSide { ref productions, .. } if productions == &vec![1, 2]
    );
}

#[test]
fn test_dangling_else_is_ambiguous() {
    let err = generate(DANGLING_ELSE).unwrap_err();
    let conflict = match err {
        GenerationError::GrammarAmbiguity(conflict) => conflict,
        other => panic!("expected ambiguity, got {:?}", other),
    };

    assert_eq!(conflict.terminal, "else");
    assert_eq!(conflict.kind(), ConflictKind::ShiftReduce);
    assert_matches!(conflict.existing, Action::Reduce(1));
    assert_matches!(conflict.incoming, Action::Shift(_));

    let message = GenerationError::GrammarAmbiguity(conflict).to_string();
    assert!(message.contains("r1"));
    assert!(message.contains("[else]"));
}

#[test]
fn test_dangling_else_with_reported_conflicts() {
    let options = Options {
        conflicts: ConflictPolicy::Report,
        ..Options::default()
    };
    let grammar = Grammar::parse(DANGLING_ELSE).unwrap();
    let table = ParseTable::generate_with(grammar, &options).unwrap();
    assert!(!table.conflicts.is_empty());
    assert!(table.conflicts.iter().all(|conflict| conflict.terminal == "else"));

    let input = [
        "if", "cond", "then", "if", "cond", "then", "other", "else", "other",
    ];
    let steps = walk(&table, &input).unwrap();
    assert_eq!(steps.last(), Some(&Step::Accept));
}

#[test]
fn test_initial_kernel_and_follow_of_start() {
    for source in &[SINGLE_TERMINAL, EXPRESSIONS, ARITHMETIC] {
        let table = generate(source).unwrap();
        let end = table.grammar.end.clone();

        let expected: BTreeSet<String> = vec![end.clone()].into_iter().collect();
        assert_eq!(table.states[0].kernel.lookahead, expected);
        assert_eq!(table.states[0].kernel.dot, 0);
        assert_eq!(table.states[0].kernel.production, 0);

        assert!(table.sets.follow[&table.grammar.start].contains(&end));
    }
}

#[test]
fn test_states_are_structurally_distinct() {
    for source in &[SINGLE_TERMINAL, EXPRESSIONS, ARITHMETIC] {
        let table = generate(source).unwrap();
        for (i, a) in table.states.iter().enumerate() {
            for b in table.states.iter().skip(i + 1) {
                assert!(!(a.kernel == b.kernel && a.items == b.items));
            }
        }
    }
}

#[test]
fn test_table_entries_stay_in_range() {
    let table = generate(ARITHMETIC).unwrap();
    let state_count = table.states.len();
    assert_eq!(table.actions.len(), state_count);
    assert_eq!(table.gotos.len(), state_count);

    for (actions, gotos) in table.actions.iter().zip(table.gotos.iter()) {
        for (terminal, action) in actions.iter() {
            assert!(table.grammar.terminals.contains(terminal));
            match action {
                Action::Shift(target) => assert!(*target < state_count),
                Action::Reduce(production) => {
                    assert!(*production < table.grammar.productions.len())
                }
            }
        }
        for (nonterminal, target) in gotos.iter() {
            assert!(table.grammar.nonterminals.contains(nonterminal));
            assert!(*target < state_count);
        }
    }
}

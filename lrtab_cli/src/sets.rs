use prettytable as pt;
use prettytable::row;

use lrtab_core::{Grammar, Sets};

pub fn print_sets(grammar: &Grammar) {
    let sets = Sets::compute(grammar);
    println!("{}", generate_production_table(grammar));
    println!("{}", generate_sets_table(grammar, &sets));
}

fn generate_production_table(grammar: &Grammar) -> pt::Table {
    let mut table = pt::Table::new();
    table.add_row(row!["#", "Production"]);
    for (idx, production) in grammar.productions.iter().enumerate() {
        let marker = if production.is_start { " (start)" } else { "" };
        table.add_row(row![idx, format!("{}{}", production, marker)]);
    }
    table
}

fn generate_sets_table(grammar: &Grammar, sets: &Sets) -> pt::Table {
    let mut table = pt::Table::new();
    table.add_row(row!["Nonterminal", "FIRST", "FOLLOW"]);
    for n in grammar.nonterminals.iter() {
        table.add_row(row![
            format!("<{}>", n),
            join(sets.first.get(n)),
            join(sets.follow.get(n))
        ]);
    }
    table
}

fn join<'a, I>(terminals: Option<I>) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    terminals
        .map(|terminals| {
            terminals
                .into_iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sets_table() {
        let grammar = Grammar::parse("<E> : <E> [plus] <T> ; <E> : <T> ; <T> : [id] ;").unwrap();
        let sets = Sets::compute(&grammar);
        let rendered = generate_sets_table(&grammar, &sets).to_string();

        for nonterminal in &["<E>", "<T>"] {
            let line = rendered
                .lines()
                .find(|line| line.contains(nonterminal))
                .unwrap();
            assert!(line.contains("| id "));
            assert!(line.contains("| eof, plus "));
        }
    }

    #[test]
    fn test_production_table_marks_start() {
        let grammar = Grammar::parse("<S> : [a] ; <S> : [b] ;").unwrap();
        let rendered = generate_production_table(&grammar).to_string();

        assert!(rendered.contains("<S> : [a] ; (start)"));
        assert!(!rendered.contains("<S> : [b] ; (start)"));
    }
}

use std::fs;

use anyhow::Result;
use lrtab_core::ParseTable;

pub fn write_table_text(parse_table: &ParseTable, output_filename: &str) -> Result<()> {
    fs::write(output_filename, render_table_text(parse_table))?;
    Ok(())
}

/// One line per state: `[terminal]=s3, [terminal]=r1, <Nonterminal>=4`
pub fn render_table_text(parse_table: &ParseTable) -> String {
    let lines: Vec<String> = parse_table
        .states
        .iter()
        .map(|state| {
            let actions = parse_table.grammar.terminals.iter().filter_map(|t| {
                parse_table
                    .action(state.id, t)
                    .map(|action| format!("[{}]={}", t, action))
            });
            let gotos = parse_table.grammar.nonterminals.iter().filter_map(|n| {
                parse_table
                    .goto(state.id, n)
                    .map(|target| format!("<{}>={}", n, target))
            });
            actions.chain(gotos).collect::<Vec<_>>().join(", ")
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use lrtab_core::Grammar;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_table_text() {
        let grammar = Grammar::parse("<S> : <A> ; <A> : [a] ;").unwrap();
        let parse_table = ParseTable::generate(grammar).unwrap();

        assert_eq!(
            render_table_text(&parse_table),
            "[a]=s2, <A>=1\n[eof]=r0\n[eof]=r1"
        );
    }
}

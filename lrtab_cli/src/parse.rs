use std::fs;

use anyhow::{Context, Result};
use log::info;
use lrtab_core::{Grammar, Options, ParseTable};

pub fn load_grammar(filename: &str, options: &Options) -> Result<Grammar> {
    let source = fs::read_to_string(filename)
        .with_context(|| format!("Failed to read grammar file `{}`", filename))?;
    let grammar = Grammar::parse_with(&source, options)
        .with_context(|| format!("Failed to parse grammar file `{}`", filename))?;
    info!(
        "Grammar has {} productions, {} nonterminals, {} terminals",
        grammar.productions.len(),
        grammar.nonterminals.len(),
        grammar.terminals.len()
    );
    Ok(grammar)
}

pub fn generate_parse_table(filename: &str, options: &Options) -> Result<ParseTable> {
    let grammar = load_grammar(filename, options)?;
    let parse_table = ParseTable::generate_with(grammar, options)
        .with_context(|| format!("Failed to generate parse table for `{}`", filename))?;
    info!("Parse table has {} states", parse_table.states.len());
    Ok(parse_table)
}

use std::fs::File;

use anyhow::Result;
use prettytable as pt;
use prettytable::cell;
use prettytable::row;

use lrtab_core::ParseTable;

pub fn print_table(parse_table: &ParseTable) {
    let pretty_table = generate_pretty_table(parse_table);
    println!("{}", pretty_table);
}

pub fn write_table_csv(parse_table: &ParseTable, csv_filename: &str) -> Result<()> {
    let csv_table = generate_csv_table(parse_table);
    let csv_file = File::create(csv_filename)?;
    csv_table.to_csv(csv_file)?;
    Ok(())
}

/// States with their item closures, followed by one column per terminal and per nonterminal
fn generate_pretty_table(parse_table: &ParseTable) -> pt::Table {
    let mut table = pt::Table::new();

    let mut title_row = row!["#", "LR(1) item closure", "Lookahead"];
    for t in parse_table.grammar.terminals.iter() {
        title_row.add_cell(cell!(format!("[{}]", t)));
    }
    for n in parse_table.grammar.nonterminals.iter() {
        title_row.add_cell(cell!(format!("<{}>", n)));
    }
    table.add_row(title_row);

    for state in parse_table.states.iter() {
        let (items, lookaheads): (Vec<_>, Vec<_>) = state
            .items
            .iter()
            .map(|item| (item.dotted_rule_string(), item.lookahead_string()))
            .unzip();

        let mut row = row![state.id, items.join("\n"), lookaheads.join("\n")];
        for cell in table_cells(parse_table, state.id) {
            row.add_cell(cell!(cell));
        }
        table.add_row(row);
    }

    table
}

/// ACTION/GOTO only, one row per state
fn generate_csv_table(parse_table: &ParseTable) -> pt::Table {
    let mut table = pt::Table::new();

    let mut title_row = row!["state"];
    for symbol in parse_table
        .grammar
        .terminals
        .iter()
        .chain(parse_table.grammar.nonterminals.iter())
    {
        title_row.add_cell(cell!(symbol));
    }
    table.add_row(title_row);

    for state in parse_table.states.iter() {
        let mut row = row![format!("state {}", state.id)];
        for cell in table_cells(parse_table, state.id) {
            row.add_cell(cell!(cell));
        }
        table.add_row(row);
    }

    table
}

/// ACTION cells for every terminal, then GOTO cells for every nonterminal
fn table_cells(parse_table: &ParseTable, state: usize) -> Vec<String> {
    let actions = parse_table.grammar.terminals.iter().map(|t| {
        parse_table
            .action(state, t)
            .map_or_else(String::new, |action| action.to_string())
    });
    let gotos = parse_table.grammar.nonterminals.iter().map(|n| {
        parse_table
            .goto(state, n)
            .map_or_else(String::new, |target| target.to_string())
    });
    actions.chain(gotos).collect()
}

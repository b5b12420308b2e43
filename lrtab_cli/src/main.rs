use std::process;

use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use lrtab_core::{ConflictPolicy, Options, ParseTable};

mod graphviz;
mod parse;
mod sets;
mod table;
mod text;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    if let Err(err) = cli() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn grammar_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("file")
            .help("Grammar file using the <Nonterminal> : [terminal] ... ; notation")
            .required(true),
        Arg::with_name("eof")
            .long("eof")
            .takes_value(true)
            .value_name("NAME")
            .help("Name of the end-of-input terminal (default: eof)"),
        Arg::with_name("allow-conflicts")
            .long("allow-conflicts")
            .help("Keep the first action of conflicting cells instead of failing"),
    ]
}

fn cli() -> Result<()> {
    let matches = App::new("lrtab")
        .about("Compiles grammars into LR(1) ACTION/GOTO tables")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            SubCommand::with_name("table")
                .args(&grammar_args())
                .arg(
                    Arg::with_name("csv")
                        .long("csv")
                        .takes_value(true)
                        .help("Write the parse table to a specified CSV file"),
                )
                .about("Prints the states and the ACTION/GOTO table of a grammar"),
        )
        .subcommand(
            SubCommand::with_name("text")
                .args(&grammar_args())
                .arg(
                    Arg::with_name("output")
                        .long("output")
                        .short("o")
                        .takes_value(true)
                        .help("Write the table to a file instead of stdout"),
                )
                .about("Outputs the ACTION/GOTO table in the compact one-line-per-state format"),
        )
        .subcommand(
            SubCommand::with_name("graph")
                .args(&grammar_args())
                .arg(
                    Arg::with_name("output")
                        .long("output")
                        .short("o")
                        .takes_value(true)
                        .help("Write the generated graphviz graph to a file (*.dot)"),
                )
                .about("Outputs a graphviz graph showing the LR(1) states of a grammar"),
        )
        .subcommand(
            SubCommand::with_name("sets")
                .args(&grammar_args())
                .about("Prints the numbered productions and the FIRST and FOLLOW sets"),
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    if let Some(table_opts) = matches.subcommand_matches("table") {
        let parse_table = load_table(table_opts)?;
        if let Some(csv_filename) = table_opts.value_of("csv") {
            table::write_table_csv(&parse_table, csv_filename)?;
        } else {
            table::print_table(&parse_table);
        }
        report_conflicts(&parse_table);
    }

    if let Some(text_opts) = matches.subcommand_matches("text") {
        let parse_table = load_table(text_opts)?;
        if let Some(output_filename) = text_opts.value_of("output") {
            text::write_table_text(&parse_table, output_filename)?;
        } else {
            println!("{}", text::render_table_text(&parse_table));
        }
        report_conflicts(&parse_table);
    }

    if let Some(graph_opts) = matches.subcommand_matches("graph") {
        let parse_table = load_table(graph_opts)?;
        if let Some(output_filename) = graph_opts.value_of("output") {
            graphviz::write_graphviz_graph(&parse_table, output_filename)?;
        } else {
            graphviz::show_graphviz_graph(&parse_table)?;
        }
        report_conflicts(&parse_table);
    }

    if let Some(sets_opts) = matches.subcommand_matches("sets") {
        let filename = sets_opts.value_of("file").unwrap_or_default();
        let grammar = parse::load_grammar(filename, &options(sets_opts))?;
        sets::print_sets(&grammar);
    }

    Ok(())
}

fn options(matches: &ArgMatches) -> Options {
    let mut options = Options::default();
    if let Some(end) = matches.value_of("eof") {
        options.end_of_input = end.to_owned();
    }
    if matches.is_present("allow-conflicts") {
        options.conflicts = ConflictPolicy::Report;
    }
    options
}

fn load_table(matches: &ArgMatches) -> Result<ParseTable> {
    // Required argument, clap rejects the command line without it
    let filename = matches.value_of("file").unwrap_or_default();
    parse::generate_parse_table(filename, &options(matches))
}

fn report_conflicts(parse_table: &ParseTable) {
    if parse_table.conflicts.is_empty() {
        return;
    }
    eprintln!("{} conflicts:", parse_table.conflicts.len());
    for conflict in parse_table.conflicts.iter() {
        eprintln!("  {}", conflict);
    }
}

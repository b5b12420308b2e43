use std::fs;
use std::io::Write;

use anyhow::Result;
use tempfile::NamedTempFile;

use lrtab_core::{Action, ParseTable};

pub fn write_graphviz_graph(parse_table: &ParseTable, output_filename: &str) -> Result<()> {
    let graphviz_string = render_graphviz_graph(parse_table);
    fs::write(output_filename, graphviz_string)?;
    Ok(())
}

pub fn show_graphviz_graph(parse_table: &ParseTable) -> Result<()> {
    let graphviz_string = render_graphviz_graph(parse_table);
    // We need the tempfile filename in order to open it with an associated application
    let mut temp_file = NamedTempFile::new()?;
    let path = format!("{}.dot", temp_file.path().to_string_lossy());
    write!(temp_file, "{}", graphviz_string)?;
    temp_file.persist(&path)?;
    open::that(&path)?;
    Ok(())
}

fn render_graphviz_graph(parse_table: &ParseTable) -> String {
    let mut lines = Vec::new();
    lines.push("digraph lr1_states {".to_owned());
    for state in parse_table.states.iter() {
        // Create graphviz box with table for the state
        let table_rows: Vec<String> = state
            .items
            .iter()
            .map(|item| {
                let mut la_string = escape_html(&item.lookahead_string());
                if item.is_complete() {
                    // Use underline to mark a reduce action
                    la_string = format!("<U>{}</U>", la_string);
                } else if la_string.is_empty() {
                    la_string = "∅".to_owned();
                }
                format!(
                    "      <TR><TD ALIGN=\"LEFT\">{}</TD><TD>{}</TD></TR>",
                    escape_html(&item.dotted_rule_string()),
                    la_string
                )
            })
            .collect();
        let table_row_string = table_rows.join("\n");
        let table_head = format!(
            "      <TR><TD><B>State #{}</B></TD><TD><B>Lookahead</B></TD></TR>",
            state.id
        );
        let line = format!(
            r#"  State{} [shape=plain label=<
    <TABLE BORDER="0" CELLBORDER="1" CELLSPACING="0">
{}
{}
    </TABLE>
  >];"#,
            state.id, table_head, table_row_string
        );
        lines.push(line);
        // Create state transitions
        for (nonterminal, other_state) in parse_table.gotos[state.id].iter() {
            lines.push(format!(
                r#"  State{} -> State{} [label="<{}>"];"#,
                state.id,
                other_state,
                escape_label(nonterminal)
            ))
        }
        for (terminal, action) in parse_table.actions[state.id].iter() {
            if let Action::Shift(other_state) = action {
                lines.push(format!(
                    r#"  State{} -> State{} [label="[{}]"];"#,
                    state.id,
                    other_state,
                    escape_label(terminal)
                ))
            }
        }
    }
    lines.push("}".to_owned());
    lines.join("\n")
}

/// Escape text for use inside an HTML-like label
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape text for use inside a quoted label
fn escape_label(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

//! Standings table sorting example.
//!
//! Run with: cargo run --example standings
//!
//! Logs go to `latest.log` under the system temp directory.

use matchboard::{PageConfig, TableSorter, ValueType, logging};
use pagedom::table::{column_texts, header_cells};
use pagedom::{Element, find_element};
use simplelog::LevelFilter;

fn standings() -> Element {
    let rows = [
        ["Hawks", "12", "2024-03-02"],
        ["Bears", "7", "2024-02-17"],
        ["Lions", "12", "2024-03-09"],
        ["Wolves", "n/a", "tbd"],
    ];
    Element::body().child(
        Element::table()
            .id("standings")
            .child(
                Element::thead().child(
                    Element::tr()
                        .child(Element::th("Team"))
                        .child(Element::th("Points"))
                        .child(Element::th("Last match")),
                ),
            )
            .child(Element::tbody().children(
                rows.iter()
                    .map(|row| Element::tr().children(row.iter().map(|v| Element::td(*v)))),
            )),
    )
}

fn print_table(root: &Element) {
    let Some(table) = find_element(root, "standings") else {
        return;
    };
    let headers: Vec<String> = header_cells(table)
        .into_iter()
        .map(|th| format!("{} [{}]", th.text_content(), th.classes))
        .collect();
    println!("{}", headers.join(" | "));

    let columns: Vec<Vec<Option<String>>> =
        (0..headers.len()).map(|i| column_texts(table, i)).collect();
    for row in 0..columns.first().map_or(0, Vec::len) {
        let cells: Vec<&str> = columns
            .iter()
            .map(|col| col[row].as_deref().unwrap_or(""))
            .collect();
        println!("  {}", cells.join(" | "));
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = std::env::temp_dir().join("matchboard-demo");
    let log_file = logging::init_in(&log_dir, LevelFilter::Trace)?;

    let config = PageConfig::load_default()?;
    let mut sorter = TableSorter::new(config.sort_markers);
    let mut root = standings();

    println!("Unsorted:");
    print_table(&root);

    for (column, value_type, label) in [
        (1, ValueType::Number, "Points, ascending"),
        (1, ValueType::Number, "Points, descending"),
        (2, ValueType::Date, "Last match"),
        (0, ValueType::String, "Team"),
    ] {
        sorter.sort_table(&mut root, "standings", column, value_type);
        println!("{label}:");
        print_table(&root);
    }

    println!("Log written to {}", log_file.display());
    Ok(())
}

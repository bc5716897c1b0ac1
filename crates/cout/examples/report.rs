//! Render a bordered report table with grouped value columns.
//!
//! Run with `cargo run --example report`.

use cout::{Column, Table};

fn main() {
    let table = Table::new()
        .borders(true)
        .cells_per_group(2)
        .first_column_one_cell(true)
        .column(Column::new("").cells(["eu-west", "us-east", "ap-south"]))
        .column(Column::new("Requests").cells(["18204", "2101", "44823", "5710", "9311", "1203"]))
        .column(Column::new("Errors").cells(["204", "7", "1894", "44", "380", "3"]))
        .column(Column::new("p99 ms").cells(["31", "24", "15", "12", "290", "310"]));

    println!("{table}");
}

use std::fs;

use framer_ingest::values_to_column;
use framer_model::{OutputOptions, Value};
use framer_output::{render_cell, write_csv_outputs};
use framer_transform::TableFrame;
use polars::prelude::DataFrame;

fn accounts() -> TableFrame {
    let data = DataFrame::new(vec![
        values_to_column(
            "Account",
            vec![Some(Value::text("Smith, Jane")), Some(Value::text("Gallery"))],
        ),
        values_to_column("Credit", vec![Some(Value::Flag(true)), Some(Value::Flag(false))]),
        values_to_column("Comments", vec![None, Some(Value::text("line\nbreak"))]),
        values_to_column("Inches", vec![Some(Value::Integer(24)), None]),
    ])
    .expect("frame");
    TableFrame::new("Accounts", data)
}

#[test]
fn writes_header_flags_and_missing_cells() {
    let dir = tempfile::tempdir().expect("temp dir");
    let outputs = write_csv_outputs(dir.path(), &[accounts()], &OutputOptions::default())
        .expect("write");

    assert_eq!(outputs, vec![dir.path().join("Accounts.csv")]);
    let text = fs::read_to_string(&outputs[0]).expect("read");
    assert_eq!(
        text,
        "Account,Credit,Comments,Inches\n\
\"Smith, Jane\",True,,24\n\
Gallery,False,\"line\nbreak\",\n"
    );
}

#[test]
fn output_options_control_rendering() {
    let dir = tempfile::tempdir().expect("temp dir");
    let options = OutputOptions::default()
        .with_delimiter(b';')
        .with_missing("NULL");
    let outputs =
        write_csv_outputs(&dir.path().join("nested"), &[accounts()], &options).expect("write");
    let text = fs::read_to_string(&outputs[0]).expect("read");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Account;Credit;Comments;Inches");
    assert_eq!(lines[1], "Smith, Jane;True;NULL;24");
}

#[test]
fn render_cell_defaults() {
    let options = OutputOptions::default();
    assert_eq!(render_cell(None, &options), "");
    assert_eq!(render_cell(Some(&Value::Flag(false)), &options), "False");
    assert_eq!(render_cell(Some(&Value::text("")), &options), "");
}

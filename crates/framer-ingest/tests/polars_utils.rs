use framer_ingest::{column_values, values_to_column};
use framer_model::Value;
use polars::prelude::{DataFrame, DataType};

#[test]
fn flag_values_build_boolean_column() {
    let column = values_to_column("Credit", vec![Some(Value::Flag(true)), Some(Value::Flag(false))]);
    assert_eq!(column.dtype(), &DataType::Boolean);
}

#[test]
fn integer_values_with_missing_build_int_column() {
    let column = values_to_column("Inches", vec![Some(Value::Integer(24)), None]);
    assert_eq!(column.dtype(), &DataType::Int64);
    assert_eq!(column.null_count(), 1);
}

#[test]
fn mixed_or_missing_values_build_string_column() {
    let mixed = values_to_column("Mixed", vec![Some(Value::Integer(1)), Some(Value::text("a"))]);
    assert_eq!(mixed.dtype(), &DataType::String);
    let empty = values_to_column("Empty", vec![None, None]);
    assert_eq!(empty.dtype(), &DataType::String);
}

#[test]
fn column_values_round_trip_missing() {
    let values = vec![Some(Value::text("A1")), None];
    let df = DataFrame::new(vec![values_to_column("Id", values.clone())]).expect("frame");
    assert_eq!(column_values(&df, "Id").expect("values"), values);
}

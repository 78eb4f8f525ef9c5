//! Polars AnyValue utility functions.
//!
//! Conversions between Polars cells and model [`Value`]s. A column is typed
//! from its non-missing values: all flags become a boolean column, all
//! integers an Int64 column, anything else a string column.

use framer_model::Value;
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, PolarsResult, Series};

/// Converts a Polars AnyValue to a model value; Null is missing.
pub fn any_to_value(value: AnyValue<'_>) -> Option<Value> {
    match value {
        AnyValue::Null => None,
        AnyValue::Boolean(b) => Some(Value::Flag(b)),
        AnyValue::Int8(v) => Some(Value::Integer(i64::from(v))),
        AnyValue::Int16(v) => Some(Value::Integer(i64::from(v))),
        AnyValue::Int32(v) => Some(Value::Integer(i64::from(v))),
        AnyValue::Int64(v) => Some(Value::Integer(v)),
        AnyValue::UInt8(v) => Some(Value::Integer(i64::from(v))),
        AnyValue::UInt16(v) => Some(Value::Integer(i64::from(v))),
        AnyValue::UInt32(v) => Some(Value::Integer(i64::from(v))),
        AnyValue::UInt64(v) => i64::try_from(v).ok().map(Value::Integer),
        AnyValue::Float32(v) => Some(Value::Text(format_numeric(f64::from(v)))),
        AnyValue::Float64(v) => Some(Value::Text(format_numeric(v))),
        AnyValue::String(s) => Some(Value::Text(s.to_string())),
        AnyValue::StringOwned(s) => Some(Value::Text(s.to_string())),
        other => Some(Value::Text(other.to_string())),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Read one cell; out-of-range or absent columns are missing.
pub fn cell_value(column: &Column, idx: usize) -> Option<Value> {
    any_to_value(column.get(idx).unwrap_or(AnyValue::Null))
}

/// Read a whole column as model values.
pub fn column_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<Value>>> {
    let column = df.column(name)?;
    Ok((0..df.height()).map(|idx| cell_value(column, idx)).collect())
}

/// Read a column as trimmed text, missing values included as `None`.
pub fn column_text(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    Ok(column_values(df, name)?
        .into_iter()
        .map(|value| value.map(|v| v.to_string()))
        .collect())
}

/// Build a typed column from model values.
pub fn values_to_column(name: &str, values: Vec<Option<Value>>) -> Column {
    let has_values = values.iter().any(Option::is_some);
    let all_flags = values
        .iter()
        .flatten()
        .all(|value| matches!(value, Value::Flag(_)));
    let all_integers = values
        .iter()
        .flatten()
        .all(|value| matches!(value, Value::Integer(_)));
    if has_values && all_flags {
        let flags: Vec<Option<bool>> = values
            .iter()
            .map(|value| value.as_ref().and_then(Value::as_flag))
            .collect();
        return Series::new(name.into(), flags).into();
    }
    if has_values && all_integers {
        let integers: Vec<Option<i64>> = values
            .iter()
            .map(|value| value.as_ref().and_then(Value::as_integer))
            .collect();
        return Series::new(name.into(), integers).into();
    }
    let text: Vec<Option<String>> = values
        .into_iter()
        .map(|value| value.map(|v| v.to_string()))
        .collect();
    Series::new(name.into(), text).into()
}

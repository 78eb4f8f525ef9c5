//! Value converters for legacy cells.
//!
//! Every converter takes an optional raw value and returns an optional
//! normalized value. `None` is missing; a value that cannot be converted
//! becomes missing rather than an error.
//!
//! - **text**: uppercase identifiers, newline folding, salesperson codes
//! - **flag**: `"1"`-style boolean flags
//! - **datetime**: timestamp parsing and rendering
//! - **vocabulary**: controlled-vocabulary lookups
//! - **dimension**: mixed-fraction frame dimensions

pub mod datetime;
pub mod dimension;
pub mod flag;
pub mod text;
pub mod vocabulary;

pub use datetime::{TIMESTAMP_FORMAT, parse_timestamp, timestamp};
pub use dimension::{Dimension, dimension, fraction, inches};
pub use flag::boolean_from_flag;
pub use text::{replace_newline, salesperson, upper};
pub use vocabulary::{lookup, prepare_key};

use framer_model::{Converter, Value};

/// Apply one schema converter to a cell.
///
/// Text converters read only text cells; a flag or integer handed to them
/// is treated as unconvertible. `Verbatim` passes any value through.
pub fn convert(converter: Converter, value: Option<&Value>) -> Option<Value> {
    let text = value.and_then(Value::as_text);
    match converter {
        Converter::Verbatim => value.cloned(),
        Converter::Upper => upper(text).map(Value::Text),
        Converter::Text => replace_newline(text, " ").map(Value::Text),
        Converter::Multiline => replace_newline(text, "\n").map(Value::Text),
        Converter::Flag => match value {
            Some(Value::Flag(flag)) => Some(Value::Flag(*flag)),
            _ => Some(Value::Flag(boolean_from_flag(text))),
        },
        Converter::Timestamp => timestamp(text).map(Value::Text),
        Converter::Vocabulary(vocabulary) => lookup(text, vocabulary).map(Value::Text),
        Converter::Salesperson => Some(Value::Text(salesperson(text))),
        Converter::Inches => inches(text).map(Value::Integer),
        Converter::Fraction(style) => fraction(text, style).map(Value::Text),
    }
}

#[cfg(test)]
mod tests {
    use framer_model::{FractionStyle, Vocabulary};

    use super::*;

    #[test]
    fn verbatim_keeps_flags() {
        let value = Value::Flag(true);
        assert_eq!(convert(Converter::Verbatim, Some(&value)), Some(value));
    }

    #[test]
    fn text_converters_skip_non_text() {
        let value = Value::Integer(3);
        assert_eq!(convert(Converter::Upper, Some(&value)), None);
        assert_eq!(
            convert(Converter::Vocabulary(Vocabulary::Join), Some(&value)),
            None
        );
    }

    #[test]
    fn flag_converter_never_missing() {
        assert_eq!(convert(Converter::Flag, None), Some(Value::Flag(false)));
        assert_eq!(
            convert(Converter::Flag, Some(&Value::text("1"))),
            Some(Value::Flag(true))
        );
    }

    #[test]
    fn dimension_converters() {
        let raw = Value::text("24 1/2");
        assert_eq!(
            convert(Converter::Inches, Some(&raw)),
            Some(Value::Integer(24))
        );
        assert_eq!(
            convert(
                Converter::Fraction(FractionStyle::DotPrefixed),
                Some(&raw)
            ),
            Some(Value::text(".1/2"))
        );
    }
}

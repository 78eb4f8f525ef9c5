//! Row-level derivations.
//!
//! These combine several fields of one legacy row into a single output
//! value: the preformatted audit blob, the synthetic order link and the
//! account type.

use framer_model::{OrderLinkStrategy, Value};
use sha2::Digest;

/// Account type for customers with a tax-exempt or credit flag.
pub const INSTITUTION: &str = "Institution";
/// Account type for everyone else.
pub const PERSONAL: &str = "Personal";

/// Render a legacy row as an HTML `<pre>` block for a rich-text field.
///
/// Missing fields are dropped. Names are left-aligned and values
/// right-aligned in two columns, control bytes 0x0B and 0x10 are removed
/// and every CR or LF becomes `<br/>`, so the result is a single line.
pub fn legacy_record_blob(row: &[(&str, Option<Value>)]) -> String {
    let present: Vec<(&str, String)> = row
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (*name, v.to_string())))
        .collect();
    let name_width = present
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    let value_width = present
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);
    let body = present
        .iter()
        .map(|(name, value)| format!("{name:<name_width$}    {value:>value_width$}"))
        .collect::<Vec<_>>()
        .join("\n")
        .replace(['\u{0b}', '\u{10}'], "");
    format!("<pre>\n{body}\n</pre>")
        .chars()
        .fold(String::new(), |mut out, ch| {
            if ch == '\r' || ch == '\n' {
                out.push_str("<br/>");
            } else {
                out.push(ch);
            }
            out
        })
}

/// SHA-256 hex digest identifying a whole legacy row.
pub fn row_digest(row: &[(&str, Option<Value>)]) -> String {
    let mut hasher = sha2::Sha256::new();
    for (name, value) in row {
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
        if let Some(value) = value {
            hasher.update([1u8]);
            hasher.update(value.to_string().as_bytes());
        }
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}

/// Inputs to a synthetic order link.
#[derive(Debug, Clone, Copy)]
pub struct OrderLinkInput<'a> {
    pub order: Option<&'a Value>,
    pub customer: Option<&'a Value>,
    /// Position of the row within the concatenated order table.
    pub index: usize,
    pub row: &'a [(&'a str, Option<Value>)],
}

/// Link key shared by an order and its treatments.
///
/// Legacy order numbers repeat across sub-tables, so the order number is
/// suffixed with a disambiguator chosen by `strategy`.
pub fn synthetic_order_link(input: &OrderLinkInput<'_>, strategy: OrderLinkStrategy) -> String {
    let order = input.order.map(Value::to_string).unwrap_or_default();
    match strategy {
        OrderLinkStrategy::RowIndex => format!("{order}-{}", input.index),
        OrderLinkStrategy::CustomerNumber => {
            let customer = input.customer.map(Value::to_string).unwrap_or_default();
            format!("{order}-{customer}")
        }
        OrderLinkStrategy::Digest => row_digest(input.row),
    }
}

/// `"Institution"` when any flag is set, else `"Personal"`.
pub fn account_type(flags: &[Option<&Value>]) -> &'static str {
    let flagged = flags.iter().any(|flag| match flag {
        Some(Value::Flag(set)) => *set,
        Some(Value::Text(text)) => text == "1",
        _ => false,
    });
    if flagged { INSTITUTION } else { PERSONAL }
}

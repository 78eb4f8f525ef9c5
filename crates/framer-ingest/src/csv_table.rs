use csv::ReaderBuilder;
use tracing::warn;

use crate::error::{IngestError, Result};
use crate::source::TableSource;

/// A legacy table as exported: header plus string rows.
///
/// Cells keep their original text; an empty cell is missing.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim()
        .trim_matches('\u{feff}')
        .to_string()
}

/// Decode one cell. Undecodable bytes make the cell missing.
fn decode_cell(table: &str, row: usize, column: &str, raw: &[u8]) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match std::str::from_utf8(raw) {
        Ok(text) => Some(text.to_string()),
        Err(error) => {
            warn!(table, row, column, %error, "undecodable cell treated as missing");
            None
        }
    }
}

/// Parse exported CSV text. The first record is the header.
pub fn parse_csv_table(name: &str, data: &[u8]) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);
    let mut records = reader.byte_records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.map_err(|source| IngestError::Csv {
                table: name.to_string(),
                source,
            })?;
            record.iter().map(normalize_header).collect()
        }
        None => Vec::new(),
    };
    let mut rows = Vec::new();
    for (idx, record) in records.enumerate() {
        let record = record.map_err(|source| IngestError::Csv {
            table: name.to_string(),
            source,
        })?;
        if record.iter().all(<[u8]>::is_empty) {
            continue;
        }
        let row = idx + 1;
        rows.push(
            record
                .iter()
                .enumerate()
                .map(|(col, raw)| {
                    let column = headers.get(col).map_or("", String::as_str);
                    decode_cell(name, row, column, raw)
                })
                .collect(),
        );
    }
    Ok(CsvTable {
        name: name.to_string(),
        headers,
        rows,
    })
}

/// Export a table from the source and parse it.
pub fn read_table(source: &dyn TableSource, table: &str) -> Result<CsvTable> {
    let data = source.export(table)?;
    parse_csv_table(table, &data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_are_missing_but_whitespace_is_kept() {
        let table = parse_csv_table("T", b"A,B,C\n1,, x\n").expect("parse");
        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(
            table.rows,
            vec![vec![Some("1".to_string()), None, Some(" x".to_string())]]
        );
    }

    #[test]
    fn header_only_table_has_no_rows() {
        let table = parse_csv_table("T", b"A,B\n").expect("parse");
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), 2);
    }

    #[test]
    fn empty_export_is_empty_table() {
        let table = parse_csv_table("T", b"").expect("parse");
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn undecodable_cell_is_missing_and_parsing_continues() {
        let table = parse_csv_table("Customers", b"Customer Number,Name\nA1,Caf\xE9\nA2,Ok\n")
            .expect("parse");
        assert_eq!(
            table.rows,
            vec![
                vec![Some("A1".to_string()), None],
                vec![Some("A2".to_string()), Some("Ok".to_string())],
            ]
        );
    }

    #[test]
    fn undecodable_header_is_replaced_lossily() {
        let table = parse_csv_table("T", b"Na\xEFve,B\n1,2\n").expect("parse");
        assert_eq!(table.headers[1], "B");
        assert!(table.headers[0].starts_with("Na"));
        assert_eq!(table.len(), 1);
    }
}

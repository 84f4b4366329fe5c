use std::{collections::HashMap, fs, path::Path};

use crate::error::{PipelineErr, Result};

/// A comma separated table held as strings, with a header row.
///
/// Cells are only converted to numbers when a column is requested through
/// `numeric_column`, so a table with free-form identifier columns still parses.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Reads and parses the file at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let content = std::str::from_utf8(&bytes)?;
        Self::parse(content)
    }

    /// Parses `content`, taking the first record as the header.
    ///
    /// Quoted fields may span lines. Cells keep their surrounding whitespace. Rows
    /// shorter than the header are padded with empty cells; longer rows are rejected.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(content.as_bytes());

        let header = reader.headers()?.clone();
        if is_blank(&header) {
            return Err(PipelineErr::NoColumns);
        }
        let columns = disambiguate(header.iter().map(String::from).collect());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if is_blank(&record) {
                continue;
            }

            if record.len() > columns.len() {
                return Err(PipelineErr::RowWidth {
                    line: record.position().map_or(0, |p| p.line() as usize),
                    expected: columns.len(),
                    got: record.len(),
                });
            }

            let mut fields: Vec<String> = record.iter().map(String::from).collect();
            fields.resize(columns.len(), String::new());
            rows.push(fields);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows, header excluded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every name in `required` is a column of this table.
    pub fn has_columns(&self, required: &[&str]) -> bool {
        required
            .iter()
            .all(|name| self.columns.iter().any(|c| c == name))
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PipelineErr::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Converts every cell of column `name` to a finite `f64`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.column_index(name)?;

        self.rows
            .iter()
            .map(|row| {
                let cell = &row[idx];
                match cell.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    _ => Err(PipelineErr::NotANumber {
                        value: cell.clone(),
                    }),
                }
            })
            .collect()
    }
}

/// A record that is nothing but whitespace on a single line.
fn is_blank(record: &csv::StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|field| field.trim().is_empty())
}

/// Renames repeated header names to `name.1`, `name.2`, ...
fn disambiguate(names: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    names
        .into_iter()
        .map(|name| {
            let count = seen.entry(name.clone()).or_default();
            let out = match *count {
                0 => name,
                n => format!("{name}.{n}"),
            };
            *count += 1;
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let table = Table::parse("a,b,c\n1,2,3\n4,5,6\n").unwrap();
        assert_eq!(table.columns(), ["a", "b", "c"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.numeric_column("b").unwrap(), vec![2.0, 5.0]);
    }

    #[test]
    fn skips_blank_lines_and_bom() {
        let table = Table::parse("\u{feff}x,y\r\n\r\n1,2\r\n\n3,4\n").unwrap();
        assert_eq!(table.columns(), ["x", "y"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_input_has_no_columns() {
        let err = Table::parse("\n  \n").unwrap_err();
        assert_eq!(err.to_string(), "No columns to parse from file");
    }

    #[test]
    fn rejects_rows_wider_than_header() {
        let err = Table::parse("a,b\n1,2\n1,2,3\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error tokenizing data. Expected 2 fields in line 3, saw 3"
        );
    }

    #[test]
    fn pads_short_rows_with_empty_cells() {
        let table = Table::parse("a,b\n1\n").unwrap();
        assert_eq!(table.len(), 1);
        let err = table.numeric_column("b").unwrap_err();
        assert_eq!(err.to_string(), "could not convert string to float: ''");
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let table = Table::parse("name,\"v,al\"\n\"a, \"\"b\"\"\",1\n").unwrap();
        assert_eq!(table.columns(), ["name", "v,al"]);
        assert_eq!(table.numeric_column("v,al").unwrap(), vec![1.0]);
    }

    #[test]
    fn quoted_field_may_span_lines() {
        let table = Table::parse(
            "Machine_ID,Temperature,Run_Time,Downtime_Flag\n\"M\n1\",70,100,0\n",
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.numeric_column("Temperature").unwrap(), vec![70.0]);
    }

    #[test]
    fn header_whitespace_is_kept() {
        let table = Table::parse(" a ,\"  b  \"\n1, 2\n").unwrap();
        assert_eq!(table.columns(), [" a ", "  b  "]);
        assert!(!table.has_columns(&["a"]));
        assert_eq!(table.numeric_column("  b  ").unwrap(), vec![2.0]);
    }

    #[test]
    fn repeated_names_get_suffixes() {
        let table = Table::parse("a,a,b,a\n").unwrap();
        assert_eq!(table.columns(), ["a", "a.1", "b", "a.2"]);
        assert!(table.is_empty());
    }

    #[test]
    fn non_numeric_cells_are_reported() {
        let table = Table::parse("t\n1.5\nhot\n").unwrap();
        let err = table.numeric_column("t").unwrap_err();
        assert_eq!(err.to_string(), "could not convert string to float: 'hot'");
    }

    #[test]
    fn has_columns_checks_superset() {
        let table = Table::parse("a,b,c\n").unwrap();
        assert!(table.has_columns(&["c", "a"]));
        assert!(!table.has_columns(&["a", "d"]));
    }
}

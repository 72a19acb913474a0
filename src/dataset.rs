//! Reading the distance table into typed records.
//!
//! The dataset is a plain comma-separated file: one header line, then one
//! record per line with exactly three fields: place A, place B and the
//! distance between them. No quoting or escaping semantics beyond plain comma
//! separation.

use std::{fs::File, io::Read, path::Path};

use thiserror::Error;

/// One line of the distance table: two place names and the distance between
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub place_a: String,
    pub place_b: String,
    /// Kept signed as parsed; the graph builder owns the positivity check.
    pub distance: i64,
}

impl Record {
    pub fn new(place_a: impl Into<String>, place_b: impl Into<String>, distance: i64) -> Self {
        Self {
            place_a: place_a.into(),
            place_b: place_b.into(),
            distance,
        }
    }
}

/// The error encountered while reading the distance table.
///
/// Every variant is fatal to the load; no partial record list is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read dataset")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset")]
    Csv(#[from] csv::Error),

    /// A record does not have exactly three fields.
    #[error("record {index}: expected 3 fields, found {found}")]
    FieldCount { index: usize, found: usize },

    /// The distance field of a record is not an integer.
    #[error("record {index}: distance {value:?} is not an integer")]
    Distance { index: usize, value: String },
}

/// Reads the distance table from `reader`, skipping the header line.
///
/// Records are returned in input order; `index` in errors refers to that
/// order, starting at 0 for the first record after the header.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        // Field count is validated per record below, with a dedicated error.
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for (index, row) in reader.records().enumerate() {
        let row = row?;

        if row.len() != 3 {
            return Err(LoadError::FieldCount {
                index,
                found: row.len(),
            });
        }

        let distance = row[2]
            .trim()
            .parse::<i64>()
            .map_err(|_| LoadError::Distance {
                index,
                value: row[2].to_string(),
            })?;

        records.push(Record {
            place_a: row[0].to_string(),
            place_b: row[1].to_string(),
            distance,
        });
    }

    Ok(records)
}

/// Opens and reads the distance table at `path`.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, LoadError> {
    read_records(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn read_basic() {
        let data = "Place A,Place B,Distance\nDetroit,Ann Arbor,45\nAnn Arbor,Flint,58\n";
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                Record::new("Detroit", "Ann Arbor", 45),
                Record::new("Ann Arbor", "Flint", 58),
            ]
        );
    }

    #[test]
    fn header_is_skipped() {
        let data = "From,To,Miles\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn field_count_mismatch() {
        let data = "Place A,Place B,Distance\nDetroit,Ann Arbor,45\nFlint,10\n";
        let result = read_records(data.as_bytes());

        assert_matches!(result, Err(LoadError::FieldCount { index: 1, found: 2 }));
    }

    #[test]
    fn non_integer_distance() {
        let data = "Place A,Place B,Distance\nDetroit,Ann Arbor,far\n";
        let result = read_records(data.as_bytes());

        assert_matches!(result, Err(LoadError::Distance { index: 0, ref value }) if value == "far");
    }

    #[test]
    fn negative_distance_parses() {
        // Negative distances are syntactically valid here; the graph builder
        // is the component that rejects them.
        let data = "Place A,Place B,Distance\nDetroit,Ann Arbor,-3\n";
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records[0].distance, -3);
    }
}

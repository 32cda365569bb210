#![deny(unsafe_code)]

//! CSV ingestion: one label→value map per data row.
//!
//! The resolution engine consumes a flat map per record; this crate
//! materializes those maps from a headered CSV file. Blank cells are
//! omitted so an empty column never satisfies a required field.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

/// Reads a headered CSV file into one map per data row.
///
/// Headers and cell values are whitespace-trimmed; cells that are empty
/// after trimming are dropped from the record. Duplicate headers keep the
/// last occurrence.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<BTreeMap<String, String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read headers from {}", path.display()))?
        .clone();

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("read record {} from {}", idx + 1, path.display()))?;
        let mut record = BTreeMap::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            let header = header.trim();
            let value = value.trim();
            if header.is_empty() || value.is_empty() {
                continue;
            }
            record.insert(header.to_string(), value.to_string());
        }
        records.push(record);
    }

    debug!(
        path = %path.display(),
        records = records.len(),
        columns = headers.len(),
        "ingested csv"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "sheetmap-ingest-test-{}.csv",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_one_map_per_row() {
        let path = write_temp_csv("Name,Email\nJinzhu,jinzhu@example.org\nWei,\n");
        let records = read_records(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("Email").map(String::as_str),
            Some("jinzhu@example.org")
        );
        // Blank cell dropped entirely.
        assert!(!records[1].contains_key("Email"));
        assert_eq!(records[1].get("Name").map(String::as_str), Some("Wei"));
    }

    #[test]
    fn trims_headers_and_values() {
        let path = write_temp_csv(" Name , Phone 1 \n Jinzhu , 110 \n");
        let records = read_records(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records[0].get("Name").map(String::as_str), Some("Jinzhu"));
        assert_eq!(records[0].get("Phone 1").map(String::as_str), Some("110"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_records(Path::new("/nonexistent/input.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input.csv"));
    }
}

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::errors::LibraryError;
use crate::domain::records::ReadingRecord;

/// Load reading records from a JSON document on disk.
///
/// The document is an ordered array of records. Dates inside it are parsed
/// leniently (see `ReadingRecord`); only unreadable files and malformed JSON
/// are errors.
pub fn load_records(path: &Path) -> Result<Vec<ReadingRecord>, LibraryError> {
    let contents = fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<ReadingRecord> =
        serde_json::from_str(&contents).map_err(|source| LibraryError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = records.len(), path = %path.display(), "loaded reading records");
    Ok(records)
}

/// Parse reading records from an in-memory JSON string.
pub fn parse_records(json: &str) -> Result<Vec<ReadingRecord>, LibraryError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_records_reads_array() {
        let json = r#"[
            {"title": "Dune", "author": "Frank Herbert", "type": "Science fiction",
             "start": "2024-02-01", "end": "2024-02-21"},
            {"title": "Piranesi", "author": "Susanna Clarke", "type": "Fantasy",
             "start": "2024-03-01", "end": null}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Dune");
        assert!(records[1].end.is_none());
    }

    #[test]
    fn parse_records_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_records_tolerates_bad_dates() {
        let json = r#"[{"title": "Dune", "author": "", "type": "", "start": "soon", "end": ""}]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records[0].start, None);
        assert_eq!(records[0].end, None);
    }

    #[test]
    fn parse_records_rejects_malformed_json() {
        let err = parse_records("{not json").unwrap_err();
        assert!(matches!(err, LibraryError::Parse(_)));
    }

    #[test]
    fn parse_records_rejects_non_array_document() {
        assert!(parse_records(r#"{"title": "Dune"}"#).is_err());
    }
}

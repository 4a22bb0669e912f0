//! CSV output for aggregated profile records
//!
//! One batch produces one file. The destination is truncated first, so a
//! re-run fully replaces any previous artifact; there is no append mode.

use crate::error::WriteError;
use crate::profile::ProfileRecord;
use std::fs::File;
use std::path::Path;

/// CSV header, kept in sync with the [`ProfileRecord`] field order
const HEADER: [&str; 5] = [
    "username",
    "ranking",
    "avatar",
    "about_me",
    "total_problems_solved",
];

/// Write all records to `path` as CSV
///
/// The header row is always written, even for an empty record set. Absent
/// fields serialize as empty cells; embedded commas and newlines in free-text
/// fields get standard CSV quoting.
///
/// # Errors
///
/// [`WriteError::Open`] when the destination cannot be created (permission
/// denied, missing directory, ...); [`WriteError::Csv`] / [`WriteError::Io`]
/// when serialization or the final flush fails.
pub fn write_profiles(records: &[ProfileRecord], path: &Path) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    // Header is written explicitly so an empty batch still produces it;
    // serialize() then emits value rows only.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(username: &str, solved: u64) -> ProfileRecord {
        ProfileRecord {
            username: Some(username.to_string()),
            ranking: Some(100),
            avatar: Some(format!("https://example.com/{username}.png")),
            about_me: Some("plain text".to_string()),
            total_problems_solved: solved,
        }
    }

    #[test]
    fn writes_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_profiles(&[record("alice", 70), record("bob", 3)], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "username,ranking,avatar,about_me,total_problems_solved"
        );
        assert!(lines[1].starts_with("alice,100,"));
        assert!(lines[2].starts_with("bob,100,"));
    }

    #[test]
    fn empty_batch_still_writes_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_profiles(&[], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.trim_end(),
            "username,ranking,avatar,about_me,total_problems_solved"
        );
    }

    #[test]
    fn absent_fields_serialize_as_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.csv");

        let sparse = ProfileRecord {
            username: Some("ghost".to_string()),
            ranking: None,
            avatar: None,
            about_me: None,
            total_problems_solved: 0,
        };
        write_profiles(&[sparse], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[1], "ghost,,,,0");
    }

    #[test]
    fn free_text_with_commas_and_newlines_is_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quoted.csv");

        let chatty = ProfileRecord {
            about_me: Some("line one\nsecond, with comma".to_string()),
            ..record("eve", 1)
        };
        write_profiles(&[chatty], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"line one\nsecond, with comma\""));

        // The quoted field still reads back as a single row
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<ProfileRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].about_me.as_deref(),
            Some("line one\nsecond, with comma")
        );
    }

    #[test]
    fn rerun_fully_replaces_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rerun.csv");

        write_profiles(&[record("alice", 1), record("bob", 2)], &path).unwrap();
        write_profiles(&[record("carol", 3)], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("carol,"));
        assert!(!contents.contains("alice"));
    }

    #[test]
    fn unwritable_destination_is_an_open_error() {
        let err = write_profiles(&[], Path::new("/no/such/dir/out.csv")).unwrap_err();
        assert!(matches!(err, WriteError::Open { .. }));
    }
}

//! JSON file I/O for stimulus lists and session payloads.
//!
//! All writes are a single create-and-write call with no temp-file rename.
//! Content is fully serialized before the file is opened, so a serialization
//! failure never leaves a file behind.
//!
//! `serde_json` is built with `preserve_order` and `arbitrary_precision`:
//! object keys keep their input order and numbers keep their input text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use uuid::Uuid;

use crate::constants::{SESSION_FILE_EXTENSION, SESSION_FILE_PREFIX, SESSION_INDENT};
use crate::error::{DataError, SaveError};
use crate::types::StimulusRecord;

/// Read a JSON array of stimulus records.
pub fn load_stimuli(path: &Path) -> Result<Vec<StimulusRecord>, DataError> {
    let bytes = fs::read(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Single-line JSON with `", "` and `": "` separators, the layout of
/// stimulus lists written by the earlier preparation script.
struct SpacedCompactFormatter;

impl Formatter for SpacedCompactFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_json_with<T, F>(value: &T, formatter: F) -> Result<Vec<u8>, serde_json::Error>
where
    T: Serialize + ?Sized,
    F: Formatter,
{
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Single-line JSON with spaced separators: `[{"a": 1, "b": 2}]`.
pub fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    to_json_with(value, SpacedCompactFormatter)
}

/// Write records as single-line JSON, replacing any existing file.
pub fn write_stimuli(path: &Path, records: &[StimulusRecord]) -> Result<(), DataError> {
    let bytes = to_spaced_json(records).map_err(DataError::Serialize)?;
    fs::write(path, bytes).map_err(|source| DataError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// `<dir>/session-<id>.json`
pub fn session_file_path(dir: &Path, session_id: &Uuid) -> PathBuf {
    dir.join(format!(
        "{SESSION_FILE_PREFIX}{}.{SESSION_FILE_EXTENSION}",
        session_id.hyphenated()
    ))
}

/// Serialize with a 4-space indent.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    to_json_with(value, PrettyFormatter::with_indent(SESSION_INDENT))
}

/// Write one session payload under a fresh random ID. Returns the ID and the
/// path written. The directory is not created.
pub async fn write_session(
    dir: &Path,
    payload: &serde_json::Value,
) -> Result<(Uuid, PathBuf), SaveError> {
    let session_id = Uuid::new_v4();
    let path = session_file_path(dir, &session_id);
    let bytes = to_pretty_json(payload).map_err(SaveError::Serialize)?;
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| SaveError::Write {
            path: path.clone(),
            source,
        })?;
    Ok((session_id, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_path_format() {
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let path = session_file_path(Path::new("data/experiment2"), &id);
        assert_eq!(
            path,
            PathBuf::from("data/experiment2/session-67e55044-10b1-426f-9247-bb680e5fe0c8.json")
        );
    }

    #[test]
    fn pretty_json_uses_four_spaces() {
        let value = serde_json::json!({ "a": [1] });
        let text = String::from_utf8(to_pretty_json(&value).unwrap()).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn pretty_json_keeps_key_order_and_number_text() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 12345678901234567890123, "mid": 1.5}"#)
                .unwrap();
        let text = String::from_utf8(to_pretty_json(&value).unwrap()).unwrap();
        assert_eq!(
            text,
            "{\n    \"zeta\": 1,\n    \"alpha\": 12345678901234567890123,\n    \"mid\": 1.5\n}"
        );
    }

    #[test]
    fn spaced_json_separators() {
        let value: serde_json::Value =
            serde_json::from_str(r#"[{"b":1,"a":[true,null]},"x"]"#).unwrap();
        let text = String::from_utf8(to_spaced_json(&value).unwrap()).unwrap();
        assert_eq!(text, r#"[{"b": 1, "a": [true, null]}, "x"]"#);
    }

    #[test]
    fn spaced_json_empty_containers() {
        let value = serde_json::json!({ "a": [], "b": {} });
        let text = String::from_utf8(to_spaced_json(&value).unwrap()).unwrap();
        assert_eq!(text, r#"{"a": [], "b": {}}"#);
    }

    #[test]
    fn load_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stimuli.json");
        fs::write(&path, r#"{"verb": "eat"}"#).unwrap();
        assert!(matches!(load_stimuli(&path), Err(DataError::Parse { .. })));
    }

    #[tokio::test]
    async fn write_session_requires_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("experiment2");
        let err = write_session(&missing, &serde_json::json!(1)).await.unwrap_err();
        assert!(matches!(err, SaveError::Write { .. }));
        assert!(!missing.exists());
    }
}

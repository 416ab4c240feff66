//! Export archive: one pretty-printed JSON file per tab, zipped.

use super::field::to_pretty_json;
use super::gather::{GatherError, Samplest};
use std::collections::HashSet;
use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Gather(#[from] GatherError),

    #[error("cannot serialize sample \"{0}\": {1}")]
    Serialize(String, serde_json::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Characters that are not allowed in archive entry names on common
/// filesystems.
const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Turns a tab name into a safe file stem.
pub fn sanitize_file_stem(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if RESERVED.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = replaced.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Entry names for the given tab names, sanitized and made unique with a
/// ` (n)` suffix.
pub fn entry_names<'a>(tab_names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    tab_names
        .into_iter()
        .map(|name| {
            let stem = sanitize_file_stem(name);
            let mut candidate = format!("{}.json", stem);
            let mut n = 2;
            while !taken.insert(candidate.to_lowercase()) {
                candidate = format!("{} ({}).json", stem, n);
                n += 1;
            }
            candidate
        })
        .collect()
}

/// File contents of one sample: 4-space JSON plus a trailing newline.
pub fn render_sample(name: &str, sample: &Samplest) -> Result<String, ExportError> {
    let mut content =
        to_pretty_json(sample).map_err(|e| ExportError::Serialize(name.to_string(), e))?;
    content.push('\n');
    Ok(content)
}

/// Encodes the gathered samples into zip bytes.
pub fn build_archive(samples: &[(String, Samplest)]) -> Result<Vec<u8>, ExportError> {
    let names = entry_names(samples.iter().map(|(name, _)| name.as_str()));
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for ((tab, sample), entry) in samples.iter().zip(names) {
        let content = render_sample(tab, sample)?;
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(entry, options)?;
        zip.write_all(content.as_bytes())?;
    }
    let cursor = zip.finish()?;

    log::info!("archive built: {} samples, {} bytes", samples.len(), cursor.get_ref().len());
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_samplest::aggregate::Workspace;
    use crate::domain::a001_samplest::gather::gather;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("users"), "users");
        assert_eq!(sanitize_file_stem("GET /users/:id"), "GET _users__id");
        assert_eq!(sanitize_file_stem("../etc"), "_etc");
        assert_eq!(sanitize_file_stem(" .. "), "untitled");
        assert_eq!(sanitize_file_stem("tab\tone"), "tab_one");
    }

    #[test]
    fn test_entry_names_are_unique() {
        assert_eq!(
            entry_names(["a/b", "a:b", "A_b", "c"]),
            vec!["a_b.json", "a_b (2).json", "A_b (3).json", "c.json"]
        );
    }

    #[test]
    fn test_archive_has_one_entry_per_tab() {
        let mut ws = Workspace::new();
        let a = ws.create_tab("A").unwrap();
        ws.set_field(a, "request.route", "/x".into()).unwrap();
        ws.create_tab("B/C").unwrap();

        let samples = gather(&ws).unwrap();
        let bytes = build_archive(&samples).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("A.json")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.ends_with("}\n"));
        assert!(content.contains("\n    \"request\": {\n        \"route\": \"/x\""));

        let parsed: Samplest = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, samples[0].1);
        assert!(archive.by_name("B_C.json").is_ok());
    }

    #[test]
    fn test_empty_archive() {
        let bytes = build_archive(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}

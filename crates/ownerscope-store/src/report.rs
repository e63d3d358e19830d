//! Report persistence
//!
//! One pretty-printed JSON file per record under
//! `<results_root>/<YYYY-MM-DD>/`. `serde_json`'s pretty printer writes
//! non-ASCII characters literally, so names survive unescaped.

use crate::StoreError;
use chrono::Local;
use ownerscope_domain::CompanyRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default root directory for persisted reports
pub const DEFAULT_RESULTS_ROOT: &str = "results";

/// Stem used when a company name cleans down to nothing
const FALLBACK_STEM: &str = "unknown_company";

/// Suffix and extension appended to every derived filename
const FILENAME_SUFFIX: &str = "_info.json";

/// Derive a report filename from a company name.
///
/// Keeps only alphanumerics, spaces, hyphens, and underscores; trims
/// trailing whitespace; lower-cases; replaces spaces with underscores.
/// Falls back to a fixed stem when nothing survives the cleaning.
///
/// # Examples
///
/// ```
/// use ownerscope_store::derive_filename;
///
/// assert_eq!(derive_filename("Test/Corp & Co.!"), "testcorp__co_info.json");
/// assert_eq!(derive_filename("???"), "unknown_company_info.json");
/// ```
pub fn derive_filename(company_name: &str) -> String {
    let cleaned: String = company_name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = cleaned.trim_end().replace(' ', "_").to_lowercase();

    if stem.is_empty() {
        format!("{FALLBACK_STEM}{FILENAME_SUFFIX}")
    } else {
        format!("{stem}{FILENAME_SUFFIX}")
    }
}

/// Write a record to disk and return the resulting path.
///
/// The file lands under `<results_root>/<YYYY-MM-DD>/`, creating the dated
/// directory if absent. When no explicit filename is given, one is derived
/// from the record's company name. Writes are synchronous and an existing
/// file at the same path is silently overwritten.
pub fn save_record(
    record: &CompanyRecord,
    results_root: impl AsRef<Path>,
    filename: Option<&str>,
) -> Result<PathBuf, StoreError> {
    let dir = results_root
        .as_ref()
        .join(Local::now().format("%Y-%m-%d").to_string());
    fs::create_dir_all(&dir)?;

    let filename = match filename {
        Some(name) => name.to_string(),
        None => derive_filename(&record.company_name),
    };
    let path = dir.join(filename);

    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json)?;

    debug!("Saved report to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ownerscope_domain::Owner;

    #[test]
    fn test_derive_filename_strips_punctuation() {
        // Slashes, ampersands, periods, exclamation marks removed; spaces
        // become underscores; case lowered
        assert_eq!(derive_filename("Test/Corp & Co.!"), "testcorp__co_info.json");
    }

    #[test]
    fn test_derive_filename_plain_name() {
        assert_eq!(derive_filename("Acme Corp"), "acme_corp_info.json");
    }

    #[test]
    fn test_derive_filename_keeps_hyphens_and_underscores() {
        assert_eq!(derive_filename("Acme-Sub_Unit 2"), "acme-sub_unit_2_info.json");
    }

    #[test]
    fn test_derive_filename_empty_after_cleaning() {
        assert_eq!(derive_filename("!!!"), "unknown_company_info.json");
        assert_eq!(derive_filename(""), "unknown_company_info.json");
    }

    #[test]
    fn test_save_creates_dated_directory() {
        let root = tempfile::tempdir().unwrap();
        let record = CompanyRecord::new("Acme Corp", "https://acme.test", "Widgets");

        let path = save_record(&record, root.path(), None).unwrap();

        let dir_name = path
            .parent()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy();
        assert_eq!(dir_name, Local::now().format("%Y-%m-%d").to_string());
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "acme_corp_info.json"
        );
        assert!(path.exists());
    }

    #[test]
    fn test_save_round_trips_record() {
        let root = tempfile::tempdir().unwrap();
        let mut record = CompanyRecord::new("Acme Corp", "https://acme.test", "Widgets");
        record.owners.push(Owner::named("Jane Roe"));

        let path = save_record(&record, root.path(), None).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        let read_back: CompanyRecord = serde_json::from_str(&contents).unwrap();

        assert_eq!(read_back, record);
    }

    #[test]
    fn test_save_preserves_non_ascii_literally() {
        let root = tempfile::tempdir().unwrap();
        let record = CompanyRecord::new("Müller Söhne", "https://mueller.test", "Bäckerei");

        let path = save_record(&record, root.path(), None).unwrap();
        let contents = fs::read_to_string(path).unwrap();

        assert!(contents.contains("Müller Söhne"));
        assert!(contents.contains("Bäckerei"));
        assert!(!contents.contains("\\u"));
    }

    #[test]
    fn test_save_with_explicit_filename() {
        let root = tempfile::tempdir().unwrap();
        let record = CompanyRecord::new("Acme Corp", "https://acme.test", "Widgets");

        let path = save_record(&record, root.path(), Some("custom.json")).unwrap();
        assert_eq!(path.file_name().unwrap().to_string_lossy(), "custom.json");
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let root = tempfile::tempdir().unwrap();
        let first = CompanyRecord::new("Acme Corp", "https://acme.test", "First");
        let second = CompanyRecord::new("Acme Corp", "https://acme.test", "Second");

        save_record(&first, root.path(), None).unwrap();
        let path = save_record(&second, root.path(), None).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("Second"));
        assert!(!contents.contains("First"));
    }
}

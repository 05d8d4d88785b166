//! Corpus loading utilities
//!
//! The corpus is a JSON array of passage records. Anything else is treated as
//! "no data": callers get an error from the strict loaders, or an empty corpus
//! from [`load_or_empty`].

use super::Corpus;
use crate::core::Passage;
use crate::error::CorpusError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name tried when no path is given
pub const DEFAULT_FILE_NAME: &str = "bible_sections.json";

const SEARCH_DIRS: &[&str] = &[
    "",
    "./",
    "../",
    "Release/",
    "./Release/",
    "../Release/",
    "Debug/",
    "./Debug/",
    "../Debug/",
    "build/",
    "./build/",
    "../build/",
    "build/Release/",
    "./build/Release/",
    "../build/Release/",
    "build/Debug/",
    "./build/Debug/",
    "../build/Debug/",
];

/// Candidate locations in lookup order: the preferred path first, then the defaults
#[must_use]
pub fn candidate_paths(preferred: Option<&Path>) -> Vec<PathBuf> {
    preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(
            SEARCH_DIRS
                .iter()
                .map(|dir| PathBuf::from(format!("{dir}{DEFAULT_FILE_NAME}"))),
        )
        .collect()
}

/// Find the first candidate location that holds a file
#[must_use]
pub fn resolve_data_file_path(preferred: Option<&Path>) -> Option<PathBuf> {
    candidate_paths(preferred).into_iter().find(|p| p.is_file())
}

/// Parse passages from JSON text
///
/// # Errors
///
/// Returns `CorpusError::Malformed` unless the text is a JSON array of
/// objects whose fields have the expected types.
///
/// # Examples
/// ```
/// use bibirble::corpus::loader::from_json_str;
///
/// let json = r#"[{"book": "john", "chapter": 11, "verse": 35, "text": "Jesus wept."}]"#;
/// let corpus = from_json_str(json).unwrap();
/// assert_eq!(corpus.len(), 1);
/// ```
pub fn from_json_str(json: &str) -> Result<Corpus, CorpusError> {
    let passages: Vec<Passage> = serde_json::from_str(json)?;
    Ok(Corpus::new(passages))
}

/// Load a corpus from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let corpus = from_json_str(&content)?;
    tracing::info!("Loaded {} passages from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Resolve the corpus location and load it
///
/// # Errors
///
/// Returns `CorpusError::NotFound` if no candidate exists, otherwise any
/// error from [`load_from_file`].
pub fn load(preferred: Option<&Path>) -> Result<Corpus, CorpusError> {
    let path = resolve_data_file_path(preferred).ok_or_else(|| {
        CorpusError::NotFound(
            preferred.map_or_else(|| DEFAULT_FILE_NAME.to_string(), |p| p.display().to_string()),
        )
    })?;
    load_from_file(path)
}

/// Load the corpus, falling back to an empty one on any failure
///
/// An empty corpus reports `is_empty()` so the caller can disable play.
#[must_use]
pub fn load_or_empty(preferred: Option<&Path>) -> Corpus {
    load(preferred).unwrap_or_else(|err| {
        tracing::warn!("No passage data loaded: {err}");
        Corpus::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../../data/sample_sections.json");

    #[test]
    fn sample_corpus_parses() {
        let corpus = from_json_str(SAMPLE).unwrap();
        assert_eq!(corpus.len(), 12);
        assert!(corpus.passages().iter().all(|p| !p.text.is_empty()));
    }

    #[test]
    fn missing_fields_default() {
        let corpus = from_json_str(r#"[{"book": "ruth"}, {}]"#).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.passages()[0].chapter, 0);
        assert_eq!(corpus.passages()[1].book, "");
    }

    #[test]
    fn non_array_is_malformed() {
        assert!(matches!(
            from_json_str(r#"{"book": "john"}"#),
            Err(CorpusError::Malformed(_))
        ));
        assert!(matches!(from_json_str("not json"), Err(CorpusError::Malformed(_))));
        assert!(matches!(
            from_json_str(r#"[{"chapter": "three"}]"#),
            Err(CorpusError::Malformed(_))
        ));
    }

    #[test]
    fn load_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let corpus = load_from_file(file.path()).unwrap();
        assert_eq!(corpus.len(), 12);

        let resolved = resolve_data_file_path(Some(file.path()));
        assert_eq!(resolved.as_deref(), Some(file.path()));
    }

    #[test]
    fn load_or_empty_on_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"book\": ").unwrap();

        let corpus = load_or_empty(Some(file.path()));
        assert!(corpus.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nothing.json");
        assert!(matches!(load_from_file(&missing), Err(CorpusError::Io { .. })));
    }

    #[test]
    fn candidates_start_with_preferred() {
        let paths = candidate_paths(Some(Path::new("custom.json")));
        assert_eq!(paths[0], PathBuf::from("custom.json"));
        assert_eq!(paths[1], PathBuf::from("bible_sections.json"));
        assert_eq!(paths.len(), SEARCH_DIRS.len() + 1);
    }
}

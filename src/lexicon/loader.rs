//! Lexicon loading utilities
//!
//! A lexicon file holds one entry per line: the word, then optional
//! whitespace-separated definition text. Blank lines and `#` comments are
//! ignored; entries whose word is not purely alphabetic are skipped.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use super::trie::{InsertOutcome, LexiconIndex};
use crate::error::{LexiconError, LexiconResult};

/// Counts gathered while building an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// Split a line into `(word, definition)`
///
/// Returns `None` for blank lines and comments.
#[must_use]
pub fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((word, definition)) => Some((word, definition.trim())),
        None => Some((line, "")),
    }
}

/// Build an index from the full text of a lexicon
///
/// # Errors
/// Returns `LexiconError::Empty` when no line yields a valid word.
///
/// # Examples
/// ```
/// use steal_explorer::lexicon::loader::index_from_text;
///
/// let text = "CARE to be concerned\nRACE a contest\nC4RE broken\n";
/// let (index, report) = index_from_text("DEMO", text).unwrap();
/// assert_eq!(index.len(), 2);
/// assert_eq!(report.skipped, 1);
/// ```
pub fn index_from_text(name: &str, text: &str) -> LexiconResult<(LexiconIndex, LoadReport)> {
    index_from_bytes(name, text.as_bytes())
}

/// Build an index from raw file contents
///
/// Lines are decoded one at a time, so a line that is not valid UTF-8 is
/// skipped like any other malformed entry.
///
/// # Errors
/// Returns `LexiconError::Empty` when no line yields a valid word.
pub fn index_from_bytes(name: &str, bytes: &[u8]) -> LexiconResult<(LexiconIndex, LoadReport)> {
    let start = Instant::now();
    let mut index = LexiconIndex::new(name);
    let mut report = LoadReport::default();

    for (line_no, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            debug!(lexicon = name, line = line_no + 1, "skipping entry that is not UTF-8");
            report.skipped += 1;
            continue;
        };
        let Some((word, definition)) = parse_entry(line) else {
            continue;
        };
        match index.insert(word, definition) {
            InsertOutcome::Inserted => report.inserted += 1,
            InsertOutcome::Duplicate => report.duplicates += 1,
            InsertOutcome::Malformed => {
                debug!(lexicon = name, line = line_no + 1, entry = word, "skipping malformed entry");
                report.skipped += 1;
            }
        }
    }

    if index.is_empty() {
        return Err(LexiconError::Empty {
            name: name.to_string(),
        });
    }

    info!(
        lexicon = name,
        words = report.inserted,
        skipped = report.skipped,
        duplicates = report.duplicates,
        nodes = index.node_count(),
        elapsed_ms = start.elapsed().as_millis(),
        "built alphagram index"
    );
    Ok((index, report))
}

/// Load and index a lexicon file
///
/// # Errors
/// Returns `LexiconError::Io` if the file cannot be read and
/// `LexiconError::Empty` if it holds no valid words.
pub fn load_from_file<P: AsRef<Path>>(name: &str, path: P) -> LexiconResult<LexiconIndex> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LexiconError::Io {
        name: name.to_string(),
        path: path.to_path_buf(),
        source,
    })?;
    index_from_bytes(name, &bytes).map(|(index, _)| index)
}

/// Somewhere lexicons can be built from, by name
pub trait LexiconSource: Send + Sync {
    /// Build the complete index for `name`
    ///
    /// # Errors
    /// Any `LexiconError`; failures are fatal for that lexicon.
    fn build(&self, name: &str) -> LexiconResult<LexiconIndex>;
}

impl<F> LexiconSource for F
where
    F: Fn(&str) -> LexiconResult<LexiconIndex> + Send + Sync,
{
    fn build(&self, name: &str) -> LexiconResult<LexiconIndex> {
        self(name)
    }
}

/// Lexicons stored as `<dir>/<NAME>.txt`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing lexicon `name`
    ///
    /// # Errors
    /// Returns `LexiconError::InvalidName` for names that are empty or not
    /// made of letters, digits, `-` and `_`.
    pub fn path_for(&self, name: &str) -> LexiconResult<PathBuf> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LexiconError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.txt")))
    }
}

impl LexiconSource for DirectorySource {
    fn build(&self, name: &str) -> LexiconResult<LexiconIndex> {
        let path = self.path_for(name)?;
        load_from_file(name, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_entry_splits_word_and_definition() {
        assert_eq!(
            parse_entry("CARTE  a bill of fare [n -S]"),
            Some(("CARTE", "a bill of fare [n -S]"))
        );
        assert_eq!(parse_entry("CARE\tto be concerned"), Some(("CARE", "to be concerned")));
    }

    #[test]
    fn parse_entry_allows_missing_definition() {
        assert_eq!(parse_entry("  RACE  "), Some(("RACE", "")));
    }

    #[test]
    fn parse_entry_skips_blank_and_comment_lines() {
        assert_eq!(parse_entry(""), None);
        assert_eq!(parse_entry("   "), None);
        assert_eq!(parse_entry("# CSW19"), None);
    }

    #[test]
    fn index_from_text_counts_outcomes() {
        let text = "CARE one\nRACE two\nCARE again\nCA_RE bad\n\n# comment\n";
        let (index, report) = index_from_text("T", text).unwrap();
        assert_eq!(
            report,
            LoadReport {
                inserted: 2,
                duplicates: 1,
                skipped: 1
            }
        );
        assert_eq!(index.definition("CARE"), Some("one"));
    }

    #[test]
    fn index_from_text_rejects_empty_lexicon() {
        assert!(matches!(
            index_from_text("T", "\n# nothing\n12345 numbers\n"),
            Err(LexiconError::Empty { .. })
        ));
    }

    #[test]
    fn load_from_file_reads_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CARE to be concerned").unwrap();
        writeln!(file, "CARTE a menu").unwrap();

        let index = load_from_file("T", file.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.name(), "T");
    }

    #[test]
    fn load_from_file_skips_lines_that_are_not_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"CARE to be concerned\nCAFE a caf\xe9\nCARTE a menu\n")
            .unwrap();

        let index = load_from_file("T", file.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.contains("CARTE"));
        assert!(!index.contains("CAFE"));
    }

    #[test]
    fn index_from_bytes_counts_undecodable_lines_as_skipped() {
        let (index, report) =
            index_from_bytes("T", b"CARE x\r\n\xff\xfe\r\nRACE y\r\n").unwrap();
        assert_eq!(index.definition("CARE"), Some("x"));
        assert_eq!(
            report,
            LoadReport {
                inserted: 2,
                duplicates: 0,
                skipped: 1
            }
        );
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file("T", dir.path().join("absent.txt"));
        assert!(matches!(result, Err(LexiconError::Io { .. })));
    }

    #[test]
    fn directory_source_resolves_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("NWL18.txt"), "CARE x\n").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.path_for("NWL18").unwrap(), dir.path().join("NWL18.txt"));
        assert_eq!(source.build("NWL18").unwrap().len(), 1);
    }

    #[test]
    fn directory_source_rejects_path_like_names() {
        let source = DirectorySource::new("lexicons");
        assert!(matches!(
            source.path_for("../etc/passwd"),
            Err(LexiconError::InvalidName(_))
        ));
        assert!(source.path_for("").is_err());
    }
}

// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Readers for REBASE-style restriction enzyme databases.
//!
//! A database file starts with a fixed-size header, followed by one record
//! per line:
//!
//! ```text
//! AanI/TTA'TAA//
//! AarI/CACCTGCNNNN'NNNN/'NNNNNNNNGCAGGTG//
//! ```
//!
//! The first field is the enzyme acronym, every following field is a
//! recognition sequence, and two consecutive separators end the record.
//! [`Records`] turns such a stream into `(sequence, enzyme)` pairs lazily,
//! one [`Site`] per recognition sequence.
//!
//! Query files are plain lists of recognition sequences, one per line, read
//! with [`Queries`].
//!
//! # Example
//!
//! ```
//! use rebase_db::Records;
//!
//! let text = "h\n".repeat(rebase_db::HEADER_LINES) + "EcoRI/G'AATTC//\n";
//! let sites: Vec<_> = Records::new(text.as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(sites[0].sequence, "G'AATTC");
//! assert_eq!(sites[0].enzyme, "EcoRI");
//! ```

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

mod queries;
mod records;

pub use queries::Queries;
pub use records::parse_record;
pub use records::Record;
pub use records::Records;
pub use records::Site;

/// Number of header lines skipped before the first record.
pub const HEADER_LINES: usize = 10;

/// Field separator inside a record line.
pub const SEPARATOR: char = '/';

/// Errors produced while reading databases and query lists.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },

    /// Reading a line failed part way through the stream.
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        source: io::Error,
    },

    /// A record line does not follow the `ACRONYM/SEQ/.../SEQ//` layout.
    #[error("malformed record on line {line}: {reason}")]
    Malformed {
        line: usize,
        reason: &'static str,
    },
}

/// Open a database file and return a lazy record reader over it.
pub fn open_database(path: impl AsRef<Path>) -> Result<Records<BufReader<File>>, ParseError> {
    let file = open(path.as_ref())?;
    return Ok(Records::new(BufReader::new(file)));
}

/// Open a query file and return a lazy reader over its non-empty lines.
pub fn open_queries(path: impl AsRef<Path>) -> Result<Queries<BufReader<File>>, ParseError> {
    let file = open(path.as_ref())?;
    return Ok(Queries::new(BufReader::new(file)));
}

fn open(path: &Path) -> Result<File, ParseError> {
    return File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = open_database("/definitely/not/here.txt").err().unwrap();
        assert!(matches!(err, ParseError::Open { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn malformed_message_has_line() {
        let err = ParseError::Malformed { line: 12, reason: "empty enzyme acronym" };
        assert_eq!(err.to_string(), "malformed record on line 12: empty enzyme acronym");
    }
}

// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Lazy record parsing for database files.

use std::io::BufRead;
use std::io::Lines;
use std::vec;

use tracing::debug;
use tracing::warn;

use crate::ParseError;
use crate::HEADER_LINES;
use crate::SEPARATOR;

/// One recognition sequence paired with the enzyme that cuts it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    pub sequence: String,
    pub enzyme: String,
}

/// A single parsed record line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub enzyme: String,
    pub sequences: Vec<String>,
    /// False when the line ended before the `//` terminator.
    pub terminated: bool,
}

/// Parse one record line of the form `ACRONYM/SEQ1/.../SEQn//`.
///
/// Trailing whitespace (including a `\r` left by CRLF files) is ignored.
/// Fields after the terminator are ignored.
pub fn parse_record(line: &str) -> Result<Record, &'static str> {
    let line = line.trim_end();
    let Some((enzyme, mut rest)) = line.split_once(SEPARATOR) else {
        return Err("missing separator after enzyme acronym");
    };
    if enzyme.is_empty() {
        return Err("empty enzyme acronym");
    }

    let mut sequences = Vec::new();
    let terminated = loop {
        match rest.find(SEPARATOR) {
            // Two separators in a row.
            Some(0) => break true,
            Some(i) => {
                sequences.push(rest[..i].to_string());
                rest = &rest[i + 1..];
            }
            None => {
                if !rest.is_empty() {
                    sequences.push(rest.to_string());
                }
                break false;
            }
        }
    };

    return Ok(Record {
        enzyme: enzyme.to_string(),
        sequences,
        terminated,
    });
}

/// Iterator over the [`Site`]s of a database stream.
///
/// The header is skipped on the first call to `next`. Lines are read one at
/// a time; nothing beyond the current record is buffered.
pub struct Records<R> {
    lines: Lines<R>,
    /// Number of lines consumed so far, header included.
    line: usize,
    header_skipped: bool,
    enzyme: String,
    pending: vec::IntoIter<String>,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Records<R> {
        return Records {
            lines: reader.lines(),
            line: 0,
            header_skipped: false,
            enzyme: String::new(),
            pending: Vec::new().into_iter(),
        };
    }

    /// Line number of the most recently read line, 1-based.
    pub fn line(&self) -> usize {
        return self.line;
    }

    fn skip_header(&mut self) -> Result<(), ParseError> {
        self.header_skipped = true;
        for _ in 0..HEADER_LINES {
            match self.read_line()? {
                Some(_) => {}
                None => break,
            }
        }
        debug!(lines = self.line, "skipped database header");
        return Ok(());
    }

    fn read_line(&mut self) -> Result<Option<String>, ParseError> {
        let Some(next) = self.lines.next() else {
            return Ok(None);
        };
        self.line += 1;
        let line = self.line;
        return next.map(Some).map_err(|source| ParseError::Read { line, source });
    }

    /// Advance to the next record that has at least one sequence.
    fn load_record(&mut self) -> Result<bool, ParseError> {
        while let Some(text) = self.read_line()? {
            if text.trim().is_empty() {
                continue;
            }
            let line = self.line;
            let record = parse_record(&text)
                .map_err(|reason| ParseError::Malformed { line, reason })?;
            if !record.terminated {
                warn!(line, enzyme = %record.enzyme, "record is missing its // terminator");
            }
            if record.sequences.is_empty() {
                continue;
            }
            self.enzyme = record.enzyme;
            self.pending = record.sequences.into_iter();
            return Ok(true);
        }
        return Ok(false);
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Site, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.header_skipped {
            if let Err(err) = self.skip_header() {
                return Some(Err(err));
            }
        }
        loop {
            if let Some(sequence) = self.pending.next() {
                return Some(Ok(Site {
                    sequence,
                    enzyme: self.enzyme.clone(),
                }));
            }
            match self.load_record() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

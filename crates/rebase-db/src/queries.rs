// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

use std::io::BufRead;
use std::io::Lines;

use crate::ParseError;

/// Iterator over the recognition sequences of a query list.
///
/// Each line holds one sequence. Surrounding whitespace is trimmed and blank
/// lines are skipped.
pub struct Queries<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Queries<R> {
    pub fn new(reader: R) -> Queries<R> {
        return Queries {
            lines: reader.lines(),
            line: 0,
        };
    }
}

impl<R: BufRead> Iterator for Queries<R> {
    type Item = Result<String, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        for next in self.lines.by_ref() {
            self.line += 1;
            let text = match next {
                Ok(text) => text,
                Err(source) => return Some(Err(ParseError::Read { line: self.line, source })),
            };
            let query = text.trim();
            if !query.is_empty() {
                return Some(Ok(query.to_string()));
            }
        }
        return None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_trims() {
        let text = "GAATTC\n\n  CCGG \r\n\n";
        let got: Vec<String> = Queries::new(text.as_bytes()).map(Result::unwrap).collect();
        assert_eq!(got, vec!["GAATTC", "CCGG"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(Queries::new(&b""[..]).count(), 0);
    }
}

// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Tree payloads: a recognition sequence and the enzymes that cut it.

use std::fmt;

use smallvec::SmallVec;

/// A payload that can absorb another payload stored under the same key.
pub trait Merge {
    /// Merge `other` into `self`, leaving `other` untouched.
    fn merge(&mut self, other: &Self);
}

/// A recognition sequence together with its enzyme acronyms.
///
/// Tags keep insertion order. Most sequences are cut by one or two enzymes,
/// so the tag list lives inline until it grows past that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: String,
    tags: SmallVec<[String; 2]>,
}

impl Entry {
    /// Create an entry holding a single tag.
    pub fn new(key: impl Into<String>, tag: impl Into<String>) -> Entry {
        let mut tags = SmallVec::new();
        tags.push(tag.into());
        return Entry { key: key.into(), tags };
    }

    /// Create an entry with an explicit tag list, possibly empty.
    pub fn with_tags<I, T>(key: impl Into<String>, tags: I) -> Entry
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        return Entry {
            key: key.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        };
    }

    pub fn key(&self) -> &str {
        return &self.key;
    }

    pub fn tags(&self) -> &[String] {
        return &self.tags;
    }
}

impl Merge for Entry {
    /// Append every tag of `other` in order.
    ///
    /// The caller guarantees both entries share a key; the tree only merges
    /// on an exact key match.
    fn merge(&mut self, other: &Entry) {
        debug_assert_eq!(self.key, other.key);
        self.tags.extend(other.tags.iter().cloned());
    }
}

/// Writes the key followed by each tag, space separated.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        for tag in &self.tags {
            write!(f, " {}", tag)?;
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_one_tag() {
        let entry = Entry::new("GAATTC", "EcoRI");
        assert_eq!(entry.key(), "GAATTC");
        assert_eq!(entry.tags(), ["EcoRI"]);
    }

    #[test]
    fn merge_appends_in_order() {
        let mut a = Entry::with_tags("CCGG", ["HpaII", "MspI"]);
        let b = Entry::with_tags("CCGG", ["BsaJI", "AgeI", "BsrFI"]);
        a.merge(&b);
        assert_eq!(a.tags(), ["HpaII", "MspI", "BsaJI", "AgeI", "BsrFI"]);
        assert_eq!(b.tags(), ["BsaJI", "AgeI", "BsrFI"]);
    }

    #[test]
    fn merge_keeps_duplicates() {
        let mut a = Entry::new("CCGG", "HpaII");
        a.merge(&Entry::new("CCGG", "HpaII"));
        assert_eq!(a.tags(), ["HpaII", "HpaII"]);
    }

    #[test]
    fn merge_empty_is_noop() {
        let mut a = Entry::new("CCGG", "HpaII");
        a.merge(&Entry::with_tags("CCGG", Vec::<String>::new()));
        assert_eq!(a.tags(), ["HpaII"]);
    }

    #[test]
    fn display_format() {
        let entry = Entry::with_tags("GAATTC", ["EcoRI", "FunII"]);
        assert_eq!(entry.to_string(), "GAATTC EcoRI FunII");
        assert_eq!(Entry::with_tags("A", Vec::<String>::new()).to_string(), "A");
    }
}

//! The field registries of the searchable entities.

mod extra;
mod library;

pub use extra::*;
pub use library::*;

use crate::lir::FromValue;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Type of an entry.
///
/// Known synonyms get normalized to their canonical type, anything else is carried verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryType<'a> {
    Character,
    Vocabulary,
    Sentence,
    Other(Cow<'a, str>),
}

impl<'a> EntryType<'a> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Character => "character",
            Self::Vocabulary => "vocabulary",
            Self::Sentence => "sentence",
            Self::Other(value) => value,
        }
    }
}

impl<'a> FromValue<'a> for EntryType<'a> {
    fn from_value(value: Cow<'a, str>) -> Self {
        const CHARACTER: &[&str] = &["character", "hanzi", "kanji"];

        if CHARACTER.iter().any(|name| value.eq_ignore_ascii_case(name)) {
            Self::Character
        } else if value.eq_ignore_ascii_case("vocabulary") {
            Self::Vocabulary
        } else if value.eq_ignore_ascii_case("sentence") {
            Self::Sentence
        } else {
            Self::Other(value)
        }
    }
}

impl Display for EntryType<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry_type(value: &str) -> EntryType<'_> {
        EntryType::from_value(Cow::Borrowed(value))
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(entry_type("hanzi"), EntryType::Character);
        assert_eq!(entry_type("kanji"), EntryType::Character);
        assert_eq!(entry_type("Character"), EntryType::Character);
        assert_eq!(entry_type("vocabulary"), EntryType::Vocabulary);
        assert_eq!(entry_type("SENTENCE"), EntryType::Sentence);
    }

    #[test]
    fn test_other() {
        assert_eq!(entry_type("grammar"), EntryType::Other("grammar".into()));
        assert_eq!(entry_type("grammar").as_str(), "grammar");
        assert_eq!(entry_type("hanzi").to_string(), "character");
    }
}

//! Multiple-choice option identifiers and option sets.
//!
//! The target option letter is a closed vocabulary: `A`-`D`. Making it an
//! enum keeps "option `E`" unrepresentable past the parsing boundary, so the
//! splicer never has to defend against an out-of-range index.

use serde::{Deserialize, Serialize};

use crate::error::SpliceError;

/// One of the four multiple-choice option slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    /// Parse a target option letter from record data.
    ///
    /// Accepts upper- or lower-case with surrounding whitespace. Anything
    /// else is [`SpliceError::UnknownTargetIndex`], which is fatal for the
    /// item being processed.
    pub fn parse(raw: &str) -> Result<Self, SpliceError> {
        match raw.trim() {
            "A" | "a" => Ok(OptionLetter::A),
            "B" | "b" => Ok(OptionLetter::B),
            "C" | "c" => Ok(OptionLetter::C),
            "D" | "d" => Ok(OptionLetter::D),
            other => Err(SpliceError::UnknownTargetIndex(other.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }

    /// Position of this letter's slot within an [`OptionSet`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }

    /// All letters in slot order.
    #[must_use]
    pub fn all() -> &'static [OptionLetter] {
        &[
            OptionLetter::A,
            OptionLetter::B,
            OptionLetter::C,
            OptionLetter::D,
        ]
    }
}

impl std::fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four original option texts in fixed `A`-`D` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet([String; 4]);

impl OptionSet {
    #[must_use]
    pub fn new(options: [String; 4]) -> Self {
        Self(options)
    }

    #[must_use]
    pub fn get(&self, letter: OptionLetter) -> &str {
        &self.0[letter.index()]
    }

    /// Iterate `(letter, text)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionLetter, &str)> {
        OptionLetter::all()
            .iter()
            .map(move |letter| (*letter, self.get(*letter)))
    }
}

impl From<[String; 4]> for OptionSet {
    fn from(options: [String; 4]) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::{OptionLetter, OptionSet};
    use crate::error::SpliceError;

    #[test]
    fn parse_accepts_case_and_whitespace() {
        assert_eq!(OptionLetter::parse("A"), Ok(OptionLetter::A));
        assert_eq!(OptionLetter::parse(" b "), Ok(OptionLetter::B));
        assert_eq!(OptionLetter::parse("d"), Ok(OptionLetter::D));
    }

    #[test]
    fn parse_rejects_out_of_range_letter() {
        assert_eq!(
            OptionLetter::parse("E"),
            Err(SpliceError::UnknownTargetIndex("E".to_string()))
        );
        assert_eq!(
            OptionLetter::parse(""),
            Err(SpliceError::UnknownTargetIndex(String::new()))
        );
    }

    #[test]
    fn option_set_slot_lookup() {
        let options = OptionSet::new([
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
            "fourth".to_string(),
        ]);
        assert_eq!(options.get(OptionLetter::A), "first");
        assert_eq!(options.get(OptionLetter::D), "fourth");
    }

    #[test]
    fn option_set_iterates_in_slot_order() {
        let options = OptionSet::new([
            "w".to_string(),
            "x".to_string(),
            "y".to_string(),
            "z".to_string(),
        ]);
        let collected: Vec<_> = options.iter().map(|(l, t)| (l.as_str(), t)).collect();
        assert_eq!(
            collected,
            vec![("A", "w"), ("B", "x"), ("C", "y"), ("D", "z")]
        );
    }
}

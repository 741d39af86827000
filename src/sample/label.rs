use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};


/// The binary label attached to every example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Positive class, written as `yes`.
    Yes,
    /// Negative class, written as `no`.
    No,
}


impl Label {
    /// Returns the textual form used in the data files.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }


    /// Parses a label found at line `line` of a file.
    pub(crate) fn parse_at(word: &str, line: usize) -> Result<Self> {
        word.parse::<Self>()
            .map_err(|_| {
                Error::parse(
                    line,
                    format!("expected label `yes` or `no`, got `{word}`")
                )
            })
    }
}


impl FromStr for Label {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(Error::parse(
                0, format!("expected label `yes` or `no`, got `{s}`")
            )),
        }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


/// Counts the `yes`/`no` labels in `labels`.
#[inline]
pub(crate) fn count_labels<'a, I>(labels: I) -> (usize, usize)
    where I: IntoIterator<Item = &'a Label>
{
    labels.into_iter()
        .fold((0, 0), |(yes, no), label| match label {
            Label::Yes => (yes + 1, no),
            Label::No => (yes, no + 1),
        })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_lowercase_words() {
        assert_eq!("yes".parse::<Label>().unwrap(), Label::Yes);
        assert_eq!("no".parse::<Label>().unwrap(), Label::No);
        assert!("Yes".parse::<Label>().is_err());
        assert!("maybe".parse::<Label>().is_err());
    }

    #[test]
    fn parse_error_carries_line() {
        match Label::parse_at("true", 7) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 7),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn counts_both_classes() {
        let labels = [Label::Yes, Label::No, Label::Yes];
        assert_eq!(count_labels(&labels), (2, 1));
    }
}

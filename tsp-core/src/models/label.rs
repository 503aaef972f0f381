#[cfg(test)]
#[path = "../../tests/unit/models/label_test.rs"]
mod label_test;

use super::Marker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of labels which fit into a single letter.
pub const SINGLE_LETTER_LABELS: usize = 26;

/// A marker label: `A`, `B`, ..., `Z`, then `AA`, `AB`, ... when extended.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Returns label as string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Specifies what happens when the collection grows beyond single letter labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Labels continue with two and more letters: `Z` is followed by `AA`, `AB`, ...
    #[default]
    Extended,
    /// The collection is limited to single letter labels `A..Z`.
    Bounded,
}

impl LabelPolicy {
    /// Returns max amount of markers allowed by the policy.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            LabelPolicy::Extended => None,
            LabelPolicy::Bounded => Some(SINGLE_LETTER_LABELS),
        }
    }
}

/// Returns a label for given 0-based position: `0 -> A`, `25 -> Z`, `26 -> AA`.
pub fn label_for(index: usize) -> Label {
    let mut letters = Vec::with_capacity(2);
    let mut value = index + 1;

    while value > 0 {
        let remainder = (value - 1) % SINGLE_LETTER_LABELS;
        letters.push((b'A' + remainder as u8) as char);
        value = (value - 1) / SINGLE_LETTER_LABELS;
    }

    Label(letters.into_iter().rev().collect())
}

/// Returns a 0-based position encoded by the label, if the label is well formed.
pub fn index_of(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }

    label
        .chars()
        .try_fold(0_usize, |acc, letter| {
            if !letter.is_ascii_uppercase() {
                return None;
            }

            let digit = (letter as u8 - b'A') as usize + 1;
            acc.checked_mul(SINGLE_LETTER_LABELS).and_then(|acc| acc.checked_add(digit))
        })
        .map(|value| value - 1)
}

/// Assigns to each marker a label derived from its current position.
pub fn relabel_all(markers: Vec<Marker>) -> Vec<Marker> {
    markers.into_iter().enumerate().map(|(idx, marker)| Marker { label: label_for(idx), ..marker }).collect()
}

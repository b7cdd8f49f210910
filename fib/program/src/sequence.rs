use std::{fmt, ops::Deref};

use serde::Serialize;

/// Fibonacci numbers `F(0..=n)`, index `i` holding `F(i)`.
///
/// Only the computers in this crate build a `Sequence`, so it always holds at
/// least one element and follows the recurrence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<u64>);

impl Sequence {
    pub(crate) fn new(terms: Vec<u64>) -> Self {
        debug_assert!(!terms.is_empty());
        Self(terms)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }

    /// The highest index held, i.e. the `n` this sequence was computed for.
    pub fn max_index(&self) -> usize {
        self.0.len() - 1
    }
}

impl Deref for Sequence {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}

impl AsRef<[u64]> for Sequence {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl From<Sequence> for Vec<u64> {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

impl IntoIterator for Sequence {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[u64]> for Sequence {
    fn eq(&self, other: &[u64]) -> bool {
        self.0 == other
    }
}

impl PartialEq<Vec<u64>> for Sequence {
    fn eq(&self, other: &Vec<u64>) -> bool {
        &self.0 == other
    }
}

impl<const N: usize> PartialEq<[u64; N]> for Sequence {
    fn eq(&self, other: &[u64; N]) -> bool {
        self.0 == other
    }
}

/// Renders as `[0 1 1 2]`.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{term}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Sequence::new(vec![0]).to_string(), "[0]");
        assert_eq!(Sequence::new(vec![0, 1, 1, 2]).to_string(), "[0 1 1 2]");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let seq = Sequence::new(vec![0, 1, 1]);
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[0,1,1]");
    }

    #[test]
    fn test_accessors() {
        let seq = Sequence::new(vec![0, 1, 1, 2, 3]);
        assert_eq!(seq.max_index(), 4);
        assert_eq!(seq.last(), Some(&3));
        assert_eq!(seq, [0, 1, 1, 2, 3]);
        assert_eq!(seq.iter().sum::<u64>(), 7);
        assert_eq!(Vec::from(seq), vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn test_conversions() {
        let seq = Sequence::new(vec![0, 1, 1, 2]);
        assert_eq!(seq, vec![0, 1, 1, 2]);
        assert_eq!(seq.as_ref(), &[0, 1, 1, 2][..]);

        let mut borrowed = Vec::new();
        for term in &seq {
            borrowed.push(*term);
        }
        assert_eq!(borrowed, [0, 1, 1, 2]);

        let owned: Vec<u64> = seq.clone().into_iter().collect();
        assert_eq!(owned, [0, 1, 1, 2]);
        assert_eq!(seq.into_inner(), vec![0, 1, 1, 2]);
    }
}

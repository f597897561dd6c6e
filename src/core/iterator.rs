use std::iter::FusedIterator;

use crate::core::error::{EnumError, EnumResult};
use crate::core::vocabulary::{Selection, Vocabulary};

/// A forward-only cursor over the selections of a `MultiSelectEnum`.
///
/// It yields the canonical (uppercase) name of each selection in insertion
/// order. The cursor borrows the enumeration, so the selection cannot change
/// while a traversal is in progress; `MultiSelectEnum::iter` hands out a fresh
/// cursor every time it is called.
#[derive(Debug, Clone)]
pub struct EnumIterator<'a> {
    vocabulary: &'a Vocabulary,
    selections: &'a [Selection],
    position: usize,
}

impl<'a> EnumIterator<'a> {
    pub(crate) fn new(vocabulary: &'a Vocabulary, selections: &'a [Selection]) -> Self {
        Self {
            vocabulary,
            selections,
            position: 0,
        }
    }

    /// The canonical name under the cursor.
    ///
    /// # Errors
    /// `IteratorExhausted` once the cursor has moved past the last selection.
    pub fn get(&self) -> EnumResult<&'a str> {
        self.selections
            .get(self.position)
            .map(|s| self.vocabulary.option(s.position).canonical.as_str())
            .ok_or(EnumError::IteratorExhausted)
    }

    /// Moves to the next selection. Stays put once exhausted.
    pub fn advance(&mut self) {
        if self.position < self.selections.len() {
            self.position += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.selections.len()
    }
}

impl<'a> Iterator for EnumIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.get().ok()?;
        self.advance();
        Some(name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.selections.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EnumIterator<'_> {}

impl FusedIterator for EnumIterator<'_> {}

#[cfg(test)]
mod tests {
    use crate::core::error::EnumError;
    use crate::core::multi::MultiSelectEnum;

    #[test]
    fn test_cursor_walks_then_exhausts() {
        let choices = MultiSelectEnum::parse("one two three", Some("three one")).unwrap();
        let mut cursor = choices.iter();

        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.get().unwrap(), "THREE");
        cursor.advance();
        assert_eq!(cursor.get().unwrap(), "ONE");
        cursor.advance();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.get(), Err(EnumError::IteratorExhausted));

        cursor.advance();
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_each_iter_call_restarts() {
        let choices = MultiSelectEnum::parse("a b c", Some("c b")).unwrap();
        let mut first = choices.iter();
        first.next();

        let second: Vec<&str> = choices.iter().collect();
        assert_eq!(second, vec!["C", "B"]);
        assert_eq!(first.collect::<Vec<_>>(), vec!["B"]);
    }
}

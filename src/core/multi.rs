use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::builders::declaration::canonicalize;
use crate::core::error::{EnumError, EnumResult};
use crate::core::iterator::EnumIterator;
use crate::core::vocabulary::{Selection, Vocabulary};

/// An enumeration holding an ordered list of names from its vocabulary.
///
/// Selections keep the order they were added in and may repeat. Indexed
/// access (`get`) returns each entry as the caller wrote it, while iteration
/// returns the canonical uppercase names; both views are relied upon.
#[derive(Debug, Clone)]
pub struct MultiSelectEnum {
    vocabulary: Arc<Vocabulary>,
    selections: Vec<Selection>,
}

impl MultiSelectEnum {
    /// Binds a new enumeration to `vocabulary`, optionally selecting the
    /// whitespace separated names in `default`.
    pub fn new(vocabulary: Arc<Vocabulary>, default: Option<&str>) -> EnumResult<Self> {
        let mut this = Self {
            vocabulary,
            selections: Vec::new(),
        };
        if let Some(text) = default {
            this.assign(text)?;
        }
        Ok(this)
    }

    /// Parses `declaration` into a fresh vocabulary and binds to it.
    pub fn parse(declaration: &str, default: Option<&str>) -> EnumResult<Self> {
        Self::new(Vocabulary::shared(declaration)?, default)
    }

    /// Validates every name before anything is stored, so a single bad
    /// token leaves the enumeration untouched.
    fn validate_all<I, S>(&self, names: I) -> EnumResult<Vec<Selection>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.vocabulary.select(name.as_ref()))
            .collect()
    }

    /// Replaces the selection with the whitespace separated names in `text`,
    /// keeping their order. Blank text empties the selection.
    pub fn assign(&mut self, text: &str) -> EnumResult<()> {
        self.assign_all(text.split_whitespace())
    }

    /// Replaces the selection with `names`, in the collection's iteration
    /// order. Each item must be exactly one name.
    pub fn assign_all<I, S>(&mut self, names: I) -> EnumResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selections = self.validate_all(names)?;
        debug!(value = %self, "assigned enumeration values");
        Ok(())
    }

    /// Appends the whitespace separated names in `text`. Duplicates are kept.
    pub fn push_back(&mut self, text: &str) -> EnumResult<()> {
        self.push_back_all(text.split_whitespace())
    }

    /// Appends every item of `names`, in order.
    pub fn push_back_all<I, S>(&mut self, names: I) -> EnumResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = self.validate_all(names)?;
        self.selections.extend(added);
        debug!(value = %self, "appended enumeration values");
        Ok(())
    }

    /// Removes every occurrence of each whitespace separated name in `text`.
    ///
    /// Names are validated like an assignment; nothing is removed if any of
    /// them is invalid or deprecated.
    pub fn erase(&mut self, text: &str) -> EnumResult<()> {
        let doomed: Vec<usize> = self
            .validate_all(text.split_whitespace())?
            .into_iter()
            .map(|s| s.position)
            .collect();
        self.selections.retain(|s| !doomed.contains(&s.position));
        Ok(())
    }

    /// Retires `old_name` in the shared vocabulary. Reports `DeprecatedOption`
    /// if the current selection uses it; the deprecation is kept either way.
    pub fn deprecate(&self, old_name: &str, new_name: &str) -> EnumResult<()> {
        self.vocabulary.deprecate(old_name, new_name)?;
        for selection in &self.selections {
            self.vocabulary.resolve(&selection.input)?;
        }
        Ok(())
    }

    /// Whether `name` is currently selected. Case-insensitive; checks the
    /// selection only, not the vocabulary.
    pub fn contains(&self, name: &str) -> bool {
        let canonical = canonicalize(name);
        self.selections
            .iter()
            .any(|s| self.vocabulary.option(s.position).canonical == canonical)
    }

    pub fn contains_id(&self, id: i32) -> bool {
        self.selections
            .iter()
            .any(|s| self.vocabulary.option(s.position).id == id)
    }

    /// Empties the selection. The vocabulary and its deprecations are untouched.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn is_valid(&self) -> bool {
        !self.selections.is_empty()
    }

    /// The number of options in the vocabulary, not the number selected.
    /// Use `len` for the latter.
    pub fn size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The number of selected entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// The `index`-th selection as it was written by the caller.
    pub fn get(&self, index: usize) -> EnumResult<&str> {
        self.selections
            .get(index)
            .map(|s| s.input.as_str())
            .ok_or(EnumError::IndexOutOfRange {
                index,
                len: self.selections.len(),
            })
    }

    /// Ids of the selected entries, in selection order.
    pub fn ids(&self) -> Vec<i32> {
        self.selections
            .iter()
            .map(|s| self.vocabulary.option(s.position).id)
            .collect()
    }

    /// A fresh cursor over the canonical names of the current selection.
    pub fn iter(&self) -> EnumIterator<'_> {
        EnumIterator::new(&self.vocabulary, &self.selections)
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }
}

impl<'a> IntoIterator for &'a MultiSelectEnum {
    type Item = &'a str;
    type IntoIter = EnumIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MultiSelectEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs: Vec<&str> = self.selections.iter().map(|s| s.input.as_str()).collect();
        write!(f, "{}", inputs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    fn sample(default: Option<&str>) -> MultiSelectEnum {
        MultiSelectEnum::parse("one two three four", default).unwrap()
    }

    #[test]
    fn test_push_back_keeps_existing_entries() {
        let mut choices = sample(Some("two"));
        assert!(!choices.contains("one"));
        assert!(choices.contains("TWO"));

        choices.push_back("four").unwrap();
        assert!(choices.contains("two"));
        assert!(choices.contains("four"));
        assert!(!choices.contains("three"));
        assert!(choices.is_valid());

        choices.clear();
        assert!(!choices.is_valid());

        choices.push_back("one three").unwrap();
        assert!(choices.contains("one"));
        assert!(choices.contains("three"));
        assert!(!choices.contains("two"));
    }

    #[test]
    fn test_assign_from_collections() {
        let mut choices = sample(None);

        choices.assign_all(vec!["one", "two"]).unwrap();
        assert!(choices.contains("one") && choices.contains("two"));
        assert!(!choices.contains("three"));

        let set: BTreeSet<String> = ["two".to_string(), "three".to_string()].into();
        choices.assign_all(&set).unwrap();
        assert!(!choices.contains("one"));
        assert!(choices.contains("two") && choices.contains("three"));
        // BTreeSet iterates in sorted order.
        assert_eq!(choices.get(0).unwrap(), "three");

        let unordered: HashSet<&str> = ["four"].into();
        choices.assign_all(unordered).unwrap();
        assert_eq!(choices.len(), 1);
        assert!(choices.contains("four"));

        choices.push_back_all(["one", "two"]).unwrap();
        assert_eq!(choices.to_string(), "four one two");
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let mut choices = sample(Some("one four"));
        choices.push_back("three four").unwrap();
        assert_eq!(choices.len(), 4);
        assert_eq!(choices.ids(), vec![0, 3, 2, 3]);
        let names: Vec<&str> = choices.iter().collect();
        assert_eq!(names, vec!["ONE", "FOUR", "THREE", "FOUR"]);
    }

    #[test]
    fn test_size_is_the_vocabulary_size() {
        let mut choices = sample(None);
        assert_eq!(choices.size(), 4);
        choices.assign("one").unwrap();
        assert_eq!(choices.size(), 4);
        choices.push_back("one two three four two").unwrap();
        assert_eq!(choices.size(), 4);
        assert_eq!(choices.len(), 6);
    }

    #[test]
    fn test_index_returns_input_text_iteration_returns_canonical() {
        let mut choices = sample(None);
        choices.assign("one Two four").unwrap();
        assert_eq!(choices.get(0).unwrap(), "one");
        assert_eq!(choices.get(1).unwrap(), "Two");
        assert_eq!(choices.get(2).unwrap(), "four");
        assert_eq!(
            choices.get(3),
            Err(EnumError::IndexOutOfRange { index: 3, len: 3 })
        );

        let names: Vec<&str> = (&choices).into_iter().collect();
        assert_eq!(names, vec!["ONE", "TWO", "FOUR"]);
    }

    #[test]
    fn test_failed_updates_are_all_or_nothing() {
        let mut choices = sample(Some("one two"));

        let err = choices.assign("three five").unwrap_err();
        assert!(err.to_string().contains("Invalid option"));
        assert!(choices.push_back("four nope").is_err());
        assert!(choices.erase("one nope").is_err());
        assert_eq!(choices.to_string(), "one two");
    }

    #[test]
    fn test_clear_and_blank_assign() {
        let mut choices = sample(Some("one"));
        choices.clear();
        choices.clear();
        choices.assign("").unwrap();
        assert!(!choices.is_valid());
        assert!(choices.is_empty());
        assert_eq!(choices.iter().count(), 0);
    }

    #[test]
    fn test_erase_removes_every_occurrence() {
        let mut choices = sample(Some("one two one three"));
        choices.erase("ONE").unwrap();
        assert_eq!(choices.to_string(), "two three");
        assert!(!choices.contains_id(0));
        assert!(choices.contains_id(2));
    }

    #[test]
    fn test_deprecation_blocks_later_pushes() {
        let mut choices = MultiSelectEnum::parse("one too three four", None).unwrap();
        choices.deprecate("too", "two").unwrap();
        choices.push_back("one").unwrap();

        let err = choices.push_back("too").unwrap_err();
        assert!(err.to_string().contains("is deprecated, consider using"));
        assert_eq!(choices.len(), 1);
    }

    #[test]
    fn test_deprecating_a_selected_value_reports_it() {
        let choices = MultiSelectEnum::parse("one too", Some("one too")).unwrap();
        assert!(matches!(
            choices.deprecate("too", "one"),
            Err(EnumError::DeprecatedOption { .. })
        ));
    }
}

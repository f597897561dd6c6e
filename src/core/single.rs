use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::builders::declaration::canonicalize;
use crate::core::error::{EnumError, EnumResult};
use crate::core::vocabulary::{Selection, Vocabulary};

/// How `SingleSelectEnum::compare_current` decides two selections match.
///
/// Two enumerations may bind the same name to different ids, so a match by
/// name does not imply a match by id (and the other way around).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    /// Same canonical name.
    #[default]
    ByName,
    /// Same numeric id, whatever the names are.
    ById,
    /// Same name and same id.
    ByBoth,
}

/// An enumeration holding at most one name from its vocabulary.
#[derive(Debug, Clone)]
pub struct SingleSelectEnum {
    vocabulary: Arc<Vocabulary>,
    current: Option<Selection>,
}

impl SingleSelectEnum {
    /// Binds a new enumeration to `vocabulary`, optionally selecting `default`.
    pub fn new(vocabulary: Arc<Vocabulary>, default: Option<&str>) -> EnumResult<Self> {
        let mut this = Self {
            vocabulary,
            current: None,
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

    /// Selects the single name in `text`.
    ///
    /// On failure the previous selection is kept.
    ///
    /// # Errors
    /// `DeprecatedOption` for a retired name, `InvalidOption` when `text` is
    /// blank, holds more than one token, or names nothing in the vocabulary.
    pub fn assign(&mut self, text: &str) -> EnumResult<()> {
        let mut tokens = text.split_whitespace();
        let selection = match (tokens.next(), tokens.next()) {
            (Some(token), None) => self.vocabulary.select(token)?,
            _ => {
                return Err(EnumError::InvalidOption {
                    name: text.trim().to_string(),
                    valid: self.vocabulary.valid_list(),
                });
            }
        };

        debug!(value = %selection.input, "assigned enumeration value");
        self.current = Some(selection);
        Ok(())
    }

    /// Retires `old_name` in the shared vocabulary.
    ///
    /// The deprecation is registered even when this enumeration currently
    /// holds `old_name`; in that case the call reports `DeprecatedOption`
    /// so the stale value does not go unnoticed.
    pub fn deprecate(&self, old_name: &str, new_name: &str) -> EnumResult<()> {
        self.vocabulary.deprecate(old_name, new_name)?;
        if let Some(selection) = &self.current {
            self.vocabulary.resolve(&selection.input)?;
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    /// The canonical (uppercase) name of the current selection.
    pub fn name(&self) -> Option<&str> {
        self.current
            .as_ref()
            .map(|s| self.vocabulary.option(s.position).canonical.as_str())
    }

    /// The current selection as it was written when assigned.
    pub fn raw(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.input.as_str())
    }

    pub fn id(&self) -> Option<i32> {
        self.current
            .as_ref()
            .map(|s| self.vocabulary.option(s.position).id)
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Compares the current selections of two enumerations, which may be
    /// bound to different vocabularies. Always false if either is unset.
    pub fn compare_current(&self, other: &SingleSelectEnum, mode: CompareMode) -> bool {
        let (Some(name), Some(other_name)) = (self.name(), other.name()) else {
            return false;
        };
        let same_name = name == other_name;
        let same_id = self.id() == other.id();

        match mode {
            CompareMode::ByName => same_name,
            CompareMode::ById => same_id,
            CompareMode::ByBoth => same_name && same_id,
        }
    }
}

impl PartialEq<str> for SingleSelectEnum {
    fn eq(&self, other: &str) -> bool {
        self.name() == Some(canonicalize(other).as_str())
    }
}

impl PartialEq<&str> for SingleSelectEnum {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for SingleSelectEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or_default())
    }
}

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use crate::builders::declaration::{DeclaredOption, canonicalize, parse_declaration};
use crate::core::error::{EnumError, EnumResult};

/// The closed set of names an enumeration may take.
///
/// A vocabulary is built once from a declaration string and then shared,
/// usually as an `Arc<Vocabulary>`, by every `SingleSelectEnum` and
/// `MultiSelectEnum` bound to it. The only thing that may change after
/// construction is the table of deprecated names, and a deprecation
/// registered through one handle is seen by all of them.
#[derive(Debug)]
pub struct Vocabulary {
    options: Vec<DeclaredOption>,
    index: HashMap<String, usize>,
    /// Canonical retired name -> replacement name as given to `deprecate`.
    aliases: RwLock<HashMap<String, String>>,
}

impl Vocabulary {
    /// Builds a vocabulary from a declaration such as `"one two=5 three"`.
    ///
    /// # Errors
    /// `MalformedDeclaration` for bad `=` usage or an empty declaration,
    /// `DuplicateOption` when a name repeats ignoring case.
    pub fn parse(declaration: &str) -> EnumResult<Self> {
        let options = parse_declaration(declaration)?;
        let index = options
            .iter()
            .enumerate()
            .map(|(i, option)| (option.canonical.clone(), i))
            .collect();

        debug!(declaration, count = options.len(), "parsed enumeration vocabulary");

        Ok(Self {
            options,
            index,
            aliases: RwLock::new(HashMap::new()),
        })
    }

    /// Same as `parse`, wrapped for sharing between enumerations.
    pub fn shared(declaration: &str) -> EnumResult<Arc<Self>> {
        Self::parse(declaration).map(Arc::new)
    }

    /// Retires `old_name`: any later use of it fails with `DeprecatedOption`
    /// pointing at `new_name`. The replacement does not need to be a member.
    pub fn deprecate(&self, old_name: &str, new_name: &str) -> EnumResult<()> {
        let canonical = canonicalize(old_name);
        if !self.index.contains_key(&canonical) {
            return Err(EnumError::UnknownOption {
                name: old_name.trim().to_string(),
                valid: self.valid_list(),
            });
        }

        debug!(old = %canonical, new = new_name.trim(), "deprecated enumeration option");
        self.aliases
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(canonical, new_name.trim().to_string());
        Ok(())
    }

    /// Returns the id bound to `name`, matching case-insensitively.
    ///
    /// A deprecated name is not redirected to its replacement; the lookup
    /// fails with `DeprecatedOption` instead.
    pub fn lookup(&self, name: &str) -> EnumResult<i32> {
        let canonical = canonicalize(name);
        self.check_deprecated(&canonical)?;
        match self.index.get(&canonical) {
            Some(&i) => Ok(self.options[i].id),
            None => Err(EnumError::UnknownOption {
                name: name.trim().to_string(),
                valid: self.valid_list(),
            }),
        }
    }

    /// Resolves an assigned token to its position in the vocabulary.
    pub(crate) fn resolve(&self, token: &str) -> EnumResult<usize> {
        let canonical = canonicalize(token);
        self.check_deprecated(&canonical)?;
        self.index
            .get(&canonical)
            .copied()
            .ok_or_else(|| EnumError::InvalidOption {
                name: token.trim().to_string(),
                valid: self.valid_list(),
            })
    }

    /// Validates one assigned token and pairs it with its vocabulary entry.
    pub(crate) fn select(&self, token: &str) -> EnumResult<Selection> {
        let position = self.resolve(token)?;
        Ok(Selection {
            position,
            input: token.trim().to_string(),
        })
    }

    fn check_deprecated(&self, canonical: &str) -> EnumResult<()> {
        let aliases = self.aliases.read().unwrap_or_else(PoisonError::into_inner);
        match aliases.get(canonical) {
            Some(replacement) => Err(EnumError::DeprecatedOption {
                old: self.index.get(canonical).map_or_else(
                    || canonical.to_string(),
                    |&i| self.options[i].raw.clone(),
                ),
                new: replacement.clone(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn option(&self, position: usize) -> &DeclaredOption {
        &self.options[position]
    }

    pub fn options(&self) -> &[DeclaredOption] {
        &self.options
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Canonical (uppercase) names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.canonical.as_str()).collect()
    }

    /// Names as declared, in declaration order.
    pub fn raw_names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.raw.as_str()).collect()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.options.iter().map(|o| o.id).collect()
    }

    /// Id of a declared name, ignoring deprecation.
    pub fn id_of(&self, name: &str) -> Option<i32> {
        self.index
            .get(&canonicalize(name))
            .map(|&i| self.options[i].id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&canonicalize(name))
    }

    pub fn is_deprecated(&self, name: &str) -> bool {
        self.replacement_for(name).is_some()
    }

    pub fn replacement_for(&self, name: &str) -> Option<String> {
        self.aliases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&canonicalize(name))
            .cloned()
    }

    /// The declared names joined by spaces, used in error messages.
    pub(crate) fn valid_list(&self) -> String {
        self.raw_names().join(" ")
    }
}

/// A validated choice: the vocabulary entry it resolved to plus the text
/// the caller actually wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) position: usize,
    pub(crate) input: String,
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.options.iter().map(ToString::to_string).collect();
        write!(f, "{}", tokens.join(" "))
    }
}

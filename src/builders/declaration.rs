use regex::Regex;
use std::collections::HashSet;
use std::fmt;

use crate::core::error::{EQUALS_WHITESPACE, EnumError, EnumResult};

/// One entry of an enumeration declaration such as `"first=1 second third=7"`.
///
/// A declaration is a whitespace separated list of tokens, each either a bare
/// name or `name=integer`. Names keep the casing they were declared with for
/// display, and carry an uppercase canonical form used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredOption {
    /// The name exactly as written in the declaration.
    pub raw: String,
    /// The uppercase identity used for every comparison.
    pub canonical: String,
    /// The explicit id, or the 0-based position of the token when none was given.
    pub id: i32,
    /// Whether the id came from a `name=N` token.
    pub explicit_id: bool,
}

/// Upper-cases a name the same way for declarations, assignments and lookups.
pub fn canonicalize(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Parses a declaration string into its options, in declaration order.
///
/// The raw text is checked for whitespace next to `=` before it is split,
/// because `"one= 1"` would otherwise tokenize into two plausible tokens.
pub fn parse_declaration(text: &str) -> EnumResult<Vec<DeclaredOption>> {
    let malformed = |detail: String| EnumError::MalformedDeclaration {
        declaration: text.to_string(),
        detail,
    };

    let spacing = Regex::new(r"\s=|=\s").map_err(|e| malformed(e.to_string()))?;
    if spacing.is_match(text) {
        return Err(malformed(EQUALS_WHITESPACE.to_string()));
    }

    let mut options = Vec::new();
    let mut seen = HashSet::new();

    for (position, token) in text.split_whitespace().enumerate() {
        let (raw, id, explicit_id) = match token.split_once('=') {
            None => (token, position as i32, false),
            Some((name, value)) => {
                if name.is_empty() {
                    return Err(malformed(format!("Missing option name before '=' in \"{token}\"")));
                }
                if value.is_empty() {
                    return Err(malformed(format!("Missing id after '=' in \"{token}\"")));
                }
                if value.contains('=') {
                    return Err(malformed(format!("Only one '=' is allowed in \"{token}\"")));
                }
                let id = value
                    .parse::<i32>()
                    .map_err(|_| malformed(format!("Invalid id \"{value}\" for option \"{name}\"")))?;
                (name, id, true)
            }
        };

        let canonical = canonicalize(raw);
        if !seen.insert(canonical.clone()) {
            return Err(EnumError::DuplicateOption {
                name: raw.to_string(),
            });
        }

        options.push(DeclaredOption {
            raw: raw.to_string(),
            canonical,
            id,
            explicit_id,
        });
    }

    if options.is_empty() {
        return Err(malformed("An enumeration must declare at least one option".to_string()));
    }

    Ok(options)
}

impl fmt::Display for DeclaredOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.explicit_id {
            write!(f, "{}={}", self.raw, self.id)
        } else {
            write!(f, "{}", self.raw)
        }
    }
}

use thiserror::Error;

/// Every way an enumeration operation can fail.
///
/// The `Display` text of these variants is shown to users verbatim, and
/// callers search it for fixed phrases (`"Invalid option"`,
/// `"is deprecated, consider using"`, and the `'='` whitespace message),
/// so those phrases must not be reworded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// The declaration string could not be parsed into a vocabulary.
    #[error("{detail} (in enumeration declaration \"{declaration}\")")]
    MalformedDeclaration { declaration: String, detail: String },

    /// The same name (ignoring case) was declared twice.
    #[error("Duplicate option \"{name}\" in enumeration declaration")]
    DuplicateOption { name: String },

    /// `deprecate` was asked to retire a name the vocabulary does not have.
    #[error("Unknown option \"{name}\". Valid options (not case-sensitive) are \"{valid}\"")]
    UnknownOption { name: String, valid: String },

    /// A retired name was used.
    #[error("{old} is deprecated, consider using {new}")]
    DeprecatedOption { old: String, new: String },

    /// An assigned token matched no vocabulary member.
    #[error("Invalid option \"{name}\" in enumeration. Valid options (not case-sensitive) are \"{valid}\"")]
    InvalidOption { name: String, valid: String },

    #[error("Index {index} is out of range for a selection of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Attempted to read past the end of the enumeration selection")]
    IteratorExhausted,
}

pub type EnumResult<T> = std::result::Result<T, EnumError>;

/// The message attached to a declaration that has whitespace next to `=`.
pub(crate) const EQUALS_WHITESPACE: &str = "You cannot place whitespace around the '=' character";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_phrases_survive_display() {
        let err = EnumError::DeprecatedOption {
            old: "TOO".to_string(),
            new: "TWO".to_string(),
        };
        assert_eq!(err.to_string(), "TOO is deprecated, consider using TWO");

        let err = EnumError::InvalidOption {
            name: "FOUR".to_string(),
            valid: "one two three".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid option \"FOUR\""));

        let err = EnumError::MalformedDeclaration {
            declaration: "one= 1".to_string(),
            detail: EQUALS_WHITESPACE.to_string(),
        };
        assert!(err.to_string().contains("You cannot place whitespace around the '=' character"));
    }
}

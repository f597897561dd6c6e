use anyhow::Result;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::builders::declaration::parse_declaration;
use crate::core::config;

/// The `ConfigValidator` trait defines the public interface for validating
/// an option file.
///
/// Unlike `OptionFile::bind`, which stops at the first error, a validator
/// walks the whole file and reports every problem it finds.
pub trait ConfigValidator {
    /// Performs a full validation of the `OptionFile` and returns a list of
    /// issues found.
    ///
    /// # Arguments
    /// * `config`: The `OptionFile` to be validated.
    ///
    /// # Returns
    /// A `Result<Vec<String>>` where each string describes one issue. An empty
    /// vector means the file is fine.
    fn validate_config(&self, config: &config::OptionFile) -> Result<Vec<String>>;

    /// Validates a single option entry and returns a list of issues.
    fn validate_option(&self, option: &config::OptionDecl) -> Result<Vec<String>>;
}

/// The `StandardValidator` is a concrete implementation of `ConfigValidator`.
///
/// Besides hard errors (anything that would make binding fail) it warns about
/// entries that bind fine but are probably mistakes.
pub struct StandardValidator {
    name_convention: Regex,
}

impl StandardValidator {
    /// Creates a new instance of `StandardValidator`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            name_convention: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?,
        })
    }

    /// Warns about names that do not look like identifiers.
    fn check_option_names(&self, option: &config::OptionDecl) -> Vec<String> {
        let Ok(declared) = parse_declaration(&option.declaration) else {
            return Vec::new();
        };

        declared
            .iter()
            .filter(|d| !self.name_convention.is_match(&d.raw))
            .map(|d| {
                format!(
                    "Option '{}': name \"{}\" is not a conventional identifier",
                    option.name, d.raw
                )
            })
            .collect()
    }

    /// Checks for explicit ids shared by more than one name.
    ///
    /// Ids are not required to be unique, but two names with the same explicit
    /// id compare equal under `CompareMode::ById`, which is rarely intended.
    fn check_id_conflicts(&self, option: &config::OptionDecl) -> Vec<String> {
        let Ok(declared) = parse_declaration(&option.declaration) else {
            return Vec::new();
        };

        let mut by_id: HashMap<i32, Vec<&str>> = HashMap::new();
        for d in declared.iter().filter(|d| d.explicit_id) {
            by_id.entry(d.id).or_default().push(&d.raw);
        }

        let mut warnings: Vec<String> = by_id
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(id, names)| {
                format!(
                    "Option '{}': id {} is shared by {}",
                    option.name,
                    id,
                    names.join(", ")
                )
            })
            .collect();
        warnings.sort();
        warnings
    }
}

impl ConfigValidator for StandardValidator {
    /// The main public method for validating the entire option file.
    ///
    /// It checks:
    /// - Version compatibility.
    /// - Option entries that share a name.
    /// - Every entry on its own, through `validate_option`.
    fn validate_config(&self, config: &config::OptionFile) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        if config.version != "1.0" {
            issues.push(format!("Unsupported config version: {}", config.version));
        }

        let mut names = HashSet::new();
        for option in &config.options {
            if !names.insert(option.name.as_str()) {
                issues.push(format!("Duplicate option entry '{}'", option.name));
            }
            issues.extend(self.validate_option(option)?);
        }

        Ok(issues)
    }

    /// Validates one entry in two passes:
    /// 1. **Binding:** declaration, deprecations and value must all be accepted.
    /// 2. **Semantics:** naming convention, shared ids and deprecations that
    ///    point outside the vocabulary.
    fn validate_option(&self, option: &config::OptionDecl) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        match option.bind() {
            Ok(bound) => {
                let vocabulary = bound.vocabulary();
                for (old, new) in &option.deprecated {
                    if !vocabulary.contains(new) {
                        issues.push(format!(
                            "Option '{}': deprecated name \"{}\" points to \"{}\", which is not a valid option",
                            option.name, old, new
                        ));
                    }
                }
            }
            Err(e) => issues.push(format!("Option '{}': {}", option.name, e)),
        }

        issues.extend(self.check_option_names(option));
        issues.extend(self.check_id_conflicts(option));

        Ok(issues)
    }
}

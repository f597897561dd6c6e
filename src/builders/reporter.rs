use anyhow::Result;

use crate::core::config::BoundOption;
use crate::core::vocabulary::Vocabulary;

pub trait StatusReporter {
    fn generate_status_report(&self, options: &[(String, BoundOption)]) -> Result<()>;
}

/// A concrete implementation of `StatusReporter` that prints the report to the console.
///
/// This is the reporter used by the `show` command.
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Constructs a new `ConsoleReporter` instance.
    pub fn new() -> Self {
        Self
    }

    /// Formats one vocabulary entry of a bound option.
    ///
    /// 🟢 marks a selected name, ⚪ an unselected one and 🔴 a deprecated one,
    /// followed by the declared name, its id and, for deprecated names, the
    /// suggested replacement.
    pub fn format_entry(&self, option: &BoundOption, raw: &str, id: i32) -> String {
        let vocabulary: &Vocabulary = option.vocabulary();
        match vocabulary.replacement_for(raw) {
            Some(replacement) => format!("🔴 {raw} (id {id}) -> use {replacement}"),
            None if option.is_selected(raw) => format!("🟢 {raw} (id {id})"),
            None => format!("⚪ {raw} (id {id})"),
        }
    }

    /// Formats the header line of a bound option.
    pub fn format_header(&self, name: &str, option: &BoundOption) -> String {
        let kind = match option {
            BoundOption::Single(_) => "single",
            BoundOption::Multi(_) => "multi",
        };
        let value = option.to_string();
        let value = if value.is_empty() { "<unset>" } else { value.as_str() };
        format!(
            "{} [{}] = {} ({} options)",
            name,
            kind,
            value,
            option.vocabulary().len()
        )
    }
}

impl StatusReporter for ConsoleReporter {
    /// Generates and prints the full report to the standard output.
    fn generate_status_report(&self, options: &[(String, BoundOption)]) -> Result<()> {
        println!("📊 Enumerated Option Report");
        println!("===========================");

        if options.is_empty() {
            println!("No options declared.");
            return Ok(());
        }

        for (name, option) in options {
            println!("\n{}", self.format_header(name, option));
            for entry in option.vocabulary().options() {
                println!("  {}", self.format_entry(option, &entry.raw, entry.id));
            }
        }
        Ok(())
    }
}

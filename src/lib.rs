//! Validated string enumerations for configuration options.
//!
//! A [`Vocabulary`] is the closed set of names an option may take, each with a
//! numeric id and optionally retired in favour of another name. A
//! [`SingleSelectEnum`] holds one of those names and a [`MultiSelectEnum`] an
//! ordered list of them; both check every assignment against the vocabulary.
//!
//! ```
//! use option_enum::{CompareMode, MultiSelectEnum, SingleSelectEnum};
//!
//! let mut order = SingleSelectEnum::parse("first=1 second=2", Some("first"))?;
//! order.assign("SECOND")?;
//! assert_eq!(order.id(), Some(2));
//!
//! let other = SingleSelectEnum::parse("first=2 second=1", Some("second"))?;
//! assert!(order.compare_current(&other, CompareMode::ByName));
//! assert!(!order.compare_current(&other, CompareMode::ById));
//!
//! let mut execute_on = MultiSelectEnum::parse("initial linear final", None)?;
//! execute_on.assign("initial final")?;
//! assert_eq!(execute_on.iter().collect::<Vec<_>>(), ["INITIAL", "FINAL"]);
//! # Ok::<(), option_enum::EnumError>(())
//! ```

pub mod builders;
pub mod core;

pub use crate::core::error::{EnumError, EnumResult};
pub use crate::core::iterator::EnumIterator;
pub use crate::core::multi::MultiSelectEnum;
pub use crate::core::single::{CompareMode, SingleSelectEnum};
pub use crate::core::vocabulary::Vocabulary;

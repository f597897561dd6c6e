// This file is the module declaration file for the `core` module.
// It declares the submodules that make up the enumeration types and exposes
// them to the rest of the crate.

// `error` module:
// The `EnumError` taxonomy shared by every fallible operation below.
pub mod error;

// `vocabulary` module:
// The closed, shared set of option names with their ids and deprecations.
pub mod vocabulary;

// `single` and `multi` modules:
// The single-selection and ordered multi-selection enumerations, both bound
// to a shared `Vocabulary`.
pub mod multi;
pub mod single;

// `iterator` module:
// The forward-only cursor over a multi-selection.
pub mod iterator;

// `config` module:
// Option files (TOML, YAML or JSON) that declare enumerated options together
// with their values, and the `ConfigManager` that reads and writes them.
pub mod config;

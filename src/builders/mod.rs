// This file is the module declaration file for the `builders` module.
// It declares and makes public all the sub-modules within the `src/builders`
// directory. These modules turn text into validated enumerations and report
// on the result.

// `declaration` module:
// Parses declaration strings such as `"first=1 second third"` into the
// options that make up a vocabulary.
pub mod declaration;

// `reporter` module:
// Defines the `StatusReporter` trait and its `ConsoleReporter`
// implementation, which prints each option's vocabulary and selection.
pub mod reporter;

// `validator` module:
// Defines the `ConfigValidator` trait and a `StandardValidator` that collects
// every problem in an option file instead of stopping at the first one.
pub mod validator;

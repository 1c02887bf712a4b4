//! argrules CLI library
//!
//! This crate holds the collaborators around the argrules core: the help
//! renderer, which turns a rule set's public attributes into aligned usage
//! text, and the `tableexport` demonstration binary, which exercises the
//! whole pipeline against a realistic set of rules.
//!
//! The help renderer deliberately lives outside the core crate: it consumes
//! nothing but public `RuleSet` and `Parameter` attributes, so any program
//! can replace it with its own formatting.

pub mod help;

//! argrules core library
//!
//! This crate provides the core of argrules, a declarative command-line
//! argument parser: programs describe the set of named parameters they
//! accept, hand the raw token sequence to the engine, and query the
//! validated result by parameter name.
//!
//! # Key Features
//!
//! - **Declarative Rules**: Register required, optional-with-default, flag
//!   and list-valued parameters with a chainable builder
//! - **Registration-Time Checking**: Name and abbreviation constraints are
//!   enforced once, when a parameter is declared, never at parse time
//! - **Two-Pass Parsing**: Token matching followed by mandatory-completeness
//!   and value validation (integer bounds, enumerated valid values)
//! - **Reusable Rule Sets**: Declarations are immutable; per-invocation state
//!   lives on the parse result, so one rule set serves many parses
//! - **Diagnostics**: A dump of every registered parameter that respects
//!   hidden-value masking, plus error types split by who caused the problem
//!
//! # Examples
//!
//! Declaring rules and parsing a token sequence:
//!
//! ```
//! use argrules_core::parameter::Parameter;
//! use argrules_core::parser::parse;
//! use argrules_core::rules::RuleSet;
//!
//! let mut rules = RuleSet::new("Copy a table between databases");
//! rules.insert(Parameter::required("host").abbreviation("h")).unwrap();
//! rules
//!     .insert(Parameter::optional("port", Some("5432")).min_value(1).max_value(65535))
//!     .unwrap();
//! rules.insert(Parameter::optional("tables", Some("%")).list()).unwrap();
//! rules.insert(Parameter::flag("verbose")).unwrap();
//!
//! let args: Vec<String> = ["--host", "db.local", "--tables", "A,B", "--verbose"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! let parsed = parse(&rules, &args).unwrap();
//! assert_eq!(parsed.argument("host"), Some("db.local"));
//! assert_eq!(parsed.argument("port"), Some("5432"));
//! assert_eq!(parsed.array("tables"), ["A", "B"]);
//! assert!(parsed.has_flag("verbose"));
//! ```

pub mod error;
pub mod parameter;
pub mod parsed;
pub mod parser;
pub mod rules;

//! Error types for rule registration and argument parsing.
//!
//! The two families are deliberately disjoint. A [`RuleError`] is a defect in
//! the rule set a program declares and should abort program setup; a
//! [`ParseError`] is caused by the tokens an end user typed and carries a
//! message meant to be shown to that user.

use thiserror::Error;

pub type RuleResult<T> = std::result::Result<T, RuleError>;
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// A defect in a declared rule set, reported at registration time.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("parameter name must have a value")]
    EmptyName,

    #[error("parameter `{0}` is already declared")]
    DuplicateName(String),

    #[error("the character '-' is not allowed in parameter name `{0}`")]
    NameWithHyphen(String),

    #[error("whitespace characters are not allowed in parameter name `{0}`")]
    NameWithWhitespace(String),

    #[error("parameter name `{name}` is too long: {length} characters, at most 39 are allowed")]
    NameTooLong { name: String, length: usize },

    #[error("token `{token}` of parameter `{name}` is already taken by parameter `{taken_by}`")]
    TokenTaken {
        token: String,
        name: String,
        taken_by: String,
    },
}

/// A problem with the token sequence an end user supplied, reported at parse
/// time. The engine fails fast: the first violation stops processing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("parameter given twice: {0}")]
    DuplicateParameter(String),

    #[error("parameter {0} needs an argument")]
    MissingArgument(String),

    #[error("missing parameter: {0}")]
    MissingParameter(String),

    #[error("argument {value} for parameter {name} must be an integer")]
    NotAnInteger { name: String, value: String },

    #[error("argument {value} for parameter {name} is less than minimum {min}")]
    BelowMinimum { name: String, value: i64, min: i64 },

    #[error("argument {value} for parameter {name} is greater than maximum {max}")]
    AboveMaximum { name: String, value: i64, max: i64 },

    #[error("argument {value} for parameter {name} is not a valid value, valid values are: {valid}")]
    NotAValidValue {
        name: String,
        value: String,
        valid: String,
    },
}

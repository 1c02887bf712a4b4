//! The queryable result of one parse invocation.
//!
//! [`ParsedArguments`] borrows the immutable [`RuleSet`] it was parsed
//! against and owns the per-invocation state: which parameters were matched
//! and the raw text captured for each. Nothing is written back onto the
//! declarations, so the same rule set can be parsed against again.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::error::{ParseError, ParseResult};
use crate::parameter::Parameter;
use crate::rules::RuleSet;

/// Marker printed by [`ParsedArguments::dump`] in place of a value whose
/// parameter was declared with `hide_value`.
const HIDDEN: &str = "*hidden*";

/// Per-parameter state captured while matching tokens.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParameterState {
    pub(crate) raw: Option<String>,
    pub(crate) parsed: bool,
}

/// Read-only view over the outcome of [`crate::parser::parse`].
///
/// Accessors are keyed by the parameter's long name. Asking for a value with
/// the accessor of the wrong parameter kind (a flag through [`Self::argument`],
/// a value through [`Self::has_flag`], a non-list through [`Self::array`]) is
/// a defect in the calling program, not in user input, and panics
/// immediately.
#[derive(Debug)]
pub struct ParsedArguments<'r> {
    rules: &'r RuleSet,
    args: Vec<String>,
    states: HashMap<String, ParameterState>,
}

impl<'r> ParsedArguments<'r> {
    pub(crate) fn new(
        rules: &'r RuleSet,
        args: Vec<String>,
        states: HashMap<String, ParameterState>,
    ) -> Self {
        Self {
            rules,
            args,
            states,
        }
    }

    /// The token sequence this result was parsed from.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The captured text of a value parameter, or its default when the
    /// parameter is absent or its captured text is empty. `None` when `name`
    /// is unregistered or when neither text nor default exists.
    ///
    /// # Panics
    ///
    /// Panics when `name` resolves to a flag (use [`Self::has_flag`]) or to a
    /// list parameter (use [`Self::array`]).
    pub fn argument(&self, name: &str) -> Option<&str> {
        let parameter = self.rules.get(name)?;
        assert!(
            !parameter.is_flag(),
            "`{name}` is a flag, use has_flag instead of argument"
        );
        assert!(
            !parameter.is_list(),
            "`{name}` is a list parameter, use array instead of argument"
        );
        self.effective_value(parameter)
    }

    /// [`Self::argument`] parsed as an integer. `Ok(None)` when no value is
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotAnInteger`] when a value is present but does
    /// not parse.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Self::argument`].
    pub fn integer_argument(&self, name: &str) -> ParseResult<Option<i64>> {
        let Some(value) = self.argument(name) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|_| ParseError::NotAnInteger {
                name: name.to_string(),
                value: value.to_string(),
            })
    }

    /// Whether the flag's token was present. `false` when `name` is
    /// unregistered.
    ///
    /// # Panics
    ///
    /// Panics when `name` resolves to a non-flag parameter.
    pub fn has_flag(&self, name: &str) -> bool {
        let Some(parameter) = self.rules.get(name) else {
            return false;
        };
        assert!(
            parameter.is_flag(),
            "`{name}` is not a flag, use argument instead of has_flag"
        );
        self.states.get(name).map_or(false, |state| state.parsed)
    }

    /// The elements of a list parameter, in order.
    ///
    /// The effective value (captured text, or the default when the text is
    /// absent or empty) is split on the parameter's list separator; empty
    /// elements between consecutive separators are dropped. Empty when
    /// `name` is unregistered or no effective value exists.
    ///
    /// # Panics
    ///
    /// Panics when `name` resolves to a registered non-list parameter.
    pub fn array(&self, name: &str) -> Vec<String> {
        let Some(parameter) = self.rules.get(name) else {
            return Vec::new();
        };
        assert!(
            parameter.is_list(),
            "`{name}` is not a list parameter, use argument instead of array"
        );
        let Some(value) = self.effective_value(parameter) else {
            return Vec::new();
        };
        value
            .split(parameter.list_separator())
            .filter(|element| !element.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Write a diagnostic report to `out`: the token sequence that was
    /// parsed, then every registered parameter in registration order. Flags
    /// show presence only; `hide_value` parameters show a redaction marker
    /// instead of any value.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sink.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "arguments: {}", self.args.join(" "))?;
        for parameter in self.rules.parameters() {
            let label = match parameter.abbreviation() {
                Some(abbreviation) => format!("{}({})", parameter.name(), abbreviation),
                None => parameter.name().to_string(),
            };
            if parameter.is_flag() {
                let presence = if self.has_flag(parameter.name()) {
                    "present"
                } else {
                    "absent"
                };
                writeln!(out, "flag     : {label} = {presence}")?;
            } else if parameter.hide_value() {
                writeln!(out, "parameter: {label} = {HIDDEN}")?;
            } else if parameter.is_list() {
                writeln!(out, "parameter: {label} = {:?}", self.array(parameter.name()))?;
            } else {
                let value = self.argument(parameter.name()).unwrap_or("");
                writeln!(out, "parameter: {label} = {value}")?;
            }
        }
        Ok(())
    }

    fn effective_value<'a>(&'a self, parameter: &'a Parameter) -> Option<&'a str> {
        match self
            .states
            .get(parameter.name())
            .and_then(|state| state.raw.as_deref())
        {
            Some(raw) if !raw.is_empty() => Some(raw),
            _ => parameter.default_value(),
        }
    }
}

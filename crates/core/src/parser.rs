//! The parse engine: token matching, completeness checking, value validation.
//!
//! [`parse`] walks the token sequence left to right, resolving each token
//! through the rule set's direct lookup, then verifies that every mandatory
//! parameter was seen and that every captured value satisfies its declared
//! constraints. The engine fails fast with a [`ParseError`] describing the
//! first violation.

use std::collections::HashMap;

use log::debug;

use crate::error::{ParseError, ParseResult};
use crate::parameter::Parameter;
use crate::parsed::{ParameterState, ParsedArguments};
use crate::rules::RuleSet;

/// Parse a raw token sequence against a rule set.
///
/// Tokens are matched as the `--name` long form or as a bare abbreviation
/// literal. A matched non-flag parameter consumes the next token as its raw
/// argument, whatever that token looks like. Tokens that match no registered
/// parameter are ignored.
///
/// The rule set is not modified; it can be parsed against again with a
/// different token sequence.
///
/// # Errors
///
/// Returns a [`ParseError`] when a parameter token appears twice, when a
/// non-flag parameter ends the sequence without an argument, when a mandatory
/// parameter is missing, or when a captured value violates its bounds or
/// valid-value constraints.
///
/// # Examples
///
/// ```
/// use argrules_core::parameter::Parameter;
/// use argrules_core::parser::parse;
/// use argrules_core::rules::RuleSet;
///
/// let mut rules = RuleSet::new("demo");
/// rules.insert(Parameter::required("user").abbreviation("u")).unwrap();
/// rules.insert(Parameter::flag("verbose")).unwrap();
///
/// let args: Vec<String> = ["u", "scott", "--verbose"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// let parsed = parse(&rules, &args).unwrap();
/// assert_eq!(parsed.argument("user"), Some("scott"));
/// assert!(parsed.has_flag("verbose"));
/// ```
pub fn parse<'r>(rules: &'r RuleSet, args: &[String]) -> ParseResult<ParsedArguments<'r>> {
    let mut states: HashMap<String, ParameterState> = HashMap::new();

    let mut index = 0;
    while index < args.len() {
        let token = &args[index];
        index += 1;

        // Empty tokens can never name a parameter.
        if token.is_empty() {
            continue;
        }
        let Some(parameter) = rules.lookup_token(token) else {
            debug!("ignoring unmatched token `{token}`");
            continue;
        };

        let state = states.entry(parameter.name().to_string()).or_default();
        if state.parsed {
            return Err(ParseError::DuplicateParameter(token.clone()));
        }

        if !parameter.is_flag() {
            let Some(argument) = args.get(index) else {
                return Err(ParseError::MissingArgument(token.clone()));
            };
            state.raw = Some(argument.clone());
            index += 1;
        }
        state.parsed = true;
    }

    check_mandatory(rules, &states)?;
    check_values(rules, &states)?;

    Ok(ParsedArguments::new(rules, args.to_vec(), states))
}

fn check_mandatory(rules: &RuleSet, states: &HashMap<String, ParameterState>) -> ParseResult<()> {
    for parameter in rules.parameters() {
        if !parameter.is_mandatory() {
            continue;
        }
        let parsed = states
            .get(parameter.name())
            .map_or(false, |state| state.parsed);
        if !parsed {
            return Err(ParseError::MissingParameter(parameter.name().to_string()));
        }
    }
    Ok(())
}

/// Validate captured values. Applies only to parameters that were parsed,
/// are neither flags nor lists, and captured raw text. Bounds and
/// valid-value checks are independent; both run when configured.
fn check_values(rules: &RuleSet, states: &HashMap<String, ParameterState>) -> ParseResult<()> {
    for parameter in rules.parameters() {
        if parameter.is_flag() || parameter.is_list() {
            continue;
        }
        let Some(state) = states.get(parameter.name()) else {
            continue;
        };
        if !state.parsed {
            continue;
        }
        let Some(raw) = state.raw.as_deref() else {
            continue;
        };
        check_bounds(parameter, raw)?;
        check_valid_values(parameter, raw)?;
    }
    Ok(())
}

fn check_bounds(parameter: &Parameter, raw: &str) -> ParseResult<()> {
    if parameter.min_value().is_none() && parameter.max_value().is_none() {
        return Ok(());
    }

    // A configured bound forces the raw text to be an integer.
    let value: i64 = raw.parse().map_err(|_| ParseError::NotAnInteger {
        name: parameter.name().to_string(),
        value: raw.to_string(),
    })?;

    if let Some(min) = parameter.min_value() {
        if value < min {
            return Err(ParseError::BelowMinimum {
                name: parameter.name().to_string(),
                value,
                min,
            });
        }
    }
    if let Some(max) = parameter.max_value() {
        if value > max {
            return Err(ParseError::AboveMaximum {
                name: parameter.name().to_string(),
                value,
                max,
            });
        }
    }
    Ok(())
}

fn check_valid_values(parameter: &Parameter, raw: &str) -> ParseResult<()> {
    let valid = parameter.valid_values();
    if valid.is_empty() || valid.iter().any(|value| value == raw) {
        return Ok(());
    }
    Err(ParseError::NotAValidValue {
        name: parameter.name().to_string(),
        value: raw.to_string(),
        valid: valid.join(","),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::Parameter;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_matches_long_form_and_abbreviation() {
        let mut rules = RuleSet::new("test");
        rules
            .insert(Parameter::required("user").abbreviation("u"))
            .unwrap();
        rules
            .insert(Parameter::required("password").abbreviation("p"))
            .unwrap();

        let parsed = parse(&rules, &tokens(&["--user", "scott", "p", "tiger"])).unwrap();
        assert_eq!(parsed.argument("user"), Some("scott"));
        assert_eq!(parsed.argument("password"), Some("tiger"));
    }

    #[test]
    fn test_parse_rejects_duplicate_parameter() {
        let mut rules = RuleSet::new("test");
        rules
            .insert(Parameter::optional("format", None).abbreviation("f"))
            .unwrap();

        // Long form and abbreviation count as the same parameter.
        let result = parse(&rules, &tokens(&["--format", "csv", "f", "json"]));
        assert!(matches!(result, Err(ParseError::DuplicateParameter(_))));
    }

    #[test]
    fn test_parse_rejects_missing_argument_at_end_of_input() {
        let mut rules = RuleSet::new("test");
        rules.insert(Parameter::optional("format", None)).unwrap();

        let result = parse(&rules, &tokens(&["--format"]));
        assert!(matches!(result, Err(ParseError::MissingArgument(token)) if token == "--format"));
    }

    #[test]
    fn test_parse_rejects_missing_mandatory_parameter() {
        let mut rules = RuleSet::new("test");
        rules.insert(Parameter::required("jdbc")).unwrap();
        rules.insert(Parameter::required("user")).unwrap();

        let result = parse(&rules, &tokens(&["--jdbc", "url"]));
        assert!(matches!(result, Err(ParseError::MissingParameter(name)) if name == "user"));
    }

    #[test]
    fn test_flags_consume_no_argument() {
        let mut rules = RuleSet::new("test");
        rules.insert(Parameter::required("jdbc")).unwrap();
        rules.insert(Parameter::flag("quiet")).unwrap();

        // `--quiet` must not swallow `--jdbc`.
        let parsed = parse(&rules, &tokens(&["--quiet", "--jdbc", "url"])).unwrap();
        assert!(parsed.has_flag("quiet"));
        assert_eq!(parsed.argument("jdbc"), Some("url"));
    }

    #[test]
    fn test_value_parameter_consumes_next_token_verbatim() {
        let mut rules = RuleSet::new("test");
        rules.insert(Parameter::optional("format", None)).unwrap();
        rules.insert(Parameter::flag("quiet")).unwrap();

        // The next token is captured even if it looks like another parameter.
        let parsed = parse(&rules, &tokens(&["--format", "--quiet"])).unwrap();
        assert_eq!(parsed.argument("format"), Some("--quiet"));
        assert!(!parsed.has_flag("quiet"));
    }

    #[test]
    fn test_unmatched_tokens_are_ignored() {
        let mut rules = RuleSet::new("test");
        rules.insert(Parameter::required("user")).unwrap();

        let parsed = parse(
            &rules,
            &tokens(&["stray", "--user", "scott", "", "leftover"]),
        )
        .unwrap();
        assert_eq!(parsed.argument("user"), Some("scott"));
    }

    #[test]
    fn test_bounds_accept_value_inside_range() {
        let mut rules = RuleSet::new("test");
        rules
            .insert(Parameter::required("count").min_value(1).max_value(10))
            .unwrap();

        let parsed = parse(&rules, &tokens(&["--count", "5"])).unwrap();
        assert_eq!(parsed.integer_argument("count").unwrap(), Some(5));
    }

    #[test]
    fn test_bounds_reject_values_outside_range() {
        let mut rules = RuleSet::new("test");
        rules
            .insert(Parameter::required("count").min_value(1).max_value(10))
            .unwrap();

        let low = parse(&rules, &tokens(&["--count", "0"]));
        assert!(matches!(
            low,
            Err(ParseError::BelowMinimum {
                value: 0,
                min: 1,
                ..
            })
        ));

        let high = parse(&rules, &tokens(&["--count", "11"]));
        assert!(matches!(
            high,
            Err(ParseError::AboveMaximum {
                value: 11,
                max: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_bounds_reject_non_integer_text() {
        let mut rules = RuleSet::new("test");
        rules.insert(Parameter::required("count").min_value(1)).unwrap();

        let result = parse(&rules, &tokens(&["--count", "abc"]));
        assert!(matches!(result, Err(ParseError::NotAnInteger { .. })));
    }

    #[test]
    fn test_valid_values_require_exact_match() {
        let mut rules = RuleSet::new("test");
        rules
            .insert(Parameter::required("mode").valid_values(["A", "B"]))
            .unwrap();

        let ok = parse(&rules, &tokens(&["--mode", "A"]));
        assert!(ok.is_ok());

        let err = parse(&rules, &tokens(&["--mode", "C"]));
        match err {
            Err(ParseError::NotAValidValue { value, valid, .. }) => {
                assert_eq!(value, "C");
                assert_eq!(valid, "A,B");
            }
            other => panic!("expected NotAValidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_bounds_and_valid_values_both_apply() {
        let mut rules = RuleSet::new("test");
        rules
            .insert(
                Parameter::required("level")
                    .min_value(0)
                    .max_value(100)
                    .valid_values(["10", "50"]),
            )
            .unwrap();

        // Inside the bounds but not in the value set.
        let result = parse(&rules, &tokens(&["--level", "42"]));
        assert!(matches!(result, Err(ParseError::NotAValidValue { .. })));
    }

    #[test]
    fn test_validation_skips_lists_and_flags() {
        let mut rules = RuleSet::new("test");
        rules
            .insert(Parameter::optional("ports", None).list().min_value(1))
            .unwrap();
        rules.insert(Parameter::flag("quiet")).unwrap();

        // List values are never coerced, so non-integer elements pass.
        let parsed = parse(&rules, &tokens(&["--ports", "a,b", "--quiet"])).unwrap();
        assert_eq!(parsed.array("ports"), ["a", "b"]);
    }

    #[test]
    fn test_rule_set_is_reusable_across_invocations() {
        let mut rules = RuleSet::new("test");
        rules.insert(Parameter::required("user")).unwrap();
        rules.insert(Parameter::flag("quiet")).unwrap();

        let first = parse(&rules, &tokens(&["--user", "scott", "--quiet"])).unwrap();
        assert_eq!(first.argument("user"), Some("scott"));
        assert!(first.has_flag("quiet"));

        let second = parse(&rules, &tokens(&["--user", "tiger"])).unwrap();
        assert_eq!(second.argument("user"), Some("tiger"));
        assert!(!second.has_flag("quiet"));
    }
}

//! Help-text rendering over the public attributes of a rule set.
//!
//! The renderer builds one signature per parameter (`--name`, the
//! abbreviation when present, brackets around optional parameters, and a
//! hint describing the expected argument), measures the longest signature
//! across all registered parameters, and aligns every description to that
//! column.

use std::io::{self, Write};

use argrules_core::parameter::Parameter;
use argrules_core::rules::RuleSet;

/// Spaces between the signature column and the description column.
const COLUMN_GAP: usize = 4;

/// Write usage text for `rules` to `out`.
///
/// `order` lists the parameters to print, by long name; an empty-string
/// entry inserts a blank separator line, and an unknown name prints a
/// placeholder line rather than failing. The rule set's purpose line is
/// printed first when it is non-empty.
///
/// # Errors
///
/// Returns any error raised by the sink.
pub fn print_help<W: Write>(out: &mut W, rules: &RuleSet, order: &[&str]) -> io::Result<()> {
    if !rules.purpose().is_empty() {
        writeln!(out, "{}", rules.purpose())?;
    }

    let width = rules
        .parameters()
        .map(|parameter| signature(parameter).len())
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    for key in order {
        if key.is_empty() {
            writeln!(out)?;
            continue;
        }
        let Some(parameter) = rules.get(key) else {
            writeln!(out, "no parameter found for key={key}")?;
            continue;
        };

        let signature = signature(parameter);
        let description = description_column(parameter);
        if description.is_empty() {
            writeln!(out, "{signature}")?;
        } else {
            writeln!(out, "{signature:<width$}{description}")?;
        }
    }
    Ok(())
}

/// The left-hand column for one parameter, e.g.
/// `[--tablenames|t] <arg1,arg2...>` or `--batchsize <1..10000>`.
fn signature(parameter: &Parameter) -> String {
    let mut signature = String::new();

    if !parameter.is_mandatory() {
        signature.push('[');
    }
    signature.push_str("--");
    signature.push_str(parameter.name());
    if let Some(abbreviation) = parameter.abbreviation() {
        signature.push('|');
        signature.push_str(abbreviation);
    }
    if !parameter.is_mandatory() {
        signature.push(']');
    }

    if parameter.is_list() {
        let separator = parameter.list_separator();
        signature.push_str(&format!(" <arg1{separator}arg2...>"));
    }
    if parameter.min_value().is_some() || parameter.max_value().is_some() {
        let min = parameter
            .min_value()
            .map(|value| value.to_string())
            .unwrap_or_default();
        let max = parameter
            .max_value()
            .map(|value| value.to_string())
            .unwrap_or_default();
        signature.push_str(&format!(" <{min}..{max}>"));
    }
    if !parameter.is_flag()
        && !parameter.is_list()
        && parameter.min_value().is_none()
        && parameter.max_value().is_none()
    {
        signature.push_str(" <arg>");
    }

    signature
}

/// The right-hand column: the description, plus the default for optional
/// non-flag parameters that declare one.
fn description_column(parameter: &Parameter) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(description) = parameter.description() {
        parts.push(description.to_string());
    }
    if !parameter.is_mandatory() && !parameter.is_flag() {
        if let Some(default) = parameter.default_value() {
            parts.push(format!("(default={default})"));
        }
    }
    parts.join(" ")
}

//! `tableexport`: a demonstration program for argrules.
//!
//! Declares the rule set of a small database-export tool, prints its help
//! text, parses the process arguments with the argrules engine, and reports
//! what was captured, including the diagnostic dump with the password
//! redacted.

use std::env;
use std::error::Error;
use std::io::stdout;
use std::process::ExitCode;

use log::debug;

use argrules_cli::help;
use argrules_core::error::RuleResult;
use argrules_core::parameter::Parameter;
use argrules_core::parser::parse;
use argrules_core::rules::RuleSet;

const HELP_ORDER: &[&str] = &[
    "jdbc",
    "user",
    "password",
    "",
    "tablenames",
    "batchsize",
    "format",
    "quiet",
];

fn build_rules() -> RuleResult<RuleSet> {
    let mut rules = RuleSet::new("Exporting database tables to stdout");
    rules.insert(
        Parameter::required("jdbc")
            .abbreviation("j")
            .description("JDBC connection string"),
    )?;
    rules.insert(
        Parameter::required("user")
            .abbreviation("u")
            .description("database username, used during login"),
    )?;
    rules.insert(
        Parameter::required("password")
            .abbreviation("p")
            .hide_value()
            .description("password for the user"),
    )?;
    rules.insert(
        Parameter::optional("tablenames", Some("%"))
            .abbreviation("t")
            .list()
            .description("table names, SQL LIKE expressions are allowed"),
    )?;
    rules.insert(
        Parameter::optional("batchsize", Some("500"))
            .min_value(1)
            .max_value(10_000)
            .description("rows fetched per round trip"),
    )?;
    rules.insert(
        Parameter::optional("format", Some("csv"))
            .valid_values(["csv", "json"])
            .description("output format"),
    )?;
    rules.insert(
        Parameter::flag("quiet")
            .abbreviation("q")
            .description("suppress progress output"),
    )?;
    Ok(rules)
}

fn run() -> Result<(), Box<dyn Error>> {
    let rules = build_rules()?;

    let mut out = stdout();
    help::print_help(&mut out, &rules, HELP_ORDER)?;
    println!();

    let args: Vec<String> = env::args().skip(1).collect();
    debug!("parsing {} tokens", args.len());
    let parsed = parse(&rules, &args)?;

    if !parsed.has_flag("quiet") {
        println!(
            "connecting to {} as {}",
            parsed.argument("jdbc").unwrap_or(""),
            parsed.argument("user").unwrap_or("")
        );
        println!("exporting tables {:?}", parsed.array("tablenames"));
        println!(
            "batch size {}, format {}",
            parsed.integer_argument("batchsize")?.unwrap_or(0),
            parsed.argument("format").unwrap_or("")
        );
    }

    println!();
    parsed.dump(&mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

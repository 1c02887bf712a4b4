//! The declarative registry of accepted parameters.
//!
//! A [`RuleSet`] maps parameter names to their [`Parameter`] declarations and
//! keeps a direct lookup from token literals (`--name` long forms and bare
//! abbreviations) to the owning parameter. All name and token constraints are
//! enforced here, once, at registration time; parsing never revalidates them.
//!
//! Rule sets carry no parse state and may be reused across any number of
//! parse invocations.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::RuleError::{
    DuplicateName, EmptyName, NameTooLong, NameWithHyphen, NameWithWhitespace, TokenTaken,
};
use crate::error::RuleResult;
use crate::parameter::{Parameter, ParameterBuilder};

/// Separator used to split list-valued arguments unless overridden with
/// [`RuleSet::set_list_separator`].
pub const DEFAULT_LIST_SEPARATOR: char = ',';

/// Longest accepted parameter name, in characters.
const MAX_NAME_LENGTH: usize = 39;

/// An ordered registry of parameter declarations.
///
/// # Examples
///
/// ```
/// use argrules_core::parameter::Parameter;
/// use argrules_core::rules::RuleSet;
///
/// let mut rules = RuleSet::new("Exporting database tables to stdout");
/// rules.insert(Parameter::required("jdbc").abbreviation("j")).unwrap();
/// rules.insert(Parameter::flag("quiet").abbreviation("q")).unwrap();
///
/// assert_eq!(rules.len(), 2);
/// assert!(rules.get("jdbc").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    purpose: String,
    parameters: IndexMap<String, Parameter>,
    tokens: HashMap<String, String>,
    list_separator: char,
}

impl RuleSet {
    /// Create an empty rule set. The `purpose` is a one-line description of
    /// the program, consumed by help renderers.
    pub fn new(purpose: impl Into<String>) -> Self {
        Self {
            purpose: purpose.into(),
            parameters: IndexMap::new(),
            tokens: HashMap::new(),
            list_separator: DEFAULT_LIST_SEPARATOR,
        }
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// Change the separator stamped onto list parameters registered from now
    /// on. Parameters already registered keep the separator they were
    /// registered with.
    pub fn set_list_separator(&mut self, separator: char) {
        self.list_separator = separator;
    }

    pub fn list_separator(&self) -> char {
        self.list_separator
    }

    /// Finalize a declaration and register it.
    ///
    /// The name must be non-empty, not already declared, free of `-` and
    /// whitespace, and shorter than 40 characters. The `--name` long form and
    /// the abbreviation (when present) must not collide with any token
    /// already claimed by a registered parameter; colliding abbreviations are
    /// rejected here rather than resolved by registration order at parse
    /// time.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleError`](crate::error::RuleError) naming the first
    /// violated rule. A failed insert leaves the rule set unchanged.
    pub fn insert(&mut self, builder: ParameterBuilder) -> RuleResult<()> {
        let parameter = builder.build(self.list_separator);
        self.check_name(parameter.name())?;

        let mut claims = vec![format!("--{}", parameter.name())];
        if let Some(abbreviation) = parameter.abbreviation() {
            claims.push(abbreviation.to_string());
        }
        for token in &claims {
            if let Some(taken_by) = self.tokens.get(token) {
                return Err(TokenTaken {
                    token: token.clone(),
                    name: parameter.name().to_string(),
                    taken_by: taken_by.clone(),
                });
            }
        }

        let name = parameter.name().to_string();
        for token in claims {
            self.tokens.insert(token, name.clone());
        }
        self.parameters.insert(name, parameter);
        Ok(())
    }

    /// Look up a declaration by its long name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// Resolve a raw command-line token (`--name` or an abbreviation
    /// literal) to the declaration it matches, if any.
    pub fn lookup_token(&self, token: &str) -> Option<&Parameter> {
        self.tokens
            .get(token)
            .and_then(|name| self.parameters.get(name))
    }

    /// All declarations, in registration order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    fn check_name(&self, name: &str) -> RuleResult<()> {
        if name.is_empty() {
            return Err(EmptyName);
        }

        if self.parameters.contains_key(name) {
            return Err(DuplicateName(name.to_string()));
        }

        if name.contains('-') {
            return Err(NameWithHyphen(name.to_string()));
        }

        if name.chars().any(char::is_whitespace) {
            return Err(NameWithWhitespace(name.to_string()));
        }

        let length = name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(NameTooLong {
                name: name.to_string(),
                length,
            });
        }

        Ok(())
    }
}

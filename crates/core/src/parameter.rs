//! Parameter declarations and their builder.
//!
//! A [`Parameter`] is the immutable description of one accepted command-line
//! parameter: how it is matched, whether it is mandatory, how its argument is
//! validated, and how it is presented in help and diagnostics. Declarations
//! carry no per-parse state; the values captured during a parse live on
//! [`crate::parsed::ParsedArguments`].

/// One accepted named parameter.
///
/// Constructed through [`Parameter::required`], [`Parameter::optional`] or
/// [`Parameter::flag`], configured through the returned [`ParameterBuilder`],
/// and finalized by [`crate::rules::RuleSet::insert`]. After registration all
/// attributes are fixed.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    abbreviation: Option<String>,
    mandatory: bool,
    expects_argument: bool,
    default: Option<String>,
    description: Option<String>,
    min_value: Option<i64>,
    max_value: Option<i64>,
    valid_values: Vec<String>,
    is_list: bool,
    list_separator: char,
    hide_value: bool,
}

impl Parameter {
    /// Start declaring a mandatory parameter that takes an argument.
    pub fn required(name: impl Into<String>) -> ParameterBuilder {
        ParameterBuilder::new(name.into(), true, true)
    }

    /// Start declaring an optional parameter that takes an argument.
    ///
    /// The `default` is substituted whenever the parameter is absent from the
    /// token sequence or its captured text is empty.
    pub fn optional(name: impl Into<String>, default: Option<&str>) -> ParameterBuilder {
        let mut builder = ParameterBuilder::new(name.into(), false, true);
        builder.default = default.map(str::to_string);
        builder
    }

    /// Start declaring a flag: a parameter that takes no argument and whose
    /// value is its presence. Flags cannot be mandatory by construction.
    pub fn flag(name: impl Into<String>) -> ParameterBuilder {
        ParameterBuilder::new(name.into(), false, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn expects_argument(&self) -> bool {
        self.expects_argument
    }

    /// A parameter is a flag iff it neither expects an argument nor is
    /// mandatory. Flags never carry bound, list or valid-value semantics.
    pub fn is_flag(&self) -> bool {
        !self.expects_argument && !self.mandatory
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn min_value(&self) -> Option<i64> {
        self.min_value
    }

    pub fn max_value(&self) -> Option<i64> {
        self.max_value
    }

    pub fn valid_values(&self) -> &[String] {
        &self.valid_values
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    /// The separator this parameter splits list arguments on, snapshotted
    /// from the owning rule set at registration time.
    pub fn list_separator(&self) -> char {
        self.list_separator
    }

    pub fn hide_value(&self) -> bool {
        self.hide_value
    }
}

/// Owned builder for a [`Parameter`] declaration.
///
/// Every configuration call consumes and returns the builder, so a
/// declaration reads as one chain:
///
/// ```
/// use argrules_core::parameter::Parameter;
/// use argrules_core::rules::RuleSet;
///
/// let mut rules = RuleSet::new("demo");
/// rules
///     .insert(
///         Parameter::optional("tablenames", Some("%"))
///             .abbreviation("t")
///             .list()
///             .description("table names to export"),
///     )
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct ParameterBuilder {
    name: String,
    abbreviation: Option<String>,
    mandatory: bool,
    expects_argument: bool,
    default: Option<String>,
    description: Option<String>,
    min_value: Option<i64>,
    max_value: Option<i64>,
    valid_values: Vec<String>,
    is_list: bool,
    hide_value: bool,
}

impl ParameterBuilder {
    fn new(name: String, mandatory: bool, expects_argument: bool) -> Self {
        Self {
            name,
            abbreviation: None,
            mandatory,
            expects_argument,
            default: None,
            description: None,
            min_value: None,
            max_value: None,
            valid_values: Vec::new(),
            is_list: false,
            hide_value: false,
        }
    }

    /// Set an alternate token that matches this parameter. The abbreviation
    /// is matched as an exact literal, without any prefix character.
    pub fn abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Require the argument to be an integer of at least `min`.
    pub fn min_value(mut self, min: i64) -> Self {
        self.min_value = Some(min);
        self
    }

    /// Require the argument to be an integer of at most `max`.
    pub fn max_value(mut self, max: i64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Restrict the argument to an exact match against one of `values`.
    pub fn valid_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Treat the single captured argument as a separator-delimited list.
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Mark the value as sensitive: diagnostics print a redaction marker
    /// instead of the captured text. Matching and validation are unaffected.
    pub fn hide_value(mut self) -> Self {
        self.hide_value = true;
        self
    }

    /// Finalize the declaration, stamping the rule set's current list
    /// separator onto it. An empty abbreviation is treated as absent.
    pub(crate) fn build(self, list_separator: char) -> Parameter {
        Parameter {
            name: self.name,
            abbreviation: self.abbreviation.filter(|a| !a.is_empty()),
            mandatory: self.mandatory,
            expects_argument: self.expects_argument,
            default: self.default,
            description: self.description,
            min_value: self.min_value,
            max_value: self.max_value,
            valid_values: self.valid_values,
            is_list: self.is_list,
            list_separator,
            hide_value: self.hide_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_parameter_attributes() {
        let parameter = Parameter::required("jdbc")
            .abbreviation("j")
            .description("connection string")
            .build(',');

        assert_eq!(parameter.name(), "jdbc");
        assert_eq!(parameter.abbreviation(), Some("j"));
        assert_eq!(parameter.description(), Some("connection string"));
        assert!(parameter.is_mandatory());
        assert!(parameter.expects_argument());
        assert!(!parameter.is_flag());
        assert!(!parameter.is_list());
        assert!(!parameter.hide_value());
        assert_eq!(parameter.default_value(), None);
    }

    #[test]
    fn test_optional_parameter_carries_default() {
        let with_default = Parameter::optional("format", Some("csv")).build(',');
        assert_eq!(with_default.default_value(), Some("csv"));
        assert!(!with_default.is_mandatory());
        assert!(with_default.expects_argument());

        let without_default = Parameter::optional("format", None).build(',');
        assert_eq!(without_default.default_value(), None);
    }

    #[test]
    fn test_flag_classification() {
        let flag = Parameter::flag("quiet").build(',');
        assert!(flag.is_flag());
        assert!(!flag.is_mandatory());
        assert!(!flag.expects_argument());

        // Optional value parameters are not flags.
        let optional = Parameter::optional("format", None).build(',');
        assert!(!optional.is_flag());
    }

    #[test]
    fn test_builder_chain_collects_constraints() {
        let parameter = Parameter::required("batchsize")
            .min_value(1)
            .max_value(10_000)
            .valid_values(["100", "500"])
            .hide_value()
            .build(';');

        assert_eq!(parameter.min_value(), Some(1));
        assert_eq!(parameter.max_value(), Some(10_000));
        assert_eq!(parameter.valid_values(), &["100", "500"]);
        assert!(parameter.hide_value());
        assert_eq!(parameter.list_separator(), ';');
    }

    #[test]
    fn test_empty_abbreviation_is_treated_as_absent() {
        let parameter = Parameter::required("jdbc").abbreviation("").build(',');
        assert_eq!(parameter.abbreviation(), None);
    }
}

//! Option values and layered resolution
//!
//! A generator run sees up to three layers of values for every field:
//! - explicit options supplied on the command line
//! - pre-set options (project config file)
//! - answers collected from the interactive question sequence
//!
//! [`Layers::resolve`] merges them into an immutable [`Configuration`] using
//! "first non-empty wins" precedence in that order.

use std::collections::BTreeMap;
use std::fmt;

/// A single resolved option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
}

impl OptionValue {
    /// Empty strings count as "not supplied" during resolution
    pub fn is_empty(&self) -> bool {
        matches!(self, OptionValue::Str(s) if s.is_empty())
    }

    /// Truthiness used when deciding which generated lines to emit
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Str(s) => !s.is_empty(),
            OptionValue::Bool(b) => *b,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            OptionValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Str(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => write!(f, "{}", s),
            OptionValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

/// One layer of named option values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

/// Answers collected from a question sequence share the layer shape
pub type Answers = Options;

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder-style insert that skips `None`
    pub fn with_opt<V: Into<OptionValue>>(mut self, key: &str, value: Option<V>) -> Self {
        self.set_opt(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn set_opt<V: Into<OptionValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.values.remove(key)
    }

    /// Get a non-empty value
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    /// True when the value is present and truthy
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_truthy)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(OptionValue::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v))
    }
}

/// The three sources a generator resolves from, highest precedence first
#[derive(Debug, Clone, Copy)]
pub struct Layers<'a> {
    pub explicit: &'a Options,
    pub preset: &'a Options,
    pub answers: &'a Options,
}

impl<'a> Layers<'a> {
    pub fn new(explicit: &'a Options, preset: &'a Options, answers: &'a Options) -> Self {
        Self {
            explicit,
            preset,
            answers,
        }
    }

    /// First non-empty value for `key`: explicit, then preset, then answer
    pub fn lookup(&self, key: &str) -> Option<&'a OptionValue> {
        self.explicit
            .get(key)
            .or_else(|| self.preset.get(key))
            .or_else(|| self.answers.get(key))
    }

    /// Every key any layer knows about, merged with precedence applied
    pub fn merged(&self) -> Options {
        let mut merged = Options::new();
        for layer in [self.answers, self.preset, self.explicit] {
            for (key, value) in layer.iter() {
                merged.set(key, value.clone());
            }
        }
        merged
    }

    /// Resolve each field exactly once into a frozen configuration
    pub fn resolve(&self, fields: &[&str]) -> Configuration {
        let mut values = Options::new();
        for field in fields {
            if let Some(value) = self.lookup(field) {
                values.set(field, value.clone());
            }
        }
        Configuration { values }
    }
}

/// Fully resolved, read-only configuration for one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    values: Options,
}

impl Configuration {
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.values.str(key)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.values.flag(key)
    }

    pub fn options(&self) -> &Options {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["module", "name", "isolate", "location"];

    #[test]
    fn test_explicit_wins_over_preset_and_answers() {
        let explicit = Options::new().with("module", "consumer");
        let preset = Options::new().with("module", "shared");
        let answers = Options::new().with("module", "typed");

        let config = Layers::new(&explicit, &preset, &answers).resolve(FIELDS);
        assert_eq!(config.str("module"), Some("consumer"));
    }

    #[test]
    fn test_precedence_independent_of_population_order() {
        let mut answers = Options::new();
        answers.set("name", "fromAnswer");
        let mut explicit = Options::new();
        explicit.set("name", "fromFlag");
        let mut preset = Options::new();
        preset.set("name", "fromConfig");

        let config = Layers::new(&explicit, &preset, &answers).resolve(FIELDS);
        assert_eq!(config.str("name"), Some("fromFlag"));
    }

    #[test]
    fn test_preset_wins_over_answers() {
        let explicit = Options::new();
        let preset = Options::new().with("location", "hf.ecu");
        let answers = Options::new().with("location", "other");

        let config = Layers::new(&explicit, &preset, &answers).resolve(FIELDS);
        assert_eq!(config.str("location"), Some("hf.ecu"));
    }

    #[test]
    fn test_empty_string_falls_through() {
        let explicit = Options::new().with("module", "");
        let preset = Options::new();
        let answers = Options::new().with("module", "consumer");

        let config = Layers::new(&explicit, &preset, &answers).resolve(FIELDS);
        assert_eq!(config.str("module"), Some("consumer"));
    }

    #[test]
    fn test_explicit_false_is_a_value() {
        let explicit = Options::new().with("isolate", false);
        let preset = Options::new();
        let answers = Options::new().with("isolate", true);

        let config = Layers::new(&explicit, &preset, &answers).resolve(FIELDS);
        assert_eq!(config.get("isolate"), Some(&OptionValue::Bool(false)));
        assert!(!config.flag("isolate"));
    }

    #[test]
    fn test_missing_everywhere_is_absent() {
        let empty = Options::new();
        let config = Layers::new(&empty, &empty, &empty).resolve(FIELDS);
        assert!(config.get("name").is_none());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let explicit = Options::new().with("module", "consumer");
        let preset = Options::new().with("location", "hf");
        let answers = Options::new().with("name", "supportBox").with("isolate", true);
        let layers = Layers::new(&explicit, &preset, &answers);

        assert_eq!(layers.resolve(FIELDS), layers.resolve(FIELDS));
    }

    #[test]
    fn test_unlisted_fields_are_not_resolved() {
        let explicit = Options::new().with("addRequire", true);
        let empty = Options::new();
        let config = Layers::new(&explicit, &empty, &empty).resolve(FIELDS);
        assert!(config.get("addRequire").is_none());
    }

    #[test]
    fn test_merged_applies_precedence() {
        let explicit = Options::new().with("module", "a");
        let preset = Options::new().with("module", "b").with("location", "x");
        let answers = Options::new().with("name", "n");

        let merged = Layers::new(&explicit, &preset, &answers).merged();
        assert_eq!(merged.str("module"), Some("a"));
        assert_eq!(merged.str("location"), Some("x"));
        assert_eq!(merged.str("name"), Some("n"));
    }
}

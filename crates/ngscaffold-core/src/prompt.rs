//! Declarative question descriptors and the prompt provider interface
//!
//! Generators describe what they want to ask as an ordered list of
//! [`Question`]s. A [`PromptProvider`] walks that list, skipping questions
//! whose value is already known or whose `when` predicate fails, computing
//! defaults from the answers gathered so far.

use crate::error::ScaffoldError;
use crate::options::{Answers, OptionValue, Options};
use anyhow::Result;
use std::collections::BTreeMap;

/// Decides whether a question is asked, given everything known so far
pub type Predicate = fn(&Options) -> bool;

/// Validates raw text input, returning a message on failure
pub type Validator = fn(&str) -> Result<(), String>;

/// Computes a default from everything known so far
pub type DefaultFn = fn(&Options) -> Option<OptionValue>;

/// A selectable entry in a single- or multi-select question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text
    Input,
    /// Yes/no
    Confirm,
    /// Pick exactly one
    Select(&'static [Choice]),
    /// Pick any number; values are concatenated into one string
    MultiSelect(&'static [Choice]),
}

#[derive(Debug, Clone)]
pub struct Question {
    pub key: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    when: Option<Predicate>,
    validate: Option<Validator>,
    default: Option<DefaultFn>,
}

impl Question {
    fn new(key: &'static str, message: &'static str, kind: QuestionKind) -> Self {
        Self {
            key,
            message,
            kind,
            when: None,
            validate: None,
            default: None,
        }
    }

    pub fn input(key: &'static str, message: &'static str) -> Self {
        Self::new(key, message, QuestionKind::Input)
    }

    pub fn confirm(key: &'static str, message: &'static str) -> Self {
        Self::new(key, message, QuestionKind::Confirm)
    }

    pub fn select(key: &'static str, message: &'static str, choices: &'static [Choice]) -> Self {
        Self::new(key, message, QuestionKind::Select(choices))
    }

    pub fn multi_select(
        key: &'static str,
        message: &'static str,
        choices: &'static [Choice],
    ) -> Self {
        Self::new(key, message, QuestionKind::MultiSelect(choices))
    }

    pub fn when(mut self, predicate: Predicate) -> Self {
        self.when = Some(predicate);
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn default(mut self, default: DefaultFn) -> Self {
        self.default = Some(default);
        self
    }

    /// Asked only when nothing supplied a value yet and the predicate holds
    pub fn applies(&self, known: &Options) -> bool {
        !known.contains(self.key) && self.when.map_or(true, |when| when(known))
    }

    pub fn default_for(&self, known: &Options) -> Option<OptionValue> {
        self.default.and_then(|default| default(known))
    }

    pub fn has_validator(&self) -> bool {
        self.validate.is_some()
    }

    /// Run the validator (if any) against the text form of a value
    pub fn check(&self, value: &OptionValue) -> Result<(), String> {
        match (self.validate, value) {
            (Some(validate), OptionValue::Str(text)) => validate(text),
            _ => Ok(()),
        }
    }
}

/// Source of answers for a question sequence
pub trait PromptProvider {
    /// Ask a single question. Implementations re-ask or fail on invalid input;
    /// the returned value has passed [`Question::check`].
    fn ask(&mut self, question: &Question, default: Option<&OptionValue>) -> Result<OptionValue>;

    /// Walk the questions in order, threading answers forward
    fn prompt(&mut self, questions: &[Question], known: &Options) -> Result<Answers> {
        let mut seen = known.clone();
        let mut answers = Answers::new();

        for question in questions {
            if !question.applies(&seen) {
                continue;
            }
            let default = question.default_for(&seen);
            let value = self.ask(question, default.as_ref())?;
            seen.set(question.key, value.clone());
            answers.set(question.key, value);
        }

        Ok(answers)
    }
}

/// Fallback value when a question has no default
fn fallback(question: &Question) -> OptionValue {
    match question.kind {
        QuestionKind::Input => OptionValue::Str(String::new()),
        QuestionKind::Confirm => OptionValue::Bool(false),
        QuestionKind::Select(choices) => {
            OptionValue::Str(choices.first().map(|c| c.value).unwrap_or_default().to_string())
        }
        QuestionKind::MultiSelect(_) => OptionValue::Str(String::new()),
    }
}

fn checked(question: &Question, value: OptionValue) -> Result<OptionValue> {
    question.check(&value).map_err(|message| ScaffoldError::InvalidAnswer {
        field: question.key.to_string(),
        message,
    })?;
    Ok(value)
}

/// Non-interactive provider: every question takes its default
#[derive(Debug, Default)]
pub struct DefaultsProvider;

impl PromptProvider for DefaultsProvider {
    fn ask(&mut self, question: &Question, default: Option<&OptionValue>) -> Result<OptionValue> {
        let value = default.cloned().unwrap_or_else(|| fallback(question));
        checked(question, value)
    }
}

/// Provider answering from a fixed script; unscripted questions take their default
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    script: BTreeMap<&'static str, OptionValue>,
    asked: Vec<&'static str>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, key: &'static str, value: impl Into<OptionValue>) -> Self {
        self.script.insert(key, value.into());
        self
    }

    /// Keys of the questions that were actually asked, in order
    pub fn asked(&self) -> &[&'static str] {
        &self.asked
    }
}

impl PromptProvider for ScriptedProvider {
    fn ask(&mut self, question: &Question, default: Option<&OptionValue>) -> Result<OptionValue> {
        self.asked.push(question.key);
        let value = self
            .script
            .get(question.key)
            .or(default)
            .cloned()
            .unwrap_or_else(|| fallback(question));
        checked(question, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    const CHOICES: &[Choice] = &[Choice::new("URL", "URL"), Choice::new("None", "None")];

    fn questions() -> Vec<Question> {
        vec![
            Question::input("name", "Name?")
                .validate(|s| validate::check(validate::is_state_name(s), "letters only")),
            Question::select("templateType", "Type?", CHOICES),
            Question::input("templateUrl", "Url?")
                .when(|known| known.str("templateType") == Some("URL"))
                .default(|known| known.str("name").map(|n| format!("{}.html", n).into())),
        ]
    }

    #[test]
    fn test_known_keys_are_skipped() {
        let known = Options::new().with("name", "support");
        let mut provider = ScriptedProvider::new().answer("templateType", "None");

        let answers = provider.prompt(&questions(), &known).unwrap();
        assert_eq!(provider.asked(), &["templateType"]);
        assert!(answers.get("name").is_none());
    }

    #[test]
    fn test_predicate_sees_prior_answers() {
        let mut provider = ScriptedProvider::new()
            .answer("name", "support")
            .answer("templateType", "URL");

        let answers = provider.prompt(&questions(), &Options::new()).unwrap();
        assert_eq!(provider.asked(), &["name", "templateType", "templateUrl"]);
        assert_eq!(answers.str("templateUrl"), Some("support.html"));
    }

    #[test]
    fn test_predicate_false_skips_question() {
        let mut provider = ScriptedProvider::new()
            .answer("name", "support")
            .answer("templateType", "None");

        let answers = provider.prompt(&questions(), &Options::new()).unwrap();
        assert!(!provider.asked().contains(&"templateUrl"));
        assert!(answers.get("templateUrl").is_none());
    }

    #[test]
    fn test_invalid_scripted_answer_is_rejected() {
        let mut provider = ScriptedProvider::new().answer("name", "bad-name");
        let err = provider.prompt(&questions(), &Options::new()).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_defaults_provider_uses_defaults_and_fallbacks() {
        let known = Options::new().with("name", "support");
        let answers = DefaultsProvider.prompt(&questions(), &known).unwrap();
        assert_eq!(answers.str("templateType"), Some("URL"));
        assert_eq!(answers.str("templateUrl"), Some("support.html"));
    }

    #[test]
    fn test_defaults_provider_fails_validation_without_value() {
        let err = DefaultsProvider
            .prompt(&questions(), &Options::new())
            .unwrap_err();
        let err = err.downcast::<ScaffoldError>().unwrap();
        assert!(matches!(err, ScaffoldError::InvalidAnswer { ref field, .. } if field == "name"));
    }
}

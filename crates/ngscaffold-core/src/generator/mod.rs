//! Generator pipeline
//!
//! Each generator is a set of explicit stages driven by [`plan`]:
//!
//! 1. `init` - normalize and check the explicit options (fatal on bad input)
//! 2. `questions` - declarative prompts, answered by a [`PromptProvider`]
//! 3. resolve - [`Layers::resolve`] freezes one value per field
//! 4. `emit` - derive destination paths and template variables
//!
//! Rendering and writing happen afterwards in [`crate::render`] and
//! [`crate::writer`], so nothing touches disk until every file is planned.

pub mod directive;
pub mod state;

use crate::error::ScaffoldError;
use crate::options::{Configuration, Layers, Options};
use crate::prompt::{Choice, PromptProvider, Question};
use crate::templates::TemplateId;
use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt;

pub use directive::DirectiveGenerator;
pub use state::StateGenerator;

/// Which kind of component is being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Directive,
    State,
}

impl GeneratorKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            GeneratorKind::Directive => "directive",
            GeneratorKind::State => "state",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Template variables for one output file
pub type Vars = BTreeMap<&'static str, String>;

/// A file to be rendered: destination, template and substitutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Relative, slash-separated destination path
    pub path: String,
    pub template: TemplateId,
    pub vars: Vars,
}

/// Resolved configuration and the files it maps to
#[derive(Debug, Clone)]
pub struct Plan {
    pub kind: GeneratorKind,
    pub config: Configuration,
    pub files: Vec<PlannedFile>,
}

/// The stages a generator supplies to the pipeline
pub trait Generator {
    fn kind(&self) -> GeneratorKind;

    /// Fields resolved into the final configuration
    fn fields(&self) -> &'static [&'static str];

    /// Check and normalize explicitly supplied options before prompting
    fn init(&self, explicit: Options) -> Result<Options>;

    /// Ordered question sequence
    fn questions(&self) -> Vec<Question>;

    /// Map the resolved configuration to output files
    fn emit(&self, config: &Configuration) -> Result<Vec<PlannedFile>>;
}

/// Run init, prompting, resolution and emission for one generator
pub fn plan<G, P>(
    generator: &G,
    explicit: Options,
    preset: &Options,
    prompter: &mut P,
) -> Result<Plan>
where
    G: Generator + ?Sized,
    P: PromptProvider + ?Sized,
{
    let explicit = generator.init(explicit)?;

    let no_answers = Options::new();
    let known = Layers::new(&explicit, preset, &no_answers).merged();
    let answers = prompter.prompt(&generator.questions(), &known)?;

    let config = Layers::new(&explicit, preset, &answers).resolve(generator.fields());
    let files = generator.emit(&config)?;

    Ok(Plan {
        kind: generator.kind(),
        config,
        files,
    })
}

/// Template type choice shared by both generators
pub(crate) fn check_template_type(
    value: Option<&str>,
    allowed: &[Choice],
) -> Result<(), ScaffoldError> {
    match value {
        Some(value) if !allowed.iter().any(|c| c.value == value) => {
            Err(ScaffoldError::InvalidTemplateType {
                value: value.to_string(),
                expected: allowed
                    .iter()
                    .map(|c| c.value)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
        }
        _ => Ok(()),
    }
}

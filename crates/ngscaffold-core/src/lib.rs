//! ngscaffold core - boilerplate generation for AngularJS directives and states
//!
//! This library resolves generator options from command-line flags, project
//! defaults and interactive answers, maps the result to destination paths and
//! renders the files from templates.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for option resolution,
//!   validation and destination paths (`options`, `validate`, `path`)
//! - **Layer 2: Workflow Orchestration** - `Generator` stages driven by
//!   `generator::plan`, declarative `Question`s, rendering and writing
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use ngscaffold_core::{generator, options::Options, prompt::DefaultsProvider};
//! use ngscaffold_core::render::{render_plan, MiniJinjaRenderer};
//! use ngscaffold_core::templates::TemplateSet;
//!
//! let explicit = Options::new()
//!     .with("module", "consumer")
//!     .with("name", "supportBox")
//!     .with("location", "hf.ecu");
//! let plan = generator::plan(
//!     &generator::StateGenerator,
//!     explicit,
//!     &Options::new(),
//!     &mut DefaultsProvider,
//! )?;
//! let files = render_plan(&plan, &MiniJinjaRenderer::new(TemplateSet::embedded()?))?;
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod options;
pub mod path;
pub mod prompt;
pub mod render;
pub mod templates;
pub mod validate;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ProjectConfig;
pub use error::ScaffoldError;
pub use generator::{DirectiveGenerator, Generator, GeneratorKind, Plan, StateGenerator};
pub use options::{Configuration, OptionValue, Options};
pub use path::{build_path, kebab_case};
pub use prompt::{PromptProvider, Question};
pub use templates::{TemplateId, TemplateSet};

#[cfg(feature = "tui")]
pub use tui::run;

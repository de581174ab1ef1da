//! Configuration file utilities

pub mod project;

pub use project::{DirectiveDefaults, ProjectConfig, StateDefaults, CONFIG_ENV, CONFIG_FILE};

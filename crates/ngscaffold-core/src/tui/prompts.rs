//! Charm-style CLI prompts using cliclack

use crate::config::ProjectConfig;
use crate::generator::{self, DirectiveGenerator, Generator, GeneratorKind, StateGenerator};
use crate::options::{OptionValue, Options};
use crate::prompt::{DefaultsProvider, PromptProvider, Question, QuestionKind};
use crate::render::{render_plan, MiniJinjaRenderer, RenderedFile};
use crate::templates::{version, TemplateOrigin, TemplateSet};
use crate::writer::{existing_files, write_files, FsWriter};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Shown when a template set needs a newer CLI
const UPGRADE_COMMAND: &str = "cargo install ng-scaffold --force";

/// CLI arguments for a generator run
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Generator to run; asked interactively when absent
    pub kind: Option<GeneratorKind>,

    /// Options supplied explicitly on the command line
    pub options: Options,

    /// Project root the generated paths are relative to
    pub directory: Option<PathBuf>,

    /// Local template directory instead of the built-in templates
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Print the generated files instead of writing them
    pub dry_run: bool,
}

/// Prompt provider backed by cliclack widgets
#[derive(Debug, Default)]
pub struct CliclackProvider;

impl PromptProvider for CliclackProvider {
    fn ask(&mut self, question: &Question, default: Option<&OptionValue>) -> Result<OptionValue> {
        match question.kind {
            QuestionKind::Input => ask_input(question, default),
            QuestionKind::Confirm => {
                let initial = default.and_then(OptionValue::as_bool).unwrap_or(false);
                let answer: bool = cliclack::confirm(question.message)
                    .initial_value(initial)
                    .interact()?;
                Ok(answer.into())
            }
            QuestionKind::Select(choices) => {
                let mut select = cliclack::select(question.message);
                for choice in choices {
                    select = select.item(choice.value, choice.label, "");
                }
                let initial = default
                    .and_then(OptionValue::as_str)
                    .and_then(|d| choices.iter().find(|c| c.value == d));
                if let Some(choice) = initial {
                    select = select.initial_value(choice.value);
                }
                let answer: &str = select.interact()?;
                Ok(answer.into())
            }
            QuestionKind::MultiSelect(choices) => loop {
                let mut multi = cliclack::multiselect(question.message);
                for choice in choices {
                    multi = multi.item(choice.value, choice.label, "");
                }
                if let Some(d) = default.and_then(OptionValue::as_str) {
                    let initial: Vec<&str> = choices
                        .iter()
                        .filter(|c| d.contains(c.value))
                        .map(|c| c.value)
                        .collect();
                    multi = multi.initial_values(initial);
                }

                let selected: Vec<&str> = multi.required(false).interact()?;
                let answer = OptionValue::from(selected.concat());
                match question.check(&answer) {
                    Ok(()) => break Ok(answer),
                    Err(message) => cliclack::log::error(message)?,
                }
            },
        }
    }
}

fn ask_input(question: &Question, default: Option<&OptionValue>) -> Result<OptionValue> {
    // Emptiness is left to the validator so optional fields can be skipped
    let mut input = cliclack::input(question.message).required(false);
    if let Some(default) = default.and_then(OptionValue::as_str) {
        input = input.default_input(default);
    }
    if question.has_validator() {
        let question = question.clone();
        input = input.validate(move |value: &String| {
            question.check(&OptionValue::from(value.as_str()))
        });
    }

    let answer: String = input.interact()?;
    Ok(answer.into())
}

/// Run a generator with interactive prompts
pub async fn run(args: GenerateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("ng-scaffold")?;

    // Step 1: Pick the generator
    let kind = match args.kind {
        Some(kind) => kind,
        None => select_kind()?,
    };

    // Step 2: Resolve the project directory
    let project_dir = select_directory(&args)?;

    // Step 3: Load project defaults (pre-set options)
    let preset = load_presets(&project_dir, kind)?;

    // Step 4: Setup templates
    let templates = setup_templates(&args.template_dir, cli_version)?;

    // Step 5: Prompt, resolve and plan the output files
    let generator: &dyn Generator = match kind {
        GeneratorKind::Directive => &DirectiveGenerator,
        GeneratorKind::State => &StateGenerator,
    };
    let plan = if args.yes {
        generator::plan(generator, args.options.clone(), &preset, &mut DefaultsProvider)?
    } else {
        generator::plan(generator, args.options.clone(), &preset, &mut CliclackProvider)?
    };

    // Step 6: Render everything before touching the disk
    let rendered = render_plan(&plan, &MiniJinjaRenderer::new(templates))?;

    if args.dry_run {
        print_dry_run(&rendered);
        cliclack::outro(format!(
            "Dry run: {} {} file(s) not written",
            plan.kind,
            rendered.len()
        ))?;
        return Ok(());
    }

    // Step 7: Guard against overwriting
    confirm_overwrite(&project_dir, &rendered, args.yes)?;

    // Step 8: Write files
    write_project(&project_dir, &rendered).await?;

    cliclack::outro(format!(
        "Generated {} {}",
        plan.kind,
        plan.config.str("name").unwrap_or_default()
    ))?;

    Ok(())
}

fn select_kind() -> Result<GeneratorKind> {
    let kind = cliclack::select("What would you like to generate?")
        .item(GeneratorKind::Directive, "Directive", "reusable UI component")
        .item(
            GeneratorKind::State,
            "State",
            "routed view with controller, stylesheet and template",
        )
        .interact()?;
    Ok(kind)
}

fn select_directory(args: &GenerateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }

    Ok(path)
}

fn load_presets(project_dir: &Path, kind: GeneratorKind) -> Result<Options> {
    match ProjectConfig::discover(project_dir)? {
        Some((path, config)) => {
            cliclack::log::info(format!("Using defaults from {}", path.display()))?;
            Ok(config.presets(kind)?)
        }
        None => Ok(Options::new()),
    }
}

fn setup_templates(template_dir: &Option<PathBuf>, cli_version: &str) -> Result<TemplateSet> {
    let templates = TemplateSet::from_config(template_dir.clone())?;

    if let TemplateOrigin::Local(path) = templates.origin() {
        cliclack::log::info(format!(
            "Using local templates from {} ({})",
            path.display(),
            templates.manifest().name
        ))?;
    }

    // Check version compatibility
    if let Some(warning) =
        version::check_compatibility(cli_version, &templates.manifest().version, UPGRADE_COMMAND)
    {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    Ok(templates)
}

fn confirm_overwrite(project_dir: &Path, rendered: &[RenderedFile], yes: bool) -> Result<()> {
    let existing = existing_files(&FsWriter, project_dir, rendered);
    if !existing.is_empty() {
        let listing: Vec<String> = existing.iter().map(|p| p.display().to_string()).collect();
        cliclack::log::warning(format!(
            "{} file(s) already exist:\n{}",
            existing.len(),
            listing.join("\n")
        ))?;
    }

    guard_overwrite(&existing, yes, || {
        Ok(cliclack::confirm("Overwrite existing files?")
            .initial_value(false)
            .interact()?)
    })
}

/// Decide whether existing files may be overwritten. `confirm` is only
/// consulted when something exists and `--yes` wasn't given.
fn guard_overwrite<F>(existing: &[PathBuf], yes: bool, confirm: F) -> Result<()>
where
    F: FnOnce() -> Result<bool>,
{
    // Auto-confirm with --yes flag
    if existing.is_empty() || yes {
        return Ok(());
    }

    if !confirm()? {
        anyhow::bail!("Generation cancelled.");
    }

    Ok(())
}

async fn write_project(project_dir: &Path, rendered: &[RenderedFile]) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Writing files...");

    let written = match write_files(&FsWriter, project_dir, rendered).await {
        Ok(written) => written,
        Err(e) => {
            spinner.stop("Failed to write files");
            return Err(e);
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        project_dir.display()
    ));

    for file in rendered {
        cliclack::log::success(&file.path)?;
    }

    Ok(())
}

fn print_dry_run(rendered: &[RenderedFile]) {
    for file in rendered {
        println!();
        println!("{} {}", "->".blue(), file.path.bold());
        println!("{}", file.contents.dimmed());
    }
}

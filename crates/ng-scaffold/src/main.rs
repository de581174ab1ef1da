//! ng-scaffold - Boilerplate generation for AngularJS directives and states

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use ngscaffold_core::tui::GenerateArgs;
use ngscaffold_core::{GeneratorKind, Options};
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "ng-scaffold")]
#[command(about = "CLI for scaffolding AngularJS directives and states")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a directive
    Directive(DirectiveArgs),
    /// Generate a UI-router state with its controller, stylesheet and view
    State(StateArgs),
}

/// Flags shared by every generator
#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// Project directory the files are generated in (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Local directory to use for templates instead of the built-in ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Print the generated files without writing them
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct DirectiveArgs {
    /// Directive name (e.g. supportBox)
    pub name: Option<String>,

    /// Module the directive registers with
    #[arg(short, long)]
    pub module: Option<String>,

    /// Dotted namespace below common/directive (e.g. hf.ecu)
    #[arg(long)]
    pub location: Option<String>,

    /// Restriction letters from A, E and C (e.g. AE)
    #[arg(short, long)]
    pub restrict: Option<String>,

    /// Template type: URL, Template or None
    #[arg(long = "template-type")]
    pub template_type: Option<String>,

    /// Template URL (implies --template-type URL)
    #[arg(long = "template-url")]
    pub template_url: Option<String>,

    /// Inline template (implies --template-type Template)
    #[arg(long)]
    pub template: Option<String>,

    /// Use an isolated scope
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub isolate: Option<bool>,

    /// Transclude content
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub transclude: Option<bool>,

    /// Generate a link function
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub link: Option<bool>,

    /// Generate a controller function
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub controller: Option<bool>,

    /// Required directives (comma-separated, e.g. ^ngModel,form)
    #[arg(long)]
    pub require: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl From<DirectiveArgs> for GenerateArgs {
    fn from(args: DirectiveArgs) -> Self {
        let options = Options::new()
            .with_opt("name", args.name)
            .with_opt("module", args.module)
            .with_opt("location", args.location)
            .with_opt("restrict", args.restrict)
            .with_opt("templateType", args.template_type)
            .with_opt("templateUrl", args.template_url)
            .with_opt("template", args.template)
            .with_opt("isolate", args.isolate)
            .with_opt("transclude", args.transclude)
            .with_opt("link", args.link)
            .with_opt("controller", args.controller)
            .with_opt("require", args.require);

        generate_args(GeneratorKind::Directive, options, args.output)
    }
}

#[derive(Parser, Debug)]
pub struct StateArgs {
    /// State name (e.g. supportBox); a trailing Ctrl or Controller is dropped
    pub name: Option<String>,

    /// Module the state registers with
    #[arg(short, long)]
    pub module: Option<String>,

    /// Dotted namespace below states (e.g. hf.ecu)
    #[arg(long)]
    pub location: Option<String>,

    /// Route URL (e.g. /support)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Template type: URL, Template, Provider or None
    #[arg(long = "template-type")]
    pub template_type: Option<String>,

    /// Template URL (implies --template-type URL)
    #[arg(long = "template-url")]
    pub template_url: Option<String>,

    /// Inline template (implies --template-type Template)
    #[arg(long)]
    pub template: Option<String>,

    /// Use a template provider (implies --template-type Provider)
    #[arg(long = "template-provider")]
    pub template_provider: bool,

    /// Declare the state abstract
    #[arg(long = "abstract", num_args = 0..=1, default_missing_value = "true")]
    pub is_abstract: Option<bool>,

    /// Controller name (defaults to <name>Controller)
    #[arg(long)]
    pub controller: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl From<StateArgs> for GenerateArgs {
    fn from(args: StateArgs) -> Self {
        let options = Options::new()
            .with_opt("name", args.name)
            .with_opt("module", args.module)
            .with_opt("location", args.location)
            .with_opt("url", args.url)
            .with_opt("templateType", args.template_type)
            .with_opt("templateUrl", args.template_url)
            .with_opt("template", args.template)
            .with_opt("templateProvider", args.template_provider.then_some(true))
            .with_opt("abstract", args.is_abstract)
            .with_opt("controller", args.controller);

        generate_args(GeneratorKind::State, options, args.output)
    }
}

fn generate_args(kind: GeneratorKind, options: Options, output: OutputArgs) -> GenerateArgs {
    GenerateArgs {
        kind: Some(kind),
        options,
        directory: output.directory,
        template_dir: output.template_dir,
        yes: output.yes,
        dry_run: output.dry_run,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let generate_args = match args.command {
        Some(Command::Directive(directive_args)) => directive_args.into(),
        Some(Command::State(state_args)) => state_args.into(),
        // No subcommand provided, ask which generator to run
        None => GenerateArgs::default(),
    };

    let result = ngscaffold_core::run(generate_args, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

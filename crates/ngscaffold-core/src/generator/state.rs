//! State generator: controller script, stylesheet and view template

use super::{check_template_type, Generator, GeneratorKind, PlannedFile, Vars};
use crate::error::ScaffoldError;
use crate::options::{Configuration, OptionValue, Options};
use crate::path::{build_path, kebab_case, STATE_ROOT};
use crate::prompt::{Choice, Question};
use crate::templates::TemplateId;
use crate::validate::{self, check};
use anyhow::Result;

const FIELDS: &[&str] = &[
    "module",
    "name",
    "location",
    "abstract",
    "url",
    "templateType",
    "templateUrl",
    "template",
    "controller",
];

pub const TEMPLATE_TYPES: &[Choice] = &[
    Choice::new("URL", "URL"),
    Choice::new("Template", "Template"),
    Choice::new("Provider", "Provider"),
    Choice::new("None", "None"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct StateGenerator;

/// Drop a trailing `Ctrl` or `Controller` (any case) from a supplied name.
///
/// Both suffixes are checked against the original name, and a name that is
/// exactly the suffix is left alone.
pub fn normalize_name(name: &str) -> &str {
    strip_suffix_ignore_case(name, "ctrl")
        .or_else(|| strip_suffix_ignore_case(name, "controller"))
        .unwrap_or(name)
}

fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    if name.eq_ignore_ascii_case(suffix) {
        return None;
    }
    let split = name.len().checked_sub(suffix.len())?;
    let tail = name.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &name[..split])
}

fn default_controller(name: &str) -> String {
    format!("{}Controller", name)
}

impl Generator for StateGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::State
    }

    fn fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn init(&self, mut explicit: Options) -> Result<Options> {
        if let Some(name) = explicit.str("name") {
            let normalized = normalize_name(name).to_string();
            explicit.set("name", normalized);
        }

        // Template flags imply the template type when it wasn't given
        if !explicit.contains("templateType") {
            let implied = if explicit.flag("templateProvider") {
                Some("Provider")
            } else if explicit.contains("templateUrl") {
                Some("URL")
            } else if explicit.contains("template") {
                Some("Template")
            } else {
                None
            };
            explicit.set_opt("templateType", implied);
        }
        explicit.remove("templateProvider");

        check_template_type(explicit.str("templateType"), TEMPLATE_TYPES)?;
        Ok(explicit)
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question::input("module", "What is the module name (e.g. consumer)").validate(|s| {
                check(
                    validate::is_state_name(s),
                    "Must contain only letters, numbers, and _",
                )
            }),
            Question::confirm("abstract", "Is this state abstract?")
                .default(|_| Some(false.into())),
            Question::input("name", "Enter state name (e.g. supportBox):").validate(|s| {
                check(
                    validate::is_state_name(s),
                    "Must contain only letters, numbers, and _",
                )
            }),
            Question::input("location", "What location would you like? (e.g. _.hf.ecu)").validate(
                |s| {
                    check(
                        s.is_empty() || validate::is_namespace(s),
                        "Must contain lowercase letters, underscore, and period only.",
                    )
                },
            ),
            Question::input("url", "Enter state url (e.g. /help/support.html):"),
            Question::select(
                "templateType",
                "What type of template are you using?",
                TEMPLATE_TYPES,
            )
            .default(|_| Some("URL".into())),
            Question::input(
                "templateUrl",
                "Enter template Url (e.g. /path/to/template/template.html):",
            )
            .when(|known| known.str("templateType") == Some("URL"))
            .default(|known| {
                let name = known.str("name")?;
                Some(build_path(name, ".html", known.str("location"), STATE_ROOT).into())
            }),
            Question::input("template", "Enter template (e.g. <div>My Template</div>):")
                .when(|known| known.str("templateType") == Some("Template"))
                .default(|known| {
                    let name = known.str("name")?;
                    Some(format!("<div id=\"{}\"></div>", kebab_case(name)).into())
                }),
            Question::input("controller", "What is the name of the controller (e.g. support)")
                .default(|known| {
                    known
                        .str("name")
                        .map(|name| OptionValue::from(default_controller(name)))
                })
                .validate(|s| {
                    check(
                        validate::is_state_name(s),
                        "Must contain only letters, numbers, and _",
                    )
                }),
        ]
    }

    fn emit(&self, config: &Configuration) -> Result<Vec<PlannedFile>> {
        let name = config
            .str("name")
            .ok_or(ScaffoldError::MissingField("name"))?;
        let module = config
            .str("module")
            .ok_or(ScaffoldError::MissingField("module"))?;
        let location = config.str("location");
        let kebab = kebab_case(name);

        let state_name = match location {
            Some(location) => format!("{}.{}", location, kebab),
            None => kebab.clone(),
        };
        let controller = config
            .str("controller")
            .map(str::to_string)
            .unwrap_or_else(|| default_controller(name));

        let mut controller_vars = Vars::new();
        controller_vars.insert("module", module.to_string());
        controller_vars.insert("name", name.to_string());
        controller_vars.insert("state_name", state_name);
        controller_vars.insert("state_options", state_options(config).join(",\n"));
        controller_vars.insert("url", config.str("url").unwrap_or_default().to_string());
        controller_vars.insert("controller", controller);

        let mut view_vars = Vars::new();
        view_vars.insert("name", kebab);

        Ok(vec![
            PlannedFile {
                path: build_path(name, "-controller.js", location, STATE_ROOT),
                template: TemplateId::State,
                vars: controller_vars,
            },
            PlannedFile {
                path: build_path(name, ".scss", location, STATE_ROOT),
                template: TemplateId::StateStyle,
                vars: view_vars.clone(),
            },
            PlannedFile {
                path: build_path(name, "-view.html", location, STATE_ROOT),
                template: TemplateId::StateView,
                vars: view_vars,
            },
        ])
    }
}

/// Lines of the state definition options, in their fixed order
pub fn state_options(config: &Configuration) -> Vec<String> {
    let mut lines = Vec::new();

    if config.flag("abstract") {
        lines.push("    abstract: true".to_string());
    }
    if let Some(template_url) = config.str("templateUrl") {
        lines.push(format!("    templateUrl: {}", template_url));
    }
    if config.str("templateType") == Some("Provider") {
        lines.push("    templateProvider: function () {\n    } ".to_string());
    }
    if let Some(template) = config.str("template") {
        lines.push(format!("    template: {}", template));
    }

    lines
}

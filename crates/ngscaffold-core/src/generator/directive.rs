//! Directive generator: one script file with a directive definition object

use super::{check_template_type, Generator, GeneratorKind, PlannedFile, Vars};
use crate::error::ScaffoldError;
use crate::options::{Configuration, Options};
use crate::path::{build_path, DIRECTIVE_ROOT};
use crate::prompt::{Choice, Question};
use crate::templates::TemplateId;
use crate::validate::{self, check};
use anyhow::Result;

const FIELDS: &[&str] = &[
    "module",
    "name",
    "location",
    "restrict",
    "isolate",
    "transclude",
    "templateType",
    "templateUrl",
    "template",
    "link",
    "controller",
    "require",
];

const REQUIRE_MESSAGE: &str = "Must be a comma-separated list of controller names.";

const RESTRICT_CHOICES: &[Choice] = &[
    Choice::new("A", "A - only matches attribute name"),
    Choice::new("E", "E - only matches element name"),
    Choice::new("C", "C - only matches class name"),
];

pub const TEMPLATE_TYPES: &[Choice] = &[
    Choice::new("URL", "URL"),
    Choice::new("Template", "Template"),
    Choice::new("None", "None"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DirectiveGenerator;

impl Generator for DirectiveGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Directive
    }

    fn fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn init(&self, mut explicit: Options) -> Result<Options> {
        if let Some(restrict) = explicit.str("restrict") {
            if !validate::is_restrict(restrict) {
                return Err(ScaffoldError::InvalidRestrict(restrict.to_string()).into());
            }
        }
        if let Some(require) = explicit.str("require") {
            if !validate::is_list_of(require, validate::is_controller_name) {
                return Err(ScaffoldError::InvalidAnswer {
                    field: "require".to_string(),
                    message: REQUIRE_MESSAGE.to_string(),
                }
                .into());
            }
        }

        // Template flags imply the template type when it wasn't given
        if !explicit.contains("templateType") {
            let implied = if explicit.contains("templateUrl") {
                Some("URL")
            } else if explicit.contains("template") {
                Some("Template")
            } else {
                None
            };
            explicit.set_opt("templateType", implied);
        }

        check_template_type(explicit.str("templateType"), TEMPLATE_TYPES)?;
        Ok(explicit)
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question::input("module", "What is the module name (e.g. consumer)").validate(|s| {
                check(validate::is_directive_name(s), "Must contain only letters and _")
            }),
            Question::input("name", "What is the directive's name? (e.g. supportBox)").validate(
                |s| check(validate::is_directive_name(s), "Must contain only letters and _"),
            ),
            Question::input("location", "What location would you like? (e.g. _.hf.ecu)").validate(
                |s| {
                    check(
                        s.is_empty() || validate::is_namespace(s),
                        "Must contain lowercase letters, underscore, and period only.",
                    )
                },
            ),
            Question::multi_select(
                "restrict",
                "What restriction type would you like?",
                RESTRICT_CHOICES,
            )
            .default(|_| Some("A".into()))
            .validate(|s| {
                check(
                    validate::is_restrict(s),
                    "Must contain the values A, E, or C only.",
                )
            }),
            Question::confirm("isolate", "Do you want an isolated scope?")
                .default(|_| Some(true.into())),
            Question::confirm("transclude", "Would you like to transclude?")
                .default(|_| Some(false.into())),
            Question::select(
                "templateType",
                "What type of template are you using?",
                TEMPLATE_TYPES,
            ),
            Question::input(
                "templateUrl",
                "Enter template Url (e.g. /path/to/template/template.html):",
            )
            .when(|known| known.str("templateType") == Some("URL")),
            Question::input(
                "template",
                "Enter template (e.g. <div>My Name Is {{ test }}</div>):",
            )
            .when(|known| known.str("templateType") == Some("Template")),
            Question::confirm("link", "Will you need a link function?")
                .default(|_| Some(true.into())),
            Question::confirm("controller", "Would you like a controller?")
                .when(|known| !known.flag("link"))
                .default(|_| Some(true.into())),
            Question::confirm("addRequire", "Would you like to require other directives?")
                .when(|known| known.flag("link"))
                .default(|_| Some(false.into())),
            Question::input(
                "require",
                "Enter the directives you require? (e.g. ^MyController, MyController2)",
            )
            .when(|known| !known.contains("controller") && known.flag("addRequire"))
            .validate(|s| {
                check(
                    validate::is_list_of(s, validate::is_controller_name),
                    REQUIRE_MESSAGE,
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

        let mut vars = Vars::new();
        vars.insert("module", module.to_string());
        vars.insert("name", name.to_string());
        vars.insert("options", directive_options(config).join(",\n"));

        Ok(vec![PlannedFile {
            path: build_path(name, ".js", config.str("location"), DIRECTIVE_ROOT),
            template: TemplateId::Directive,
            vars,
        }])
    }
}

/// Lines of the directive definition object, in their fixed order
pub fn directive_options(config: &Configuration) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(restrict) = config.str("restrict") {
        lines.push(format!("    restrict: '{}'", restrict));
    }
    if let Some(require) = config.str("require") {
        lines.push(format!(
            "    require: {}",
            require.split(',').collect::<Vec<_>>().join(", ")
        ));
    }
    if config.flag("isolate") {
        lines.push("    scope: {\n\n    }".to_string());
    }
    if let Some(template_url) = config.str("templateUrl") {
        lines.push(format!("    templateUrl: {}", template_url));
    }
    if let Some(template) = config.str("template") {
        lines.push(format!("    template: {}", template));
    }
    if config.flag("transclude") {
        lines.push("    transclude: true".to_string());
    }
    if config.flag("controller") {
        lines.push("    controller: function ($scope, $log) {\n\n    }".to_string());
    }
    if config.flag("link") {
        lines.push("    link: function (scope, element, attr) {\n\n    }".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::plan;
    use crate::options::Layers;
    use crate::prompt::ScriptedProvider;

    fn resolved(explicit: Options) -> Configuration {
        let empty = Options::new();
        Layers::new(&explicit, &empty, &empty).resolve(FIELDS)
    }

    #[test]
    fn test_invalid_explicit_restrict_is_fatal() {
        let explicit = Options::new().with("restrict", "AECD");
        let err = DirectiveGenerator.init(explicit).unwrap_err();
        assert_eq!(
            err.downcast::<ScaffoldError>().unwrap(),
            ScaffoldError::InvalidRestrict("AECD".to_string())
        );
    }

    #[test]
    fn test_valid_explicit_restrict_passes_init() {
        let explicit = Options::new().with("restrict", "AE");
        let checked = DirectiveGenerator.init(explicit.clone()).unwrap();
        assert_eq!(checked, explicit);
    }

    #[test]
    fn test_invalid_explicit_require_is_fatal() {
        let explicit = Options::new()
            .with("module", "consumer")
            .with("name", "box")
            .with("templateType", "None")
            .with("link", true)
            .with("require", "Foo2, bad-name; alert(1)");
        let mut provider = ScriptedProvider::new();
        let err = plan(&DirectiveGenerator, explicit, &Options::new(), &mut provider).unwrap_err();

        assert!(matches!(
            err.downcast::<ScaffoldError>().unwrap(),
            ScaffoldError::InvalidAnswer { ref field, .. } if field == "require"
        ));
        assert!(provider.asked().is_empty());
    }

    #[test]
    fn test_valid_explicit_require_passes_init() {
        let explicit = Options::new().with("require", "^ngModel, form");
        let checked = DirectiveGenerator.init(explicit.clone()).unwrap();
        assert_eq!(checked, explicit);
    }

    #[test]
    fn test_template_flags_imply_template_type() {
        let checked = DirectiveGenerator
            .init(Options::new().with("templateUrl", "'box.html'"))
            .unwrap();
        assert_eq!(checked.str("templateType"), Some("URL"));

        let checked = DirectiveGenerator
            .init(Options::new().with("template", "'<div></div>'"))
            .unwrap();
        assert_eq!(checked.str("templateType"), Some("Template"));

        let checked = DirectiveGenerator
            .init(
                Options::new()
                    .with("templateType", "None")
                    .with("templateUrl", "'box.html'"),
            )
            .unwrap();
        assert_eq!(checked.str("templateType"), Some("None"));
    }

    #[test]
    fn test_template_url_flag_skips_template_questions() {
        let explicit = Options::new()
            .with("module", "consumer")
            .with("name", "box")
            .with("templateUrl", "'box.html'");
        let mut provider = ScriptedProvider::new().answer("templateType", "Template");
        let plan = plan(&DirectiveGenerator, explicit, &Options::new(), &mut provider).unwrap();

        assert!(!provider.asked().contains(&"templateType"));
        assert!(!provider.asked().contains(&"template"));
        assert_eq!(plan.config.str("templateType"), Some("URL"));
        assert!(plan.config.str("template").is_none());
    }

    #[test]
    fn test_invalid_restrict_stops_before_prompting() {
        let explicit = Options::new().with("restrict", "D");
        let mut provider = ScriptedProvider::new();
        let result = plan(&DirectiveGenerator, explicit, &Options::new(), &mut provider);
        assert!(result.is_err());
        assert!(provider.asked().is_empty());
    }

    #[test]
    fn test_unknown_template_type_rejected() {
        let explicit = Options::new().with("templateType", "Provider");
        assert!(DirectiveGenerator.init(explicit).is_err());
    }

    #[test]
    fn test_option_block_order_and_omissions() {
        let config = resolved(
            Options::new()
                .with("restrict", "AE")
                .with("isolate", true)
                .with("link", true),
        );
        let lines = directive_options(&config);
        assert_eq!(
            lines,
            vec![
                "    restrict: 'AE'".to_string(),
                "    scope: {\n\n    }".to_string(),
                "    link: function (scope, element, attr) {\n\n    }".to_string(),
            ]
        );
    }

    #[test]
    fn test_option_block_full() {
        let config = resolved(
            Options::new()
                .with("restrict", "E")
                .with("require", "^Foo,Bar")
                .with("isolate", true)
                .with("templateUrl", "/tpl/box.html")
                .with("template", "<div></div>")
                .with("transclude", true)
                .with("controller", true)
                .with("link", true),
        );
        let lines = directive_options(&config);
        let keys: Vec<&str> = lines
            .iter()
            .map(|l| l.trim_start().split(':').next().unwrap())
            .collect();
        assert_eq!(
            keys,
            vec![
                "restrict",
                "require",
                "scope",
                "templateUrl",
                "template",
                "transclude",
                "controller",
                "link"
            ]
        );
        assert_eq!(lines[1], "    require: ^Foo, Bar");
    }

    #[test]
    fn test_false_flags_contribute_nothing() {
        let config = resolved(
            Options::new()
                .with("isolate", false)
                .with("transclude", false)
                .with("link", false)
                .with("controller", false),
        );
        assert!(directive_options(&config).is_empty());
    }

    #[test]
    fn test_link_skips_controller_question() {
        let mut provider = ScriptedProvider::new()
            .answer("module", "consumer")
            .answer("name", "supportBox")
            .answer("location", "")
            .answer("templateType", "None")
            .answer("link", true);
        let plan = plan(&DirectiveGenerator, Options::new(), &Options::new(), &mut provider)
            .unwrap();

        assert!(!provider.asked().contains(&"controller"));
        assert!(provider.asked().contains(&"addRequire"));
        assert!(!provider.asked().contains(&"require"));
        assert!(plan.config.get("controller").is_none());
        assert!(plan.config.flag("link"));
    }

    #[test]
    fn test_require_collected_when_opted_in() {
        let mut provider = ScriptedProvider::new()
            .answer("module", "consumer")
            .answer("name", "supportBox")
            .answer("location", "hf.ecu")
            .answer("templateType", "None")
            .answer("link", true)
            .answer("addRequire", true)
            .answer("require", "^Foo, Bar");
        let plan = plan(&DirectiveGenerator, Options::new(), &Options::new(), &mut provider)
            .unwrap();

        assert_eq!(plan.config.str("require"), Some("^Foo, Bar"));
        assert!(plan.config.get("addRequire").is_none());
    }

    #[test]
    fn test_invalid_require_rejected() {
        let mut provider = ScriptedProvider::new()
            .answer("module", "consumer")
            .answer("name", "supportBox")
            .answer("templateType", "None")
            .answer("link", true)
            .answer("addRequire", true)
            .answer("require", "Foo2");
        let result = plan(&DirectiveGenerator, Options::new(), &Options::new(), &mut provider);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_link_asks_controller() {
        let mut provider = ScriptedProvider::new()
            .answer("module", "consumer")
            .answer("name", "supportBox")
            .answer("templateType", "Template")
            .answer("template", "<div></div>")
            .answer("link", false);
        let plan = plan(&DirectiveGenerator, Options::new(), &Options::new(), &mut provider)
            .unwrap();

        assert!(provider.asked().contains(&"controller"));
        assert!(!provider.asked().contains(&"addRequire"));
        assert!(!provider.asked().contains(&"templateUrl"));
        assert!(plan.config.flag("controller"));
        assert_eq!(plan.config.str("template"), Some("<div></div>"));
    }

    #[test]
    fn test_explicit_options_skip_questions() {
        let explicit = Options::new()
            .with("module", "consumer")
            .with("name", "supportBox")
            .with("location", "hf.ecu")
            .with("restrict", "E")
            .with("isolate", false)
            .with("transclude", true)
            .with("templateType", "None")
            .with("link", false)
            .with("controller", true);
        let mut provider = ScriptedProvider::new();
        let plan = plan(&DirectiveGenerator, explicit, &Options::new(), &mut provider).unwrap();

        assert!(provider.asked().is_empty());
        assert_eq!(plan.files.len(), 1);
        assert_eq!(plan.files[0].path, "hf/ecu/support-box.js");
        assert_eq!(plan.files[0].template, TemplateId::Directive);
        assert_eq!(
            plan.files[0].vars["options"],
            "    restrict: 'E',\n    transclude: true,\n    controller: function ($scope, $log) {\n\n    }"
        );
    }

    #[test]
    fn test_default_destination_root() {
        let config = resolved(
            Options::new()
                .with("module", "consumer")
                .with("name", "supportBox"),
        );
        let files = DirectiveGenerator.emit(&config).unwrap();
        assert_eq!(files[0].path, "common/directive/support-box.js");
        assert_eq!(files[0].vars["name"], "supportBox");
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let config = resolved(Options::new().with("module", "consumer"));
        let err = DirectiveGenerator.emit(&config).unwrap_err();
        assert_eq!(
            err.downcast::<ScaffoldError>().unwrap(),
            ScaffoldError::MissingField("name")
        );
    }

    #[test]
    fn test_digits_rejected_in_directive_name() {
        let mut provider = ScriptedProvider::new()
            .answer("module", "consumer")
            .answer("name", "my_directive2");
        let result = plan(&DirectiveGenerator, Options::new(), &Options::new(), &mut provider);
        assert!(result.is_err());
    }
}

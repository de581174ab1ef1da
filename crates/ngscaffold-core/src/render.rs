//! Template rendering with minijinja

use crate::generator::{Plan, Vars};
use crate::templates::{TemplateId, TemplateSet};
use anyhow::{Context, Result};
use minijinja::Environment;

/// Turns a template id and its variables into file content
pub trait TemplateRenderer {
    fn render(&self, template: TemplateId, vars: &Vars) -> Result<String>;
}

/// A fully rendered output file, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Relative, slash-separated destination path
    pub path: String,
    pub contents: String,
}

pub struct MiniJinjaRenderer {
    templates: TemplateSet,
}

impl MiniJinjaRenderer {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: TemplateId, vars: &Vars) -> Result<String> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template(template.file_name(), self.templates.source(template))
            .with_context(|| format!("Failed to parse template '{}'", template))?;
        let tmpl = env.get_template(template.file_name())?;
        tmpl.render(vars)
            .with_context(|| format!("Failed to render template '{}'", template))
    }
}

/// Render every planned file. Nothing is written here.
pub fn render_plan<R>(plan: &Plan, renderer: &R) -> Result<Vec<RenderedFile>>
where
    R: TemplateRenderer + ?Sized,
{
    plan.files
        .iter()
        .map(|file| {
            Ok(RenderedFile {
                path: file.path.clone(),
                contents: renderer.render(file.template, &file.vars)?,
            })
        })
        .collect()
}

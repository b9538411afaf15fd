use rust_embed::Embed;
use tera::Tera;

use crate::errors::TemplateError;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Tera instance loaded with the embedded artifact templates.
///
/// A pure consumer: it performs no normalization or derivation of its own.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create an engine with every embedded template registered.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        for file in EmbeddedTemplates::iter() {
            let name = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(name)
                && let Ok(source) = std::str::from_utf8(&content.data)
            {
                tera.add_raw_template(name, source)
                    .map_err(|err| TemplateError::Render {
                        template: name.to_string(),
                        cause: err.to_string(),
                    })?;
            }
        }

        Ok(Self { tera })
    }

    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.tera.get_template_names()
    }

    /// Render the named template, distinguishing a missing template from
    /// one that raised during evaluation.
    pub fn render(&self, template_id: &str, context: &tera::Context) -> Result<String, TemplateError> {
        if !self.tera.get_template_names().any(|name| name == template_id) {
            return Err(TemplateError::NotFound(template_id.to_string()));
        }
        self.tera
            .render(template_id, context)
            .map_err(|err| TemplateError::Render {
                template: template_id.to_string(),
                cause: flatten(err),
            })
    }
}

fn flatten(err: tera::Error) -> String {
    use std::error::Error as _;

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

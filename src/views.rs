pub mod app;
pub mod lifecycle;
pub mod repo;
pub mod repo_list;
pub mod user_header;

use handlebars::{Handlebars, TemplateError};

/// Registers every view template. Strict mode turns a missing field into a
/// render error instead of an empty string.
pub fn create_registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("template", include_str!("templates/template.hbs"))?;
    handlebars.register_template_string("app", include_str!("templates/app.hbs"))?;
    handlebars.register_template_string("loading", include_str!("templates/loading.hbs"))?;
    handlebars.register_template_string("user_header", include_str!("templates/user_header.hbs"))?;
    handlebars.register_template_string("repo_list", include_str!("templates/repo_list.hbs"))?;
    handlebars.register_template_string("repo", include_str!("templates/repo.hbs"))?;
    Ok(handlebars)
}

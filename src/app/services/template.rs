use crate::helpers::collect_files_from_dir;
use crate::Config;
use actix_web::web::Data;
use actix_web::{error, Error};
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::{env, io};

pub struct TemplateService {
    handlebars: Handlebars<'static>,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderError;

impl TemplateService {
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        match is_template(Path::new(name)) {
            true => self.handlebars.render(name, data).map_err(|e| {
                log::error!("TemplateService::render - {name} - {e}");
                RenderError
            }),
            _ => Err(RenderError),
        }
    }

    pub fn render_throw_http<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.render(name, data)
            .map_err(|_| error::ErrorInternalServerError("Template error"))
    }

    /// Registers every template below the configured folder under its
    /// relative path, e.g. `pages/form.hbs`.
    pub fn new_from_files(config: Data<Config>) -> Result<Self, io::Error> {
        let mut dir = env::current_dir()?;
        dir.push(Path::new(&config.get_ref().template.handlebars.folder));
        Self::new_from_dir(&dir)
    }

    pub fn new_from_dir(dir: &Path) -> Result<Self, io::Error> {
        let mut handlebars: Handlebars = Handlebars::new();

        let collect_paths: Vec<PathBuf> = collect_files_from_dir(dir)?;
        let paths: Vec<&PathBuf> = collect_paths.iter().filter(|&p| is_template(p)).collect();

        for path in paths {
            let name = path
                .strip_prefix(dir)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
                .to_string_lossy()
                .replace('\\', "/");

            handlebars
                .register_template_file(name.as_str(), path)
                .map_err(|e| {
                    log::error!("TemplateService::new_from_dir - {name} - {e}");
                    io::Error::new(io::ErrorKind::InvalidData, e.to_string())
                })?;
        }

        handlebars.register_helper("eq", Box::new(eq));

        Ok(TemplateService { handlebars })
    }
}

fn is_template(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("hbs") | Some("handlebars") | Some("html")
    )
}

handlebars_helper!(eq: |*args| args[0].eq(args[1]));

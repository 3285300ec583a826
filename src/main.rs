use actix_web::web::Data;
use actix_web::{middleware, App, HttpServer};
use std::sync::Arc;

mod app;
mod config;
mod errors;
mod helpers;
mod routes;

pub use crate::app::models::*;
pub use crate::app::services::*;
pub use crate::app::validator::ValidationError;
pub use crate::config::*;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = Data::new(Config::new());

    let tmpl_service = Data::new(TemplateService::new_from_files(config.clone())?);
    let log_service = Arc::new(LogService::new());
    let form_service = Data::new(FormService::new(config.form.clone(), log_service));

    let (host, port) = (config.app.host.to_owned(), config.app.port);
    log::info!("Starting profile form on http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(tmpl_service.clone())
            .app_data(form_service.clone())
            .wrap(app::controllers::web::errors::error_handlers())
            .wrap(middleware::Logger::default())
            .configure(routes::register)
    })
    .bind((host, port))?
    .run()
    .await
}

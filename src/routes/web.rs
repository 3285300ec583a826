use actix_web::web;
use crate::app::controllers;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(controllers::web::form::show))
            .route(web::post().to(controllers::web::form::invoke)),
    );
}

pub mod api;
pub mod js;
pub mod web;

pub fn register(cfg: &mut actix_web::web::ServiceConfig) {
    api::register(cfg);
    js::register(cfg);
    web::register(cfg);
}

use actix_web::web;

use crate::app::controllers::api::v1;

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(web::resource("/form/state").route(web::get().to(v1::form::state)))
            .service(web::resource("/form/fields").route(web::post().to(v1::form::update_field)))
            .service(web::resource("/form/hobbies").route(web::post().to(v1::form::toggle_hobby)))
            .service(web::resource("/form/submit").route(web::post().to(v1::form::submit)))
            .service(
                web::resource("/form/notifications/{id}/dismiss")
                    .route(web::post().to(v1::form::dismiss_notification)),
            )
            .service(web::resource("/form/dialog/close").route(web::post().to(v1::form::close_dialog)))
            .service(
                web::resource("/countries/{country}/states").route(web::get().to(v1::form::states)),
            ),
    );
}

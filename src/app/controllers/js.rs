use actix_web::{Error, HttpResponse, Result};

pub async fn form() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok()
        .content_type(mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref())
        .body(RESOURCES_JS_FORM_JS))
}

static RESOURCES_JS_FORM_JS: &str = include_str!("../../../resources/js/form.js");

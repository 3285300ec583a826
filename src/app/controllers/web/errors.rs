use crate::TemplateService;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use serde_json::json;

pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(default_error_handler)
}

pub fn default_error_handler<B>(
    ser_res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>, Error> {
    // split service response into request and response components
    let (req, res) = ser_res.into_parts();

    if let Some(error) = res.error() {
        let url = req.full_url().to_string();
        log::error!("Http error \"{url}\" \"{error}\"");
    }

    let path = req.uri().path();
    let res = if path.starts_with("/js") {
        res.set_body("".to_string())
    } else if path.starts_with("/api") {
        get_error_json_response(res)
    } else {
        get_error_html_response(&req, res)
    };

    // modified bodies need to be boxed and placed in the "right" slot
    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}

fn get_error_json_response<B>(mut response: HttpResponse<B>) -> HttpResponse<String> {
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
    );

    let body = json!({
        "status_code": response.status().as_u16(),
        "error_message": get_error_message(&response),
    });
    response.set_body(body.to_string())
}

fn get_error_html_response<B>(
    request: &HttpRequest,
    mut response: HttpResponse<B>,
) -> HttpResponse<String> {
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(mime::TEXT_HTML_UTF_8.as_ref()),
    );

    let error_message: String = get_error_message(&response);
    let status_code: String = response.status().as_str().to_owned();
    let title = format!("{status_code} - {error_message}");

    let tmpl = request
        .app_data::<web::Data<TemplateService>>()
        .map(|t| t.get_ref());

    let Some(tmpl) = tmpl else {
        return response.set_body(title);
    };

    let context = json!({
        "title": &title,
        "error_message": &error_message,
        "status_code": &status_code,
    });

    let html = tmpl
        .render("pages/error.hbs", &context)
        .unwrap_or_else(|_| title);
    response.set_body(html)
}

fn get_error_message<B>(response: &HttpResponse<B>) -> String {
    let mut error_message: String = response
        .error()
        .map(|e| e.to_string())
        .unwrap_or("".to_string());

    if error_message.is_empty() {
        error_message = response
            .status()
            .canonical_reason()
            .unwrap_or("")
            .to_string();
    }
    error_message
}

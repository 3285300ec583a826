use crate::FormServiceError;
use actix_web::http::StatusCode;
use actix_web::ResponseError;
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone)]
pub struct AppError(pub Option<String>);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if let Some(ref err) = self.0 {
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl From<FormServiceError> for AppError {
    fn from(e: FormServiceError) -> Self {
        Self(Some(e.to_string()))
    }
}

/// Bad client input; rendered by the default error handler.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

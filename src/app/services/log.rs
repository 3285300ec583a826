use crate::FormData;

/// Receives every submitted form before the page resets it.
pub trait SubmissionObserver: Send + Sync {
    fn submitted(&self, data: &FormData);
}

#[derive(Debug, Clone, Default)]
pub struct LogService {}

impl LogService {
    pub fn new() -> Self {
        Self {}
    }

    pub fn info(&self, message: &str) {
        Self::print_info(message);
    }

    pub fn error(&self, message: &str) {
        Self::print_error(message);
    }

    pub fn print_info(message: &str) {
        log::info!("{}", message);
    }

    pub fn print_error(message: &str) {
        log::error!("{}", message);
    }
}

impl SubmissionObserver for LogService {
    fn submitted(&self, data: &FormData) {
        let mut data = data.clone();
        if !data.password.is_empty() {
            data.password = "********".to_string();
        }
        match serde_json::to_string(&data) {
            Ok(json) => self.info(format!("Form submitted: {}", json).as_str()),
            Err(e) => self.error(format!("LogService::submitted - {:}", &e).as_str()),
        }
    }
}

use serde_derive::{Deserialize, Serialize};
use strum_macros::Display;

pub static SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Transient toast shown at the top of the page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub style: String,
    pub content: String,
    #[serde(skip)]
    pub on_dismiss: Option<DismissAction>,
}

impl Notification {
    pub fn new(id: u64, style: String, content: String) -> Self {
        Self {
            id,
            style,
            content,
            on_dismiss: None,
        }
    }
    pub fn success(id: u64, content: String) -> Self {
        Self::new(id, "success".to_string(), content)
    }

    pub fn on_dismiss(mut self, action: DismissAction) -> Self {
        self.on_dismiss = Some(action);
        self
    }
}

/// Runs once, when the toast goes away by timeout or by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DismissAction {
    OpenDialog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_action_is_not_serialized() {
        let n = Notification::success(3, SUBMIT_SUCCESS_MESSAGE.to_string())
            .on_dismiss(DismissAction::OpenDialog);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(
            serde_json::json!({"id": 3, "style": "success", "content": "Form submitted successfully!"}),
            json
        );
    }
}

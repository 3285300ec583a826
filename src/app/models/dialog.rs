use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub visible: bool,
    pub title: String,
    pub body: String,
    pub actions: Vec<DialogButton>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub action: DialogAction,
    pub label: String,
    pub variant: String,
}

/// Every way of leaving the dialog. All of them just hide it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DialogAction {
    Header,
    Close,
    Save,
}

impl Dialog {
    pub fn confirmation() -> Self {
        Self {
            visible: false,
            title: "Modal heading".to_string(),
            body: "Woohoo, your information is safe with us!".to_string(),
            actions: vec![
                DialogButton {
                    action: DialogAction::Close,
                    label: "Close".to_string(),
                    variant: "secondary".to_string(),
                },
                DialogButton {
                    action: DialogAction::Save,
                    label: "Save Changes".to_string(),
                    variant: "primary".to_string(),
                },
            ],
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self, _action: DialogAction) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn every_action_closes() {
        for action in ["header", "close", "save"] {
            let mut dialog = Dialog::confirmation();
            dialog.open();
            dialog.close(DialogAction::from_str(action).unwrap());
            assert!(!dialog.visible);
        }
    }

    #[test]
    fn starts_hidden_with_two_footer_actions() {
        let dialog = Dialog::confirmation();
        assert!(!dialog.visible);
        assert_eq!(2, dialog.actions.len());
    }
}

use crate::app::validator;
use crate::{
    Country, Debouncer, Dialog, DialogAction, DismissAction, ErrorMap, FieldName, FieldUpdate,
    FormConfig, FormData, Hobby, Notification, ParseFieldError, SubmissionObserver,
    SUBMIT_SUCCESS_MESSAGE,
};
use serde_derive::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use strum_macros::{Display, EnumString};
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Everything the page shows for one session.
#[derive(Debug)]
struct FormState {
    data: FormData,
    errors: ErrorMap,
    notifications: Vec<Notification>,
    dialog: Dialog,
    next_notification_id: u64,
    last_sequence: u64,
    auto_close: HashMap<u64, JoinHandle<()>>,
}

impl FormState {
    fn new() -> Self {
        Self {
            data: FormData::empty(),
            errors: ErrorMap::default(),
            notifications: Vec::new(),
            dialog: Dialog::confirmation(),
            next_notification_id: 1,
            last_sequence: 0,
            auto_close: HashMap::new(),
        }
    }

    fn push_notification(&mut self, make: impl FnOnce(u64) -> Notification) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(make(id));
        id
    }

    /// Removes the toast and runs its action. Unknown ids are ignored, which
    /// keeps the action one-shot when the user and the timer both dismiss it.
    fn dismiss(&mut self, id: u64) -> bool {
        if let Some(handle) = self.auto_close.remove(&id) {
            handle.abort();
        }
        let Some(index) = self.notifications.iter().position(|n| n.id == id) else {
            return false;
        };
        let notification = self.notifications.remove(index);
        match notification.on_dismiss {
            Some(DismissAction::OpenDialog) => self.dialog.open(),
            None => {}
        }
        true
    }

    fn validate(&mut self, field: FieldName) {
        if !field.is_validated() {
            return;
        }
        let message = self
            .data
            .text(field)
            .map(|value| validator::field_message(field, value))
            .unwrap_or_default();
        if !message.is_empty() {
            log::debug!("FormService - {} invalid: {}", field, message);
        }
        self.errors.set(field, message);
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub data: FormData,
    pub errors: ErrorMap,
    /// A validation is waiting for the quiet period to end.
    pub validating: bool,
    pub states: Vec<&'static str>,
    pub notifications: Vec<Notification>,
    pub dialog: Dialog,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub data: FormData,
    pub notification_id: u64,
}

pub struct FormService {
    config: FormConfig,
    state: Arc<Mutex<FormState>>,
    debouncer: Debouncer,
    observer: Arc<dyn SubmissionObserver>,
}

impl FormService {
    pub fn new(config: FormConfig, observer: Arc<dyn SubmissionObserver>) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(FormState::new())),
            debouncer: Debouncer::new(),
            observer,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Starts a fresh page session.
    pub fn mount(&self) {
        self.debouncer.cancel();
        let mut state = self.state();
        for (_, handle) in state.auto_close.drain() {
            handle.abort();
        }
        // ids stay unique so a late auto close cannot hit a new toast
        let next_notification_id = state.next_notification_id;
        *state = FormState::new();
        state.next_notification_id = next_notification_id;
    }

    /// Starts a fresh session holding the given values, as a plain form post
    /// does. Nothing changes when one of the updates is rejected.
    pub fn mount_with(
        &self,
        updates: Vec<FieldUpdate>,
        hobbies: Vec<Hobby>,
    ) -> Result<(), FormServiceError> {
        let mut data = FormData::empty();
        for update in updates {
            check_update(&data, &update)?;
            data.apply(update);
        }
        for hobby in hobbies {
            data.toggle_hobby(hobby, true);
        }

        self.mount();
        self.state().data = data;
        Ok(())
    }

    /// Stores the value right away and re-arms the shared validation timer.
    /// When the timer fires it validates the current value of `update`'s field.
    pub fn update_field(&self, update: FieldUpdate) -> Result<(), FormServiceError> {
        self.apply_update(None, update).map(|_| ())
    }

    /// Same as `update_field` for clients that number their edits. An edit
    /// numbered at or below the last applied one arrived late and is dropped;
    /// returns whether it was applied. Numbering restarts on mount.
    pub fn update_field_in_order(
        &self,
        sequence: u64,
        update: FieldUpdate,
    ) -> Result<bool, FormServiceError> {
        self.apply_update(Some(sequence), update)
    }

    fn apply_update(
        &self,
        sequence: Option<u64>,
        update: FieldUpdate,
    ) -> Result<bool, FormServiceError> {
        let field = update.field_name();
        {
            let mut state = self.state();
            if let Some(sequence) = sequence {
                if sequence <= state.last_sequence {
                    log::debug!("FormService - dropped late edit {} of {}", sequence, field);
                    return Ok(false);
                }
            }
            check_update(&state.data, &update)?;
            if let Some(sequence) = sequence {
                state.last_sequence = sequence;
            }
            state.data.apply(update);
        }

        let state = Arc::clone(&self.state);
        self.debouncer.schedule(self.debounce_delay(), move || {
            lock(&state).validate(field);
        });
        Ok(true)
    }

    /// The previously chosen state is kept even if the new country does not have it.
    pub fn select_country(&self, country: Option<Country>) -> Result<(), FormServiceError> {
        self.update_field(FieldUpdate::Country(country))
    }

    pub fn states(&self) -> Vec<&'static str> {
        self.state()
            .data
            .country
            .map(|country| country.states().to_vec())
            .unwrap_or_default()
    }

    pub fn toggle_hobby(&self, hobby: Hobby, selected: bool) {
        self.state().data.toggle_hobby(hobby, selected);
    }

    /// Hands the data to the observer, raises the success toast and resets the
    /// form. The confirmation dialog opens once the toast is dismissed.
    /// Validation messages are neither checked nor cleared.
    pub fn submit(&self) -> Submission {
        let (data, notification_id) = {
            let mut state = self.state();
            let data = std::mem::take(&mut state.data);
            let id = state.push_notification(|id| {
                Notification::success(id, SUBMIT_SUCCESS_MESSAGE.to_string())
                    .on_dismiss(DismissAction::OpenDialog)
            });

            let shared = Arc::clone(&self.state);
            let delay = Duration::from_millis(self.config.toast_auto_close_ms);
            let handle = tokio::spawn(async move {
                sleep(delay).await;
                let mut state = lock(&shared);
                state.auto_close.remove(&id);
                state.dismiss(id);
            });
            state.auto_close.insert(id, handle);
            (data, id)
        };

        self.observer.submitted(&data);
        Submission {
            data,
            notification_id,
        }
    }

    /// Returns false if the toast was already gone.
    pub fn dismiss_notification(&self, id: u64) -> bool {
        self.state().dismiss(id)
    }

    pub fn close_dialog(&self, action: DialogAction) {
        self.state().dialog.close(action);
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let validating = self.debouncer.is_pending();
        let states = self.states();
        let state = self.state();
        FormSnapshot {
            data: state.data.clone(),
            errors: state.errors.clone(),
            validating,
            states,
            notifications: state.notifications.clone(),
            dialog: state.dialog.clone(),
        }
    }

    fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.config.debounce_ms)
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        lock(&self.state)
    }
}

/// A state must belong to the chosen country, and the menstrual cycle
/// date is only taken while gender is female.
fn check_update(data: &FormData, update: &FieldUpdate) -> Result<(), FormServiceError> {
    match update {
        FieldUpdate::State(value) if !value.is_empty() => {
            let known = data
                .country
                .map(|country| country.has_state(value))
                .unwrap_or(false);
            if !known {
                return Err(FormServiceError::UnknownState);
            }
        }
        FieldUpdate::LastMenstrualCycle(Some(_)) if !data.is_female() => {
            return Err(FormServiceError::DatePickerDisabled);
        }
        _ => {}
    }
    Ok(())
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum FormServiceError {
    UnknownField,
    UnknownCountry,
    UnknownGender,
    UnknownHobby,
    UnknownState,
    InvalidDate,
    DatePickerDisabled,
    UnknownDialogAction,
}

impl From<ParseFieldError> for FormServiceError {
    fn from(e: ParseFieldError) -> Self {
        match e {
            ParseFieldError::UnknownCountry => Self::UnknownCountry,
            ParseFieldError::UnknownGender => Self::UnknownGender,
            ParseFieldError::InvalidDate => Self::InvalidDate,
        }
    }
}

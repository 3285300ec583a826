use crate::Country;
use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

pub static DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: Option<NaiveDate>,
    pub country: Option<Country>,
    pub state: String,
    pub gender: Option<Gender>,
    pub last_menstrual_cycle: Option<NaiveDate>,
    pub hobbies: Vec<Hobby>,
}

impl FormData {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Password(v) => self.password = v,
            FieldUpdate::DateOfBirth(v) => self.date_of_birth = v,
            FieldUpdate::Country(v) => self.country = v,
            FieldUpdate::State(v) => self.state = v,
            FieldUpdate::Gender(v) => self.gender = v,
            FieldUpdate::LastMenstrualCycle(v) => self.last_menstrual_cycle = v,
        }
    }

    /// Current text of a validated field, as the debounced validator sees it.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Email => Some(&self.email),
            FieldName::Password => Some(&self.password),
            _ => None,
        }
    }

    /// Adds or removes a hobby. Selecting an already selected hobby changes nothing.
    pub fn toggle_hobby(&mut self, hobby: Hobby, selected: bool) {
        if selected {
            if !self.hobbies.contains(&hobby) {
                self.hobbies.push(hobby);
            }
        } else {
            self.hobbies.retain(|h| *h != hobby);
        }
    }

    pub fn is_female(&self) -> bool {
        self.gender == Some(Gender::Female)
    }
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
pub enum Hobby {
    Reading,
    Sports,
    Coding,
    Music,
    Gaming,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Password,
    DateOfBirth,
    Country,
    State,
    Gender,
    LastMenstrualCycle,
}

impl FieldName {
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::Email | Self::Password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Password(String),
    DateOfBirth(Option<NaiveDate>),
    Country(Option<Country>),
    State(String),
    Gender(Option<Gender>),
    LastMenstrualCycle(Option<NaiveDate>),
}

impl FieldUpdate {
    /// Turns the raw value of a form control into a typed update.
    /// An empty value clears optional fields.
    pub fn parse(field: FieldName, value: &str) -> Result<Self, ParseFieldError> {
        let update = match field {
            FieldName::Name => Self::Name(value.to_string()),
            FieldName::Email => Self::Email(value.to_string()),
            FieldName::Password => Self::Password(value.to_string()),
            FieldName::State => Self::State(value.to_string()),
            FieldName::DateOfBirth => Self::DateOfBirth(parse_date(value)?),
            FieldName::LastMenstrualCycle => Self::LastMenstrualCycle(parse_date(value)?),
            FieldName::Country => Self::Country(match value {
                "" => None,
                v => Some(Country::from_str(v).map_err(|_| ParseFieldError::UnknownCountry)?),
            }),
            FieldName::Gender => Self::Gender(match value {
                "" => None,
                v => Some(Gender::from_str(v).map_err(|_| ParseFieldError::UnknownGender)?),
            }),
        };
        Ok(update)
    }

    pub fn field_name(&self) -> FieldName {
        match self {
            Self::Name(_) => FieldName::Name,
            Self::Email(_) => FieldName::Email,
            Self::Password(_) => FieldName::Password,
            Self::DateOfBirth(_) => FieldName::DateOfBirth,
            Self::Country(_) => FieldName::Country,
            Self::State(_) => FieldName::State,
            Self::Gender(_) => FieldName::Gender,
            Self::LastMenstrualCycle(_) => FieldName::LastMenstrualCycle,
        }
    }
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, ParseFieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ParseFieldError::InvalidDate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseFieldError {
    UnknownCountry,
    UnknownGender,
    InvalidDate,
}

/// Messages left by the debounced validator. Empty string means no error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    pub email: String,
    pub password: String,
}

impl ErrorMap {
    pub fn set(&mut self, field: FieldName, message: String) {
        match field {
            FieldName::Email => self.email = message,
            FieldName::Password => self.password = message,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_hobby_is_idempotent() {
        let mut data = FormData::empty();
        data.toggle_hobby(Hobby::Reading, true);
        data.toggle_hobby(Hobby::Reading, true);
        assert_eq!(vec![Hobby::Reading], data.hobbies);

        data.toggle_hobby(Hobby::Coding, true);
        data.toggle_hobby(Hobby::Reading, false);
        data.toggle_hobby(Hobby::Reading, false);
        assert_eq!(vec![Hobby::Coding], data.hobbies);
    }

    #[test]
    fn text_only_for_validated_fields() {
        let mut data = FormData::empty();
        data.name = "Ada".to_string();
        data.email = "ada@example.com".to_string();
        data.state = "Texas".to_string();
        assert_eq!(Some("ada@example.com"), data.text(FieldName::Email));
        assert_eq!(Some(""), data.text(FieldName::Password));
        assert_eq!(None, data.text(FieldName::Name));
        assert_eq!(None, data.text(FieldName::State));
    }

    #[test]
    fn parse_field_names() {
        assert_eq!(FieldName::DateOfBirth, FieldName::from_str("dateOfBirth").unwrap());
        assert_eq!(
            FieldName::LastMenstrualCycle,
            FieldName::from_str("lastMenstrualCycle").unwrap()
        );
        assert!(FieldName::from_str("hobbies").is_err());
    }

    #[test]
    fn parse_updates() {
        assert_eq!(
            FieldUpdate::Country(Some(Country::Germany)),
            FieldUpdate::parse(FieldName::Country, "Germany").unwrap()
        );
        assert_eq!(
            FieldUpdate::Gender(Some(Gender::Female)),
            FieldUpdate::parse(FieldName::Gender, "female").unwrap()
        );
        assert_eq!(
            FieldUpdate::DateOfBirth(NaiveDate::from_ymd_opt(1990, 5, 17)),
            FieldUpdate::parse(FieldName::DateOfBirth, "1990-05-17").unwrap()
        );
        assert_eq!(
            FieldUpdate::DateOfBirth(None),
            FieldUpdate::parse(FieldName::DateOfBirth, "").unwrap()
        );
        assert_eq!(
            Err(ParseFieldError::InvalidDate),
            FieldUpdate::parse(FieldName::DateOfBirth, "17/05/1990")
        );
        assert_eq!(
            Err(ParseFieldError::UnknownGender),
            FieldUpdate::parse(FieldName::Gender, "other")
        );
    }

    #[test]
    fn serializes_with_page_field_names() {
        let mut data = FormData::empty();
        data.date_of_birth = NaiveDate::from_ymd_opt(2000, 1, 2);
        data.country = Some(Country::UnitedStates);
        data.gender = Some(Gender::Male);
        data.hobbies.push(Hobby::Music);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!("2000-01-02", json["dateOfBirth"]);
        assert_eq!("United States", json["country"]);
        assert_eq!("male", json["gender"]);
        assert_eq!(serde_json::json!(["Music"]), json["hobbies"]);
        assert!(json["lastMenstrualCycle"].is_null());
    }
}

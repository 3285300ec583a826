use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
pub enum Country {
    #[serde(rename = "United States")]
    #[strum(serialize = "United States")]
    UnitedStates,
    Canada,
    Germany,
    India,
    Australia,
}

static UNITED_STATES_STATES: [&str; 4] = ["California", "Texas", "New York", "Florida"];
static CANADA_STATES: [&str; 4] = ["Ontario", "Quebec", "British Columbia", "Alberta"];
static GERMANY_STATES: [&str; 4] = ["Bavaria", "Berlin", "Hamburg", "Saxony"];
static INDIA_STATES: [&str; 4] = ["Maharashtra", "Delhi", "Karnataka", "Tamil Nadu"];
static AUSTRALIA_STATES: [&str; 4] = [
    "New South Wales",
    "Victoria",
    "Queensland",
    "Western Australia",
];

impl Country {
    /// States selectable once this country is chosen.
    pub fn states(&self) -> &'static [&'static str] {
        match self {
            Self::UnitedStates => &UNITED_STATES_STATES,
            Self::Canada => &CANADA_STATES,
            Self::Germany => &GERMANY_STATES,
            Self::India => &INDIA_STATES,
            Self::Australia => &AUSTRALIA_STATES,
        }
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states().contains(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn canada_states() {
        assert_eq!(
            vec!["Ontario", "Quebec", "British Columbia", "Alberta"],
            Country::Canada.states().to_vec()
        );
    }

    #[test]
    fn every_country_has_four_states() {
        assert_eq!(5, Country::iter().count());
        for country in Country::iter() {
            assert_eq!(4, country.states().len(), "{}", country);
        }
    }

    #[test]
    fn from_str_uses_display_names() {
        assert_eq!(Country::UnitedStates, Country::from_str("United States").unwrap());
        assert_eq!("United States", Country::UnitedStates.to_string());
        assert!(Country::from_str("Atlantis").is_err());
    }

    #[test]
    fn has_state() {
        assert!(Country::India.has_state("Delhi"));
        assert!(!Country::India.has_state("Berlin"));
    }
}

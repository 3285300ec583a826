use chrono::{Datelike, Months, NaiveDate};
use serde_derive::Serialize;

pub static DEFAULT_YEAR_ITEMS: u32 = 100;
pub static MAX_YEAR_ITEMS: u32 = 1000;

/// Select based date picker: one dropdown each for year, month and day.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    pub name: String,
    pub placeholder: String,
    pub value: String,
    pub disabled: bool,
    pub required: bool,
    pub years: Vec<PickerOption>,
    pub months: Vec<PickerOption>,
    pub days: Vec<PickerOption>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub value: u32,
    pub label: String,
    pub selected: bool,
}

impl DatePicker {
    /// Years run from `today`'s year back over `year_items` entries, newest first.
    /// A selected date outside that range is added so it stays visible.
    /// Days stop at the length of the selected month.
    pub fn new(
        name: &str,
        placeholder: &str,
        selected: Option<NaiveDate>,
        year_items: u32,
        today: NaiveDate,
    ) -> Self {
        let current_year = today.year();
        let selected_year = selected.map(|d| d.year());

        let mut years: Vec<i32> = (0..year_items.clamp(1, MAX_YEAR_ITEMS) as i32)
            .map(|offset| current_year - offset)
            .collect();
        if let Some(year) = selected_year {
            if !years.contains(&year) {
                years.push(year);
                years.sort_unstable_by(|a, b| b.cmp(a));
            }
        }

        let years = years
            .into_iter()
            .filter(|year| *year > 0)
            .map(|year| PickerOption {
                value: year as u32,
                label: year.to_string(),
                selected: selected_year == Some(year),
            })
            .collect();

        let months = (1..=12)
            .map(|month| PickerOption {
                value: month,
                label: format!("{:02}", month),
                selected: selected.map(|d| d.month()) == Some(month),
            })
            .collect();

        let last_day = selected
            .and_then(|d| days_in_month(d.year(), d.month()))
            .unwrap_or(31);
        let days = (1..=last_day)
            .map(|day| PickerOption {
                value: day,
                label: format!("{:02}", day),
                selected: selected.map(|d| d.day()) == Some(day),
            })
            .collect();

        Self {
            name: name.to_string(),
            placeholder: placeholder.to_string(),
            value: selected
                .map(|d| d.format(crate::DATE_FORMAT).to_string())
                .unwrap_or_default(),
            disabled: false,
            required: false,
            years,
            months,
            days,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Number of days in `month` of `year`, `None` for an impossible month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
        .map(|d| d.day())
}

use crate::errors::AppError;
use crate::{
    days_in_month, Country, DatePicker, FieldName, FieldUpdate, FormConfig, FormService,
    FormServiceError, FormSnapshot, Gender, Hobby, TemplateService,
};
use actix_web::web::{Data, Form};
use actix_web::{Error, HttpResponse, Result};
use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::str::FromStr;
use strum::IntoEnumIterator;

static PAGE_TEMPLATE: &str = "pages/form.hbs";

/// Fields in the order the page applies them, so that a country is known
/// before its state and a gender before the menstrual cycle date.
static FIELD_ORDER: [FieldName; 8] = [
    FieldName::Name,
    FieldName::Email,
    FieldName::Password,
    FieldName::DateOfBirth,
    FieldName::Country,
    FieldName::State,
    FieldName::Gender,
    FieldName::LastMenstrualCycle,
];

pub async fn show(
    form_service: Data<FormService>,
    tmpl_service: Data<TemplateService>,
) -> Result<HttpResponse, Error> {
    let form_service = form_service.get_ref();
    form_service.mount();
    render(form_service, tmpl_service.get_ref())
}

/// Plain form post, used when the page script is not running.
pub async fn invoke(
    data: Form<Vec<(String, String)>>,
    form_service: Data<FormService>,
    tmpl_service: Data<TemplateService>,
) -> Result<HttpResponse, Error> {
    let form_service = form_service.get_ref();
    let data = data.into_inner();
    let values: HashMap<&str, &str> = data
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let mut updates = Vec::with_capacity(FIELD_ORDER.len());
    for field in FIELD_ORDER {
        let name = field.to_string();
        let value = match field {
            FieldName::DateOfBirth | FieldName::LastMenstrualCycle => {
                compose_date(&values, &name)
            }
            _ => values.get(name.as_str()).unwrap_or(&"").to_string(),
        };
        let update =
            FieldUpdate::parse(field, &value).map_err(|e| AppError::from(FormServiceError::from(e)))?;
        updates.push(update);
    }
    let hobbies = data
        .iter()
        .filter(|(key, _)| key == "hobbies")
        .map(|(_, value)| Hobby::from_str(value))
        .collect::<Result<Vec<Hobby>, _>>()
        .map_err(|_| AppError::from(FormServiceError::UnknownHobby))?;

    form_service
        .mount_with(updates, hobbies)
        .map_err(AppError::from)?;
    form_service.submit();
    render(form_service, tmpl_service.get_ref())
}

fn render(form_service: &FormService, tmpl_service: &TemplateService) -> Result<HttpResponse, Error> {
    let ctx = page_context(
        &form_service.snapshot(),
        form_service.config(),
        Local::now().date_naive(),
    );
    let s = tmpl_service.render_throw_http(PAGE_TEMPLATE, &ctx)?;
    Ok(HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8.as_ref())
        .body(s))
}

/// Date pickers post either the full date or its three parts. A day past the
/// end of the month is moved to the last day of that month.
fn compose_date(values: &HashMap<&str, &str>, name: &str) -> String {
    if let Some(value) = values.get(name).filter(|v| !v.is_empty()) {
        return value.to_string();
    }
    let part = |suffix: &str| {
        values
            .get(format!("{name}.{suffix}").as_str())
            .and_then(|v| v.parse::<u32>().ok())
    };
    match (part("year"), part("month"), part("day")) {
        (Some(year), Some(month), Some(day)) => {
            let day = days_in_month(year as i32, month)
                .map(|last| day.min(last))
                .unwrap_or(day);
            format!("{:04}-{:02}-{:02}", year, month, day)
        }
        _ => "".to_string(),
    }
}

pub fn page_context(snapshot: &FormSnapshot, config: &FormConfig, today: NaiveDate) -> Value {
    let data = &snapshot.data;

    let countries: Vec<Value> = Country::iter()
        .map(|country| {
            json!({
                "value": country.to_string(),
                "selected": data.country == Some(country),
            })
        })
        .collect();

    let states: Vec<Value> = snapshot
        .states
        .iter()
        .map(|state| json!({ "value": state, "selected": data.state == *state }))
        .collect();

    let genders: Vec<Value> = Gender::iter()
        .map(|gender| {
            let value = gender.to_string();
            let mut label = value.clone();
            label[..1].make_ascii_uppercase();
            json!({
                "value": value,
                "label": label,
                "checked": data.gender == Some(gender),
            })
        })
        .collect();

    let hobbies: Vec<Value> = Hobby::iter()
        .map(|hobby| {
            json!({
                "value": hobby.to_string(),
                "checked": data.hobbies.contains(&hobby),
            })
        })
        .collect();

    let date_of_birth = DatePicker::new(
        &FieldName::DateOfBirth.to_string(),
        "Select Date of Birth",
        data.date_of_birth,
        config.date_picker_years,
        today,
    )
    .required(true);

    let last_menstrual_cycle = DatePicker::new(
        &FieldName::LastMenstrualCycle.to_string(),
        "Last Menstrual Cycle",
        data.last_menstrual_cycle,
        config.date_picker_years,
        today,
    )
    .disabled(!data.is_female());

    json!({
        "title": "Form and Modal",
        "debounce_ms": config.debounce_ms,
        "form": {
            "action": "/",
            "method": "post",
            "name": data.name,
            "email": data.email,
            "password": data.password,
            "countries": countries,
            "show_states": data.country.is_some(),
            "states": states,
            "genders": genders,
            "hobbies": hobbies,
            "date_of_birth": date_of_birth,
            "last_menstrual_cycle": last_menstrual_cycle,
            "errors": snapshot.errors,
        },
        "notifications": snapshot.notifications,
        "dialog": snapshot.dialog,
    })
}

use crate::errors::AppError;
use crate::{
    Country, DialogAction, FieldName, FieldUpdate, FormService, FormServiceError, FormSnapshot,
    Hobby, Submission,
};
use actix_web::web::{Data, Json, Path};
use actix_web::{Error, HttpResponse, Result};
use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Deserialize, Debug)]
pub struct FieldData {
    pub name: String,
    pub value: String,
    /// Edit number from the page script; late edits are dropped.
    #[serde(default)]
    pub seq: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct HobbyData {
    pub hobby: String,
    pub checked: bool,
}

#[derive(Deserialize, Debug)]
pub struct DialogData {
    pub action: String,
}

#[derive(Serialize, Debug)]
pub struct SubmitResponse {
    pub submission: Submission,
    pub snapshot: FormSnapshot,
}

#[derive(Serialize, Debug)]
pub struct DismissResponse {
    pub dismissed: bool,
    pub snapshot: FormSnapshot,
}

pub async fn state(form_service: Data<FormService>) -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().json(form_service.get_ref().snapshot()))
}

pub async fn update_field(
    data: Json<FieldData>,
    form_service: Data<FormService>,
) -> Result<HttpResponse, Error> {
    let form_service = form_service.get_ref();
    let field = FieldName::from_str(&data.name)
        .map_err(|_| AppError::from(FormServiceError::UnknownField))?;
    let update = FieldUpdate::parse(field, &data.value)
        .map_err(|e| AppError::from(FormServiceError::from(e)))?;

    match data.seq {
        Some(seq) => {
            form_service
                .update_field_in_order(seq, update)
                .map_err(AppError::from)?;
        }
        None => form_service.update_field(update).map_err(AppError::from)?,
    }
    Ok(HttpResponse::Ok().json(form_service.snapshot()))
}

pub async fn toggle_hobby(
    data: Json<HobbyData>,
    form_service: Data<FormService>,
) -> Result<HttpResponse, Error> {
    let form_service = form_service.get_ref();
    let hobby = Hobby::from_str(&data.hobby)
        .map_err(|_| AppError::from(FormServiceError::UnknownHobby))?;

    form_service.toggle_hobby(hobby, data.checked);
    Ok(HttpResponse::Ok().json(form_service.snapshot()))
}

pub async fn states(country: Path<String>) -> Result<HttpResponse, Error> {
    let country = Country::from_str(&country)
        .map_err(|_| AppError::from(FormServiceError::UnknownCountry))?;
    Ok(HttpResponse::Ok().json(country.states()))
}

pub async fn submit(form_service: Data<FormService>) -> Result<HttpResponse, Error> {
    let form_service = form_service.get_ref();
    let submission = form_service.submit();
    Ok(HttpResponse::Ok().json(SubmitResponse {
        submission,
        snapshot: form_service.snapshot(),
    }))
}

pub async fn dismiss_notification(
    id: Path<u64>,
    form_service: Data<FormService>,
) -> Result<HttpResponse, Error> {
    let form_service = form_service.get_ref();
    let dismissed = form_service.dismiss_notification(id.into_inner());
    Ok(HttpResponse::Ok().json(DismissResponse {
        dismissed,
        snapshot: form_service.snapshot(),
    }))
}

pub async fn close_dialog(
    data: Json<DialogData>,
    form_service: Data<FormService>,
) -> Result<HttpResponse, Error> {
    let form_service = form_service.get_ref();
    let action = DialogAction::from_str(&data.action)
        .map_err(|_| AppError::from(FormServiceError::UnknownDialogAction))?;

    form_service.close_dialog(action);
    Ok(HttpResponse::Ok().json(form_service.snapshot()))
}

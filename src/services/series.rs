//! Series services - Handler HTTP per il CRUD delle serie

use crate::core::{AppError, AppState, FLASH_SUCCESS, Session};
use crate::dtos::{DeleteSeriesQuery, SeriesFormDTO};
use crate::entities::{Series, SeriesRef};
use crate::repositories::{Delete, Persist, Read, ReadAll};
use crate::views;
use axum::{
    Extension, Form,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub const SERIES_INDEX: &str = "/series";

lazy_static! {
    // solo cifre, come il vincolo sulla route di cancellazione
    static ref NUMERIC_ID: Regex = Regex::new(r"^[0-9]+$").expect("valid id pattern");
}

/// Un id che non rispetta il pattern equivale a una route inesistente
fn parse_numeric_id(raw: &str) -> Result<i32, AppError> {
    if !NUMERIC_ID.is_match(raw) {
        warn!("Rejected non numeric id {:?}", raw);
        return Err(AppError::not_found("Resource not found"));
    }
    raw.parse::<i32>()
        .map_err(|_| AppError::not_found("Resource not found"))
}

#[instrument(skip(state, session))]
pub async fn list_series(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let series_list = state.series.find_all().await?;
    let flashes = state.flash.take_and_clear(&session, FLASH_SUCCESS);
    debug!("Rendering {} series, {} flash messages", series_list.len(), flashes.len());
    Ok(views::series_index(&series_list, &flashes))
}

pub async fn show_create_form() -> Html<String> {
    views::series_form(None)
}

#[instrument(skip(state, session, form))]
pub async fn create_series(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Form(form): Form<SeriesFormDTO>,
) -> Result<Redirect, AppError> {
    // nessuna validazione: un nome mancante diventa stringa vuota
    let mut series = Series::from(form);
    let mut uow = state.series.begin();
    uow.save(&mut series, true).await?;

    info!("Series {:?} created", series.id());
    state.flash.set(
        &session,
        FLASH_SUCCESS,
        format!("Série \"{}\" incluída com sucesso.", series.name()),
    );
    Ok(Redirect::to(SERIES_INDEX))
}

#[instrument(skip(state, session))]
pub async fn delete_series(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_numeric_id(&id)?;
    state.series.delete(&id).await?;

    info!("Series {} removed", id);
    state
        .flash
        .set(&session, FLASH_SUCCESS, "Série removida com sucesso.");
    Ok(Redirect::to(SERIES_INDEX))
}

/// Variante `POST /series/delete?id=...`: cancella tramite riferimento parziale
#[instrument(skip(state, session))]
pub async fn delete_series_by_query(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(query): Query<DeleteSeriesQuery>,
) -> Result<Redirect, AppError> {
    let mut uow = state.series.begin();
    uow.remove(SeriesRef::new(query.id), true).await?;

    info!("Series {} removed", query.id);
    state
        .flash
        .set(&session, FLASH_SUCCESS, "Série removida com sucesso.");
    Ok(Redirect::to(SERIES_INDEX))
}

#[instrument(skip(state))]
pub async fn show_edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_numeric_id(&id)?;
    let series = state
        .series
        .read(&id)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Series not found").with_details(format!("No series with id {}", id))
        })?;

    Ok(views::series_form(Some(&series)))
}

#[instrument(skip(state, session, form))]
pub async fn update_series(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Form(form): Form<SeriesFormDTO>,
) -> Result<Redirect, AppError> {
    let id = parse_numeric_id(&id)?;
    let mut uow = state.series.begin();
    let mut series = uow
        .find(&id)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Series not found").with_details(format!("No series with id {}", id))
        })?;

    series.set_name(form.name_or_empty());
    uow.save(&mut series, false).await?;
    uow.flush().await?;

    info!("Series {} updated", id);
    state.flash.set(
        &session,
        FLASH_SUCCESS,
        format!("Série {} editada com sucesso", series.name()),
    );
    Ok(Redirect::to(SERIES_INDEX))
}

//! Generic CRUD handlers, instantiated once per record kind in the route table.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::db::Record;
use crate::error::PayrollError;
use crate::middleware::record_body::RecordBody;
use crate::router::PayrollState;
use crate::types::hal::{CollectionModel, EntityModel, Hal};

/// GET /{items}
pub async fn all<R: Record>(
    State(state): State<PayrollState>,
) -> Result<Hal<CollectionModel<R>>, PayrollError> {
    let records = state.storage.list::<R>().await?;
    debug!(kind = R::KIND, count = records.len(), "listing records");
    Ok(Hal(state.mapper.to_collection(records)))
}

/// POST /{items} -> 201 with `Location` pointing at the new record.
pub async fn create<R: Record>(
    State(state): State<PayrollState>,
    RecordBody(record): RecordBody<R>,
) -> Result<Response, PayrollError> {
    let saved = state.storage.create(record).await?;
    info!(kind = R::KIND, id = saved.id(), "record created");
    Ok(created(state.mapper.to_model(saved)))
}

/// GET /{items}/{id}
pub async fn one<R: Record>(
    State(state): State<PayrollState>,
    Path(id): Path<i64>,
) -> Result<Hal<EntityModel<R>>, PayrollError> {
    let record = state.storage.get::<R>(id).await?;
    Ok(Hal(state.mapper.to_model(record)))
}

/// PUT /{items}/{id} -> replaces the record, or creates it under the path id.
/// Both outcomes answer 201.
pub async fn replace<R: Record>(
    State(state): State<PayrollState>,
    Path(id): Path<i64>,
    RecordBody(record): RecordBody<R>,
) -> Result<Response, PayrollError> {
    let saved = state.storage.update(id, record).await?;
    info!(kind = R::KIND, id, "record stored");
    Ok(created(state.mapper.to_model(saved)))
}

/// DELETE /{items}/{id} -> 204 whether or not the record existed.
pub async fn remove<R: Record>(
    State(state): State<PayrollState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PayrollError> {
    let removed = state.storage.delete::<R>(id).await?;
    info!(kind = R::KIND, id, removed, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn created<R: Record>(model: EntityModel<R>) -> Response {
    let location = model.self_href().unwrap_or_default().to_string();
    (StatusCode::CREATED, [(header::LOCATION, location)], Hal(model)).into_response()
}

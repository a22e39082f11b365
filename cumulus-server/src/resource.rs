use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use cumulus::resource::{ResourceRecord, ResourceRequest, STATUS_RUNNING};
use tracing::{debug, info};

use crate::{reject, AppState, Rejection};

fn not_found() -> Rejection {
    reject(
        StatusCode::NOT_FOUND,
        "RESOURCE_NOT_FOUND",
        "Requested resource does not exist!",
    )
}

pub async fn post_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ResourceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ResourceRecord>), Rejection> {
    state.authorize(&headers)?;

    let Json(req) = body.map_err(|err| {
        debug!(%err, "malformed resource request");
        reject(
            StatusCode::BAD_REQUEST,
            "INVALID_REQUEST",
            "Request body is not a valid resource!",
        )
    })?;

    let Some(name) = req.name.filter(|name| !name.is_empty()) else {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "INVALID_NAME",
            "Resource name must be present and non-empty!",
        ));
    };

    if req.kind.is_empty() {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "INVALID_REQUEST",
            "Resource type must be present and non-empty!",
        ));
    }

    let record = ResourceRecord {
        id: state.next_id(),
        status: STATUS_RUNNING.to_string(),
        name: Some(name),
        kind: Some(req.kind),
        region: req.region,
    };

    info!(id = %record.id, "created resource");
    state
        .resources()
        .insert(record.id.clone(), record.clone());

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ResourceRecord>, Rejection> {
    state.authorize(&headers)?;

    let Some(record) = state.resources().get(&id).cloned() else {
        return Err(not_found());
    };

    Ok(Json(record))
}

pub async fn delete_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, Rejection> {
    state.authorize(&headers)?;

    if state.resources().remove(&id).is_none() {
        return Err(not_found());
    }

    state.record_deletion();
    info!(%id, "deleted resource");

    Ok(StatusCode::NO_CONTENT)
}

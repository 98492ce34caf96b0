use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{OutcomeChange, WagerPatch},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use stakebook_core::{
    wagers::{NewWager, Wager, WagerWriteResult},
    OwnerContext,
};

async fn create_wager(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
    Json(new_wager): Json<NewWager>,
) -> ApiResult<(StatusCode, Json<WagerWriteResult>)> {
    let result = state.wager_service.create_wager(&ctx, new_wager).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

async fn get_wager(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<Json<Wager>> {
    let wager = state.wager_service.get_wager(&ctx, &id)?;
    Ok(Json(wager))
}

async fn update_wager(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
    Json(patch): Json<WagerPatch>,
) -> ApiResult<Json<WagerWriteResult>> {
    let result = state
        .wager_service
        .update_wager(&ctx, patch.into_update(id))
        .await?;
    Ok(Json(result))
}

async fn update_wager_outcome(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
    Json(change): Json<OutcomeChange>,
) -> ApiResult<Json<WagerWriteResult>> {
    let result = state
        .wager_service
        .update_wager_outcome(&ctx, &id, change.outcome)
        .await?;
    Ok(Json(result))
}

async fn delete_wager(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<Json<WagerWriteResult>> {
    let result = state.wager_service.delete_wager(&ctx, &id).await?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wagers", post(create_wager))
        .route(
            "/wagers/{id}",
            get(get_wager).patch(update_wager).delete(delete_wager),
        )
        .route("/wagers/{id}/outcome", put(update_wager_outcome))
}

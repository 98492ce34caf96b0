use std::str::FromStr;
use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{HistoryParams, ReconcileResponse, RenameBankroll, StatsParams},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use stakebook_core::{
    bankrolls::{Bankroll, BankrollUpdate, NewBankroll},
    ledger::BalanceCheck,
    queries::{DailyStats, HistoryPage, OutcomeFilter},
    wagers::parse_settlement_date,
    OwnerContext,
};

async fn list_bankrolls(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<Json<Vec<Bankroll>>> {
    let bankrolls = state.bankroll_service.list_bankrolls(&ctx)?;
    Ok(Json(bankrolls))
}

async fn create_bankroll(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
    Json(new_bankroll): Json<NewBankroll>,
) -> ApiResult<(StatusCode, Json<Bankroll>)> {
    let bankroll = state
        .bankroll_service
        .create_bankroll(&ctx, new_bankroll)
        .await?;
    Ok((StatusCode::CREATED, Json(bankroll)))
}

async fn get_bankroll(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<Json<Bankroll>> {
    let bankroll = state.bankroll_service.get_bankroll(&ctx, &id)?;
    Ok(Json(bankroll))
}

async fn rename_bankroll(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
    Json(body): Json<RenameBankroll>,
) -> ApiResult<Json<Bankroll>> {
    let update = BankrollUpdate {
        id,
        name: body.name,
    };
    let bankroll = state.bankroll_service.rename_bankroll(&ctx, update).await?;
    Ok(Json(bankroll))
}

async fn delete_bankroll(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<StatusCode> {
    state.bankroll_service.delete_bankroll(&ctx, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn reconcile_bankroll(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<Json<ReconcileResponse>> {
    let current_balance = state.ledger_service.reconcile_bankroll(&ctx, &id).await?;
    Ok(Json(ReconcileResponse {
        bankroll_id: id,
        current_balance,
    }))
}

async fn verify_bankroll(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<Json<BalanceCheck>> {
    let check = state.ledger_service.verify_bankroll(&ctx, &id)?;
    Ok(Json(check))
}

async fn daily_stats(
    Path(id): Path<String>,
    Query(params): Query<StatsParams>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<Json<DailyStats>> {
    let date = parse_settlement_date(&params.date)?;
    let stats = state.query_service.daily_stats(&ctx, &id, date)?;
    Ok(Json(stats))
}

async fn wager_history(
    Path(id): Path<String>,
    Query(params): Query<HistoryParams>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<OwnerContext>,
) -> ApiResult<Json<HistoryPage>> {
    let filter = match params.outcome.as_deref() {
        Some(raw) => OutcomeFilter::from_str(raw)?,
        None => OutcomeFilter::All,
    };
    let page = match params.page.as_deref() {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::BadRequest(format!("Invalid page '{}'", raw)))?,
        None => 1,
    };
    let history = state.query_service.history_page(&ctx, &id, filter, page)?;
    Ok(Json(history))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bankrolls", get(list_bankrolls).post(create_bankroll))
        .route(
            "/bankrolls/{id}",
            get(get_bankroll)
                .patch(rename_bankroll)
                .delete(delete_bankroll),
        )
        .route("/bankrolls/{id}/reconcile", post(reconcile_bankroll))
        .route("/bankrolls/{id}/verify", get(verify_bankroll))
        .route("/bankrolls/{id}/stats", get(daily_stats))
        .route("/bankrolls/{id}/wagers", get(wager_history))
}

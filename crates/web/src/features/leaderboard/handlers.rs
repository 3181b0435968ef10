use axum::{
    Json,
    extract::{Query, State},
};
use storage::dto::{
    common::PaginationParams,
    leaderboard::{CompetitionInfoResponse, LeaderboardEntry, LeaderboardResponse},
};
use validator::Validate;

use crate::{error::WebResult, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(PaginationParams),
    responses(
        (status = 200, description = "Leaderboard for the competition window, highest score first", body = LeaderboardResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 503, description = "Contribution store unavailable")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> WebResult<Json<LeaderboardResponse>> {
    params.validate()?;

    let ranking = services::get_leaderboard(state.db.pool(), &state.window).await?;
    let total_items = ranking.len() as u64;

    let data = params
        .slice(ranking)
        .into_iter()
        .map(LeaderboardEntry::from)
        .collect();

    Ok(Json(LeaderboardResponse::new(
        data,
        params.page,
        params.page_size,
        total_items,
    )))
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/competition",
    responses(
        (status = 200, description = "Competition dates and prize information", body = CompetitionInfoResponse)
    ),
    tag = "leaderboard"
)]
pub async fn get_competition_info(State(state): State<AppState>) -> Json<CompetitionInfoResponse> {
    Json(services::competition_info(&state.window))
}

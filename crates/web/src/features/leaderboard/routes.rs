use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::{get_competition_info, get_leaderboard};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/competition", get(get_competition_info))
}

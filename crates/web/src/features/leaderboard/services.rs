use sqlx::PgPool;
use storage::{
    dto::leaderboard::CompetitionInfoResponse,
    error::Result,
    models::{
        CompetitionWindow, RankedEntry,
        competition_window::{COMPETITION_END_DATE_KEY, COMPETITION_START_DATE_KEY},
    },
    repository::leaderboard::LeaderboardRepository,
    services::leaderboard::compute_ranking,
};

use crate::config::Config;

use super::content;

/// Resolve the competition window from configuration, once at startup
pub fn resolve_competition_window(config: &Config) -> CompetitionWindow {
    for key in [COMPETITION_START_DATE_KEY, COMPETITION_END_DATE_KEY] {
        if config.competition_date(key).is_none() {
            tracing::info!("{} not configured, using default", key);
        }
    }

    let window = CompetitionWindow::resolve(|key| config.competition_date(key));

    if !window.is_ordered() {
        tracing::warn!(
            "Competition starts on {} after it ends on {}; the leaderboard will be empty",
            window.start_date,
            window.end_date
        );
    }

    window
}

/// Rank every contributor with activity inside the window
pub async fn get_leaderboard(pool: &PgPool, window: &CompetitionWindow) -> Result<Vec<RankedEntry>> {
    let repo = LeaderboardRepository::new(pool);
    let records = repo
        .get_leaderboard_counts(window.start_date, window.end_date)
        .await?;

    tracing::debug!(
        "Fetched {} contributors between {} and {}",
        records.len(),
        window.start_date,
        window.end_date
    );

    Ok(compute_ranking(records))
}

/// Competition dates and prize announcement
pub fn competition_info(window: &CompetitionWindow) -> CompetitionInfoResponse {
    CompetitionInfoResponse::new(window, content::prize_info(window))
}

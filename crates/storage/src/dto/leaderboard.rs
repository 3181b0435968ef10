use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{CompetitionWindow, RankedEntry};

use super::common::PaginationMeta;

/// Column headers of the leaderboard table, in display order.
pub const LEADERBOARD_COLUMNS: [&str; 4] = ["Nickname", "Annotations", "Evaluations", "Score"];

/// One row of the displayed leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    /// Row index, first place is 1
    pub rank: usize,
    pub nickname: String,
    pub annotations: u32,
    pub evaluations: u32,
    pub score: u64,
}

impl From<RankedEntry> for LeaderboardEntry {
    fn from(entry: RankedEntry) -> Self {
        Self {
            rank: entry.rank,
            nickname: entry.display_nickname().to_string(),
            annotations: entry.annotation_count,
            evaluations: entry.evaluation_count,
            score: entry.score,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub columns: Vec<String>,
    pub data: Vec<LeaderboardEntry>,
    pub pagination: PaginationMeta,
}

impl LeaderboardResponse {
    pub fn new(data: Vec<LeaderboardEntry>, page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            columns: LEADERBOARD_COLUMNS.iter().map(|c| c.to_string()).collect(),
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

/// Competition dates together with the prize announcement shown under the table.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompetitionInfoResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub claim_deadline: NaiveDate,
    /// Markdown text with the dates already substituted
    pub prize_info: String,
}

impl CompetitionInfoResponse {
    pub fn new(window: &CompetitionWindow, prize_info: String) -> Self {
        Self {
            start_date: window.start_date,
            end_date: window.end_date,
            claim_deadline: window.claim_deadline,
            prize_info,
        }
    }
}

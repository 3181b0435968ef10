/// Shown in place of a nickname the contributor never set.
pub const ANONYMOUS_NICKNAME: &str = "Anonymous user";

/// A contributor placed on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// 1-based position in score order
    pub rank: usize,
    pub nickname: Option<String>,
    pub annotation_count: u32,
    pub evaluation_count: u32,
    pub score: u64,
}

impl RankedEntry {
    pub fn display_nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or(ANONYMOUS_NICKNAME)
    }
}

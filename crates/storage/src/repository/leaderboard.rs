use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::error::{Result, StorageError};
use crate::models::ContributorRecord;

#[derive(Debug, FromRow)]
struct ContributorRow {
    nickname: Option<String>,
    annotation_count: i64,
    evaluation_count: i64,
}

impl TryFrom<ContributorRow> for ContributorRecord {
    type Error = StorageError;

    fn try_from(row: ContributorRow) -> Result<Self> {
        Ok(Self {
            annotation_count: count_from_row("annotation_count", row.annotation_count)?,
            evaluation_count: count_from_row("evaluation_count", row.evaluation_count)?,
            nickname: row.nickname,
        })
    }
}

fn count_from_row(column: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        StorageError::MalformedRow(format!("{} out of range: {}", column, value))
    })
}

pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Per-user annotation and evaluation totals for contributions created
    /// between `start_date` and `end_date`, both days included.
    ///
    /// Users without any contribution in the window are left out. Rows come
    /// back in user sign-up order, which is the order ties keep on the
    /// leaderboard.
    pub async fn get_leaderboard_counts(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ContributorRecord>> {
        let rows: Vec<ContributorRow> = sqlx::query_as(
            r#"
            WITH annotation_counts AS (
                SELECT user_id, COUNT(*) AS annotation_count
                FROM annotations
                WHERE created_at::date BETWEEN $1 AND $2
                GROUP BY user_id
            ),
            evaluation_counts AS (
                SELECT user_id, COUNT(*) AS evaluation_count
                FROM evaluations
                WHERE created_at::date BETWEEN $1 AND $2
                GROUP BY user_id
            )
            SELECT
                u.nickname,
                COALESCE(ac.annotation_count, 0) AS annotation_count,
                COALESCE(ec.evaluation_count, 0) AS evaluation_count
            FROM users u
            LEFT JOIN annotation_counts ac ON ac.user_id = u.user_id
            LEFT JOIN evaluation_counts ec ON ec.user_id = u.user_id
            WHERE ac.user_id IS NOT NULL OR ec.user_id IS NOT NULL
            ORDER BY u.created_at, u.user_id
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ContributorRecord::try_from).collect()
    }
}

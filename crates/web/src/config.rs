use anyhow::{Context, Result};
use chrono::NaiveDate;
use storage::models::competition_window::{COMPETITION_END_DATE_KEY, COMPETITION_START_DATE_KEY};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub competition_start_date: Option<NaiveDate>,
    pub competition_end_date: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            competition_start_date: parse_optional_date(
                "COMPETITION_START_DATE",
                std::env::var("COMPETITION_START_DATE").ok(),
            )?,
            competition_end_date: parse_optional_date(
                "COMPETITION_END_DATE",
                std::env::var("COMPETITION_END_DATE").ok(),
            )?,
        })
    }

    /// Answers a competition date key, `None` when it was not configured.
    pub fn competition_date(&self, key: &str) -> Option<NaiveDate> {
        match key {
            COMPETITION_START_DATE_KEY => self.competition_start_date,
            COMPETITION_END_DATE_KEY => self.competition_end_date,
            _ => None,
        }
    }
}

/// Parses a `YYYY-MM-DD` value. Unset and blank values both mean "not configured".
fn parse_optional_date(name: &str, value: Option<String>) -> Result<Option<NaiveDate>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("{} must be a date formatted as YYYY-MM-DD", name)),
    }
}

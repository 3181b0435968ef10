use chrono::{Days, NaiveDate};

/// Configuration key holding the first day of the competition.
pub const COMPETITION_START_DATE_KEY: &str = "competition_start_date";
/// Configuration key holding the last day of the competition.
pub const COMPETITION_END_DATE_KEY: &str = "competition_end_date";

pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2022, 11, 23) {
    Some(date) => date,
    None => panic!("invalid default start date"),
};

pub const DEFAULT_END_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 31) {
    Some(date) => date,
    None => panic!("invalid default end date"),
};

/// Winners have four weeks after the end of the competition to claim a prize.
pub const CLAIM_PERIOD_DAYS: u64 = 28;

/// Date range during which contributions count toward the prizes.
///
/// Resolved once when the service starts and shared read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitionWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub claim_deadline: NaiveDate,
}

impl CompetitionWindow {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let claim_deadline = end_date
            .checked_add_days(Days::new(CLAIM_PERIOD_DAYS))
            .unwrap_or(NaiveDate::MAX);

        Self {
            start_date,
            end_date,
            claim_deadline,
        }
    }

    /// Builds the window from a configuration lookup, falling back to the
    /// default dates for any key the lookup cannot answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use storage::models::CompetitionWindow;
    ///
    /// let window = CompetitionWindow::resolve(|_| None);
    ///
    /// assert_eq!(window.start_date, NaiveDate::from_ymd_opt(2022, 11, 23).unwrap());
    /// assert_eq!(window.claim_deadline, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    /// ```
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<NaiveDate>,
    {
        let start_date = lookup(COMPETITION_START_DATE_KEY).unwrap_or(DEFAULT_START_DATE);
        let end_date = lookup(COMPETITION_END_DATE_KEY).unwrap_or(DEFAULT_END_DATE);

        Self::new(start_date, end_date)
    }

    pub fn is_ordered(&self) -> bool {
        self.start_date <= self.end_date
    }
}

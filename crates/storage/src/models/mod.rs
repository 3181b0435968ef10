pub mod competition_window;
pub mod contributor;
pub mod ranked_entry;

pub use competition_window::CompetitionWindow;
pub use contributor::ContributorRecord;
pub use ranked_entry::RankedEntry;

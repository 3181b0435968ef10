use storage::{Database, models::CompetitionWindow};

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub window: CompetitionWindow,
}

impl AppState {
    pub fn new(db: Database, window: CompetitionWindow) -> Self {
        Self { db, window }
    }
}

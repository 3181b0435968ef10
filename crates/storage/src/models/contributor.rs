/// Contribution totals for one user inside a competition window.
///
/// Users who never picked a nickname have `nickname == None`; the record keeps
/// that absence as-is so scoring never depends on the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorRecord {
    pub nickname: Option<String>,
    pub annotation_count: u32,
    pub evaluation_count: u32,
}

impl ContributorRecord {
    pub fn new(nickname: Option<&str>, annotation_count: u32, evaluation_count: u32) -> Self {
        Self {
            nickname: nickname.map(String::from),
            annotation_count,
            evaluation_count,
        }
    }
}

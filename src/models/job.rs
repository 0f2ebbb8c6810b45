use serde::{Deserialize, Serialize};

/// Normalized job record shared by every provider.
///
/// One record is built per raw listing and never touched again. Fields that
/// mirror a raw listing attribute default to an empty string when the
/// provider's response omits them; `city` and `state` are derived from the
/// free-text location and stay unset when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    /// Location exactly as the provider supplied it.
    pub location: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: String,
    pub longitude: String,
    /// Posting date as supplied, deliberately not parsed.
    pub date_posted: String,
    pub description: String,
    pub url: String,
    /// Label of the provider this record came from.
    pub source: String,
    /// Keyword of the search that produced this record.
    pub query: String,
}

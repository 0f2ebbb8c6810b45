//! Normalized job-search client: each provider builds its own request URL
//! and maps its API's listings into the shared [`Job`] record.

pub mod config;
pub mod error;
pub mod models;
pub mod net;
pub mod providers;

pub use error::ProviderError;
pub use models::job::Job;
pub use providers::{JobProvider, SearchParams, get_provider};

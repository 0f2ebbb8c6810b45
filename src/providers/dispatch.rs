use reqwest::Client;
use serde_json::Value;

use crate::error::ProviderError;
use crate::models::job::Job;
use crate::providers::{JobProvider, ResponseFormat};

/// Shared request cycle used by every provider: one request, one decoded
/// body, one normalized record per listing, in response order.
///
/// Transport failures and non-2xx statuses are surfaced untouched; there
/// is no retry here.
pub async fn fetch_jobs<P>(client: &Client, provider: &P) -> Result<Vec<Job>, ProviderError>
where
    P: JobProvider + ?Sized,
{
    let url = provider.url();
    tracing::debug!("Requesting '{}' listings from {url}", provider.source());

    let resp = client.request(provider.verb(), url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status));
    }

    let body: Value = match provider.format() {
        ResponseFormat::Json => resp.json().await?,
    };

    let listings = body
        .get(provider.listings_path())
        .and_then(Value::as_array)
        .ok_or(ProviderError::MissingListings(provider.listings_path()))?;

    let jobs: Vec<Job> = listings
        .iter()
        .map(|raw| provider.parse_listing(raw))
        .collect();

    tracing::info!("Mapped {} listings from '{}'", jobs.len(), provider.source());
    Ok(jobs)
}

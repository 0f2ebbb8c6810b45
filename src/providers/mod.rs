// Provider module: one implementation per job-search API, all returning
// the shared normalized Job record.

use std::collections::HashMap;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use serde_json::Value;

use crate::error::ProviderError;
use crate::models::job::Job;

pub mod dispatch;
pub mod simplyhired;

pub use dispatch::fetch_jobs;

/// Characters percent-encoded in parameter values: everything outside
/// A-Z a-z 0-9 - _ . ! ~ * ' ( ), so a space becomes `%20` and a comma
/// `%2C`. Both the positional and the conventional query family use this
/// set.
const URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one parameter value.
pub(crate) fn urlencoded(value: &str) -> String {
    utf8_percent_encode(value, URL_ENCODE_SET).to_string()
}

/// Search parameters a caller configures before one request cycle.
///
/// Every field is optional and unset by default. `None` means "omit from
/// the query"; an empty string is a real value and still emitted.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Keyword or phrase to search for.
    pub keyword: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Preformatted location; wins over `city`/`state` when set.
    pub location: Option<String>,
    /// Listings per page.
    pub count: Option<u32>,
    pub page: Option<u32>,
    /// API key issued by the provider.
    pub developer_key: Option<String>,
    /// Client address reported to the provider. When unset, the local
    /// host's address is resolved on every read.
    pub ip_address: Option<String>,
    /// Provider-specific tuning knobs, passed through untouched.
    pub search_style: Option<String>,
    pub config_flag: Option<String>,
    /// Requested length of the description fragment in results.
    pub description_frag: Option<u32>,
}

impl SearchParams {
    /// Effective location: the preformatted string when present, otherwise
    /// combined from whichever of city and state are set.
    pub fn location(&self) -> Option<String> {
        if self.location.is_some() {
            return self.location.clone();
        }
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            (Some(city), None) => Some(city.clone()),
            (None, Some(state)) => Some(state.clone()),
            (None, None) => None,
        }
    }

    /// Effective client address: the explicit override when present,
    /// otherwise the local host's address, re-resolved on each call.
    pub fn ip_address(&self) -> Option<String> {
        self.ip_address.clone().or_else(crate::net::local_ip_address)
    }
}

/// Copy the expected attributes out of one raw listing, filling every
/// missing or non-scalar key with an empty string so downstream reads are
/// always defined. Numeric values are stringified.
pub(crate) fn listing_attrs<'a>(raw: &Value, keys: &[&'a str]) -> HashMap<&'a str, String> {
    keys.iter()
        .map(|&key| {
            let value = match raw.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            };
            (key, value)
        })
        .collect()
}

/// Split a combined "city, state" string on its first `", "`.
///
/// No separator means the whole string is the city; an empty string yields
/// neither part.
pub(crate) fn split_location(location: &str) -> (Option<&str>, Option<&str>) {
    if location.is_empty() {
        return (None, None);
    }
    match location.split_once(", ") {
        Some((city, state)) => (Some(city), Some(state)),
        None => (Some(location), None),
    }
}

/// Wire format a provider's API responds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
}

/// Trait every job-search provider implements.
///
/// A provider owns its search parameters, renders them into a request URL,
/// and maps one raw listing at a time into the normalized [`Job`] record.
/// The request cycle itself is shared, see [`dispatch::fetch_jobs`].
#[async_trait]
pub trait JobProvider: Send + Sync {
    /// Source label attached to every job this provider returns.
    fn source(&self) -> &'static str;

    /// Fully-formed request URL for the current parameter state.
    fn url(&self) -> String;

    /// Verb handed to the transport, passed through uninspected.
    fn verb(&self) -> Method {
        Method::GET
    }

    fn format(&self) -> ResponseFormat {
        ResponseFormat::Json
    }

    /// Key of the listings array inside the decoded response body.
    fn listings_path(&self) -> &'static str;

    /// Map one raw listing into the normalized record.
    fn parse_listing(&self, raw: &Value) -> Job;

    /// Run one full request/response cycle against the provider's API.
    async fn collect(&self, client: &reqwest::Client) -> Result<Vec<Job>, ProviderError> {
        dispatch::fetch_jobs(client, self).await
    }
}

/// Look up a provider implementation by name.
pub fn get_provider(name: &str, params: SearchParams) -> Option<Box<dyn JobProvider>> {
    match name {
        "simplyhired" => Some(Box::new(simplyhired::Simplyhired::new(params))),
        _ => None,
    }
}

use async_trait::async_trait;
use serde_json::Value;

use crate::models::job::Job;
use crate::providers::{JobProvider, SearchParams, listing_attrs, split_location, urlencoded};

const BASE_URL: &str = "http://api.simplyhired.com/a/jobs-api/json/";

/// Attributes every raw listing is expected to carry. Missing ones are
/// defaulted to empty strings before mapping.
const LISTING_ATTRS: &[&str] = &[
    "title",
    "company",
    "location",
    "latitude",
    "longitude",
    "date",
    "description",
    "url",
];

type Accessor = fn(&SearchParams) -> Option<String>;

/// Positional URL-segment parameters, in the order the API expects them.
/// Unset entries are skipped without leaving a separator behind.
const PATH_PARAMS: &[(&str, Accessor)] = &[
    ("q", |p| p.keyword.clone()),
    ("l", |p| p.location()),
    ("ws", |p| p.count.map(|n| n.to_string())),
    ("pn", |p| p.page.map(|n| n.to_string())),
];

/// Conventional `key=value` query parameters; unset entries are omitted.
/// `clip` is the odd one out: its accessor falls back to the local host's
/// address, so it is effectively always present.
const QUERY_PARAMS: &[(&str, Accessor)] = &[
    ("auth", |p| p.developer_key.clone()),
    ("clip", |p| p.ip_address()),
    ("ssty", |p| p.search_style.clone()),
    ("cflg", |p| p.config_flag.clone()),
    ("frag", |p| p.description_frag.map(|n| n.to_string())),
];

pub struct Simplyhired {
    params: SearchParams,
    base_url: String,
}

impl Simplyhired {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different endpoint. Tests aim this at a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }
}

#[async_trait]
impl JobProvider for Simplyhired {
    fn source(&self) -> &'static str {
        "simplyhired"
    }

    /// Assemble the request URL for the current parameter state.
    ///
    /// Present positional parameters render as `key-value` segments joined
    /// by `/`, followed by `?` and the conventional query string. The `?`
    /// is emitted even when the query family is empty.
    fn url(&self) -> String {
        let mut path = String::new();
        let mut sep = "";
        for (key, accessor) in PATH_PARAMS {
            if let Some(value) = accessor(&self.params) {
                path.push_str(sep);
                path.push_str(key);
                path.push('-');
                path.push_str(&urlencoded(&value));
                sep = "/";
            }
        }

        let query = QUERY_PARAMS
            .iter()
            .filter_map(|(key, accessor)| {
                accessor(&self.params).map(|value| format!("{key}={}", urlencoded(&value)))
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}{path}?{query}", self.base_url)
    }

    fn listings_path(&self) -> &'static str {
        "jobs"
    }

    /// Map one raw listing into the normalized record. Total over any flat
    /// key/value payload: absent attributes come through as empty strings,
    /// and a splittable location also fills city and state.
    fn parse_listing(&self, raw: &Value) -> Job {
        let attrs = listing_attrs(raw, LISTING_ATTRS);
        let (city, state) = split_location(&attrs["location"]);

        Job {
            title: attrs["title"].clone(),
            company: attrs["company"].clone(),
            location: attrs["location"].clone(),
            city: city.map(str::to_string),
            state: state.map(str::to_string),
            latitude: attrs["latitude"].clone(),
            longitude: attrs["longitude"].clone(),
            date_posted: attrs["date"].clone(),
            description: attrs["description"].clone(),
            url: attrs["url"].clone(),
            source: self.source().to_string(),
            query: self.params.keyword.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_listing_keeps_populated_fields() {
        let provider = Simplyhired::new(SearchParams {
            keyword: Some("manager".to_string()),
            ..Default::default()
        });
        let raw = json!({
            "title": "Project Manager",
            "company": "Initech",
            "location": "Chicago, IL",
            "latitude": 41.88,
            "longitude": -87.63,
            "date": "2015-07-02",
            "description": "Keep the TPS reports moving.",
            "url": "http://example.com/jobs/1",
        });

        let job = provider.parse_listing(&raw);

        assert_eq!(job.title, "Project Manager");
        assert_eq!(job.company, "Initech");
        assert_eq!(job.location, "Chicago, IL");
        assert_eq!(job.city.as_deref(), Some("Chicago"));
        assert_eq!(job.state.as_deref(), Some("IL"));
        assert_eq!(job.latitude, "41.88");
        assert_eq!(job.longitude, "-87.63");
        assert_eq!(job.date_posted, "2015-07-02");
        assert_eq!(job.description, "Keep the TPS reports moving.");
        assert_eq!(job.url, "http://example.com/jobs/1");
        assert_eq!(job.source, "simplyhired");
        assert_eq!(job.query, "manager");
    }

    #[test]
    fn parse_listing_defaults_missing_fields_to_empty() {
        let provider = Simplyhired::new(SearchParams::default());

        let job = provider.parse_listing(&json!({}));

        assert_eq!(job.title, "");
        assert_eq!(job.company, "");
        assert_eq!(job.location, "");
        assert_eq!(job.city, None);
        assert_eq!(job.state, None);
        assert_eq!(job.latitude, "");
        assert_eq!(job.longitude, "");
        assert_eq!(job.date_posted, "");
        assert_eq!(job.description, "");
        assert_eq!(job.url, "");
        assert_eq!(job.source, "simplyhired");
        assert_eq!(job.query, "");
    }

    #[test]
    fn parse_listing_keeps_unsplit_location_as_city() {
        let provider = Simplyhired::new(SearchParams::default());

        let job = provider.parse_listing(&json!({ "location": "Remote" }));

        assert_eq!(job.city.as_deref(), Some("Remote"));
        assert_eq!(job.state, None);
    }

    #[test]
    fn path_segments_keep_declared_order_without_gaps() {
        // count is unset: ws- disappears and q- joins pn- directly.
        let provider = Simplyhired::new(SearchParams {
            keyword: Some("rust".to_string()),
            page: Some(3),
            ip_address: Some("203.0.113.7".to_string()),
            ..Default::default()
        });

        let url = provider.url();

        assert!(url.contains("json/q-rust/pn-3?"));
    }

    #[test]
    fn empty_keyword_is_emitted_not_omitted() {
        let provider = Simplyhired::new(SearchParams {
            keyword: Some(String::new()),
            ip_address: Some("203.0.113.7".to_string()),
            ..Default::default()
        });

        let url = provider.url();

        assert!(url.contains("json/q-?"));
    }

    #[test]
    fn numeric_parameters_render_in_both_families() {
        let provider = Simplyhired::new(SearchParams {
            count: Some(25),
            page: Some(2),
            description_frag: Some(120),
            ip_address: Some("203.0.113.7".to_string()),
            ..Default::default()
        });

        let url = provider.url();

        assert!(url.contains("ws-25/pn-2?"));
        assert!(url.contains("frag=120"));
    }
}

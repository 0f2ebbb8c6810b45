use clap::Parser;

use crate::providers::SearchParams;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobfetch", about = "Search job listings through provider APIs")]
pub struct Config {
    /// Provider to search
    #[arg(long, default_value = "simplyhired")]
    pub provider: String,

    /// Keyword or phrase to search for
    #[arg(long)]
    pub keyword: Option<String>,

    /// City to search in
    #[arg(long)]
    pub city: Option<String>,

    /// State to search in
    #[arg(long)]
    pub state: Option<String>,

    /// Preformatted location, overrides city/state
    #[arg(long)]
    pub location: Option<String>,

    /// Listings per page
    #[arg(long)]
    pub count: Option<u32>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Developer key for the provider API
    #[arg(long, env = "JOBFETCH_DEVELOPER_KEY")]
    pub developer_key: Option<String>,

    /// Client IP reported to the provider, defaults to this host's address
    #[arg(long)]
    pub ip_address: Option<String>,

    /// Provider-specific search style
    #[arg(long)]
    pub search_style: Option<String>,

    /// Provider-specific config flag
    #[arg(long)]
    pub config_flag: Option<String>,

    /// Description fragment length in results
    #[arg(long)]
    pub description_frag: Option<u32>,

    /// Print full JSON records instead of one line per job
    #[arg(long)]
    pub json: bool,
}

impl Config {
    /// Search parameters for the selected provider.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            keyword: self.keyword.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            location: self.location.clone(),
            count: self.count,
            page: self.page,
            developer_key: self.developer_key.clone(),
            ip_address: self.ip_address.clone(),
            search_style: self.search_style.clone(),
            config_flag: self.config_flag.clone(),
            description_frag: self.description_frag,
        }
    }
}

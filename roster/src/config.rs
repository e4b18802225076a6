use dotenv::dotenv;
use std::{env, time::Duration};

pub const DEFAULT_API_ROOT: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2412-FTB-ET-WEB-PT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Remote player service
    pub api_root: String,
    pub cohort: String,
    /// Full base location, replaces `api_root` + `cohort` when set.
    pub api_url: Option<String>,

    // Transport
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_root: DEFAULT_API_ROOT.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
            api_url: None,
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_root = lookup("PUPPY_BOWL_API_ROOT").unwrap_or_else(|| DEFAULT_API_ROOT.to_string());
        let cohort = lookup("PUPPY_BOWL_COHORT").unwrap_or_else(|| DEFAULT_COHORT.to_string());
        let api_url = lookup("PUPPY_BOWL_API_URL").filter(|url| !url.trim().is_empty());

        let timeout = match lookup("PUPPY_BOWL_TIMEOUT_SECS") {
            Some(secs) => {
                let secs = secs.trim().parse::<u64>().map_err(|_| {
                    anyhow::anyhow!("PUPPY_BOWL_TIMEOUT_SECS must be a whole number of seconds, got {secs:?}")
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            api_root,
            cohort,
            api_url,
            timeout,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn base_url(&self) -> String {
        match &self.api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}/{}", self.api_root.trim_end_matches('/'), self.cohort),
        }
    }
}

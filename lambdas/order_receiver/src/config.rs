use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct Config {
    pub queue_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["QUEUE_URL"]))
            .extract()
    }

    /// The destination queue, if one is configured. Blank values count as unset.
    pub fn queue_url(&self) -> Option<&str> {
        self.queue_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

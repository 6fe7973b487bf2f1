use crate::error::Error;
use reqwest::blocking::Client as HttpClient;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str =
    "https://www.googleapis.com/identitytoolkit/v3/relyingparty/verifyPassword";

pub struct Config {
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub struct Client {
    pub config: Config,
    pub http: HttpClient,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        // The call blocks until the service answers; there is no deadline.
        let http = HttpClient::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::Internal(format!("building http client - {}", e)))?;

        Ok(Client { config, http })
    }

    /// The endpoint with the project key attached as the `key` query parameter.
    pub fn request_url(&self, project_key: &str) -> Result<Url, Error> {
        let mut url = parse_endpoint(&self.config.endpoint)?;
        url.query_pairs_mut().append_pair("key", project_key);
        Ok(url)
    }
}

pub fn parse_endpoint(endpoint: &str) -> Result<Url, Error> {
    Url::parse(endpoint).map_err(|e| Error::Flag(format!("bad endpoint {:?} - {}", endpoint, e)))
}

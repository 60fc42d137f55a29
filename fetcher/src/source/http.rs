use crate::workflow::config::{Credentials, FetchConfig};
use flightcore::prelude::{AreaConfig, FeedError, FeedResult, StateSource};
use flightcore::StateResponse;
use log::debug;
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!("flight-radius-fetcher/", env!("CARGO_PKG_VERSION"));

/// Blocking client for OpenSky's `/states/all`.
///
/// One request per fetch; no retries and the client's default timeout.
pub struct OpenSkyClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
    bounds: Option<AreaConfig>,
}

impl OpenSkyClient {
    pub fn new(config: &FetchConfig) -> FeedResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| FeedError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
            bounds: config.bounded_query.then_some(config.area),
        })
    }

    pub fn states_url(&self) -> String {
        format!("{}/states/all", self.base_url.trim_end_matches('/'))
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self.bounds {
            Some(area) => {
                let (lamin, lomin, lamax, lomax) = area.bounding_box();
                vec![
                    ("lamin", format!("{lamin:.4}")),
                    ("lomin", format!("{lomin:.4}")),
                    ("lamax", format!("{lamax:.4}")),
                    ("lomax", format!("{lomax:.4}")),
                ]
            }
            None => Vec::new(),
        }
    }
}

impl StateSource for OpenSkyClient {
    fn fetch(&self) -> FeedResult<StateResponse> {
        let url = self.states_url();
        debug!("GET {}", url);

        let mut request = self.client.get(&url);
        let query = self.query();
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request
            .send()
            .map_err(|err| FeedError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }
        let body = response
            .bytes()
            .map_err(|err| FeedError::Transport(err.to_string()))?;
        StateResponse::from_slice(&body)
    }

    fn describe(&self) -> String {
        self.states_url()
    }
}

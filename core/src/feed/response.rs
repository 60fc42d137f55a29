use serde::{Deserialize, Deserializer, Serialize};

use crate::feed::StateVector;
use crate::prelude::FeedResult;

/// Body of an OpenSky `/states/all` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateResponse {
    /// Epoch seconds at which upstream captured the states.
    pub time: i64,
    /// Upstream sends `null` instead of `[]` when nothing is tracked.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub states: Vec<StateVector>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<StateVector>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<StateVector>>::deserialize(deserializer)?.unwrap_or_default())
}

impl StateResponse {
    pub fn new(time: i64, states: Vec<StateVector>) -> Self {
        Self { time, states }
    }

    pub fn from_slice(bytes: &[u8]) -> FeedResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

use serde::{Deserialize, Serialize};

/// An AMM known to the aggregator on one chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Protocol {
    #[serde(rename = "amm_name")]
    pub name: String,
    #[serde(rename = "protocol")]
    pub id: u32,
}

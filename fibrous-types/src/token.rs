use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::de;

/// A token listed by the Fibrous graph API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Token {
    /// Hex token address, stored lowercased
    #[serde(deserialize_with = "de::lowercase")]
    pub address: String,
    pub name: String,
    /// Symbol / ticker
    pub symbol: String,
    pub decimals: u32,
    /// USD unit price; the API sends it either as a string or a number
    #[serde(deserialize_with = "de::non_negative_decimal")]
    pub price: Decimal,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub valuable: Option<bool>,
    /// Verified by Fibrous
    pub verified: bool,
    #[serde(default)]
    pub category: Option<String>,
}

impl Token {
    /// Key used by token listings.
    pub fn symbol_key(&self) -> String {
        self.symbol.to_lowercase()
    }
}

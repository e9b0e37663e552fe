use num_bigint::BigUint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{de, ModelError, Slippage, Token};

/// Allowed drift between the summed route percents and 100.
const SPLIT_TOLERANCE: Decimal = Decimal::ONE;

/// One hop inside a route
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Swap {
    pub protocol: u32,
    #[serde(rename = "poolId", deserialize_with = "de::string_or_number")]
    pub pool_id: String,
    #[serde(rename = "poolAddress", deserialize_with = "de::lowercase")]
    pub pool_address: String,
    #[serde(rename = "fromTokenAddress", deserialize_with = "de::lowercase")]
    pub from_token_address: String,
    #[serde(rename = "toTokenAddress", deserialize_with = "de::lowercase")]
    pub to_token_address: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub percent: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    #[serde(deserialize_with = "de::string_or_number")]
    pub percent: String,
    /// Sequential hop groups; each inner list runs in parallel
    pub swaps: Vec<Vec<Swap>>,
}

/// Best-route response of the `/route` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSuccess {
    pub success: bool,
    #[serde(rename = "inputToken")]
    pub input_token: Token,
    #[serde(rename = "inputAmount", deserialize_with = "de::string_or_number")]
    pub input_amount: String,
    #[serde(rename = "outputToken")]
    pub output_token: Token,
    #[serde(rename = "outputAmount", deserialize_with = "de::string_or_number")]
    pub output_amount: String,
    pub route: Vec<Route>,
    /// Computed client side, never read from the response
    #[serde(default, skip_deserializing)]
    pub slippage: Option<Slippage>,
    #[serde(rename = "estimatedGasUsed", deserialize_with = "de::string_or_number")]
    pub estimated_gas_used: String,
    #[serde(rename = "bestQuotesByProtocols", deserialize_with = "de::string_or_number_vec")]
    pub best_quotes_by_protocols: Vec<String>,
    pub time: f64,
    pub initial: bool,
}

impl RouteSuccess {
    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.success {
            return Err(ModelError::Unsuccessful);
        }
        parse_amount(&self.input_amount)?;
        parse_amount(&self.output_amount)?;

        let mut total = Decimal::ZERO;
        for route in &self.route {
            total += parse_percent(&route.percent)?;
            for swap in route.swaps.iter().flatten() {
                parse_percent(&swap.percent)?;
            }
        }
        if !self.route.is_empty() && (total - Decimal::ONE_HUNDRED).abs() > SPLIT_TOLERANCE {
            return Err(ModelError::RouteSplitMismatch(total.to_string()));
        }
        Ok(())
    }

    pub fn input_amount_units(&self) -> Result<BigUint, ModelError> {
        parse_amount(&self.input_amount)
    }

    pub fn output_amount_units(&self) -> Result<BigUint, ModelError> {
        parse_amount(&self.output_amount)
    }
}

/// Parses a base-unit amount ("1000000"), rejecting signs, decimals and hex.
pub fn parse_amount(raw: &str) -> Result<BigUint, ModelError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModelError::InvalidAmount(raw.to_string()));
    }
    BigUint::from_str(raw).map_err(|_| ModelError::InvalidAmount(raw.to_string()))
}

/// Parses "42.5" or "42.5%" into a percent in `[0, 100]`.
pub fn parse_percent(raw: &str) -> Result<Decimal, ModelError> {
    let trimmed = raw.trim().trim_end_matches('%');
    let value =
        Decimal::from_str(trimmed).map_err(|_| ModelError::InvalidPercent(raw.to_string()))?;
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ModelError::InvalidPercent(raw.to_string()));
    }
    Ok(value)
}

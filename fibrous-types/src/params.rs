//! Outbound query parameter bundles.

use num_bigint::BigUint;

use crate::ModelError;

/// Largest slippage tolerance the router accepts (0.49 = 49%).
pub const MAX_SLIPPAGE: f64 = 0.49;

/// Query for the `/route` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteParams {
    pub amount: BigUint,
    pub token_in_address: String,
    pub token_out_address: String,
}

impl RouteParams {
    pub fn new(amount: BigUint, token_in_address: &str, token_out_address: &str) -> Self {
        Self {
            amount,
            token_in_address: token_in_address.to_lowercase(),
            token_out_address: token_out_address.to_lowercase(),
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("amount".to_string(), self.amount.to_string()),
            ("tokenInAddress".to_string(), self.token_in_address.clone()),
            ("tokenOutAddress".to_string(), self.token_out_address.clone()),
        ]
    }
}

/// Query for the `/execute` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteExecuteParams {
    pub amount: BigUint,
    pub token_in_address: String,
    pub token_out_address: String,
    /// Already bounded to `MAX_SLIPPAGE`
    pub slippage: f64,
    pub destination: String,
}

impl RouteExecuteParams {
    pub fn new(
        amount: BigUint,
        token_in_address: &str,
        token_out_address: &str,
        slippage: f64,
        destination: &str,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            amount,
            token_in_address: token_in_address.to_lowercase(),
            token_out_address: token_out_address.to_lowercase(),
            slippage: bound_slippage(slippage)?,
            destination: destination.to_lowercase(),
        })
    }

    /// The execute endpoint takes the amount as `0x` hex.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("amount".to_string(), format!("{:#x}", self.amount)),
            ("tokenInAddress".to_string(), self.token_in_address.clone()),
            ("tokenOutAddress".to_string(), self.token_out_address.clone()),
            ("slippage".to_string(), self.slippage.to_string()),
            ("destination".to_string(), self.destination.clone()),
        ]
    }
}

/// Query for the `/executeBatch` endpoint; list values are comma joined.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchExecuteParams {
    pub amounts: Vec<BigUint>,
    pub token_in_addresses: Vec<String>,
    pub token_out_addresses: Vec<String>,
    pub slippage: f64,
    pub destination: String,
}

impl BatchExecuteParams {
    pub fn new(
        amounts: Vec<BigUint>,
        token_in_addresses: &[&str],
        token_out_addresses: &[&str],
        slippage: f64,
        destination: &str,
    ) -> Result<Self, ModelError> {
        if amounts.is_empty() {
            return Err(ModelError::InvalidBatch("no swaps given".into()));
        }
        if amounts.len() != token_in_addresses.len() || amounts.len() != token_out_addresses.len() {
            return Err(ModelError::InvalidBatch(format!(
                "length mismatch: {} amounts, {} input tokens, {} output tokens",
                amounts.len(),
                token_in_addresses.len(),
                token_out_addresses.len()
            )));
        }
        Ok(Self {
            amounts,
            token_in_addresses: token_in_addresses.iter().map(|a| a.to_lowercase()).collect(),
            token_out_addresses: token_out_addresses.iter().map(|a| a.to_lowercase()).collect(),
            slippage: bound_slippage(slippage)?,
            destination: destination.to_lowercase(),
        })
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let amounts: Vec<String> = self.amounts.iter().map(|a| format!("{:#x}", a)).collect();
        vec![
            ("amounts".to_string(), amounts.join(",")),
            ("tokenInAddresses".to_string(), self.token_in_addresses.join(",")),
            ("tokenOutAddresses".to_string(), self.token_out_addresses.join(",")),
            ("slippage".to_string(), self.slippage.to_string()),
            ("destination".to_string(), self.destination.clone()),
        ]
    }
}

/// Clamps to `MAX_SLIPPAGE`; negative and non-finite tolerances are rejected.
pub fn bound_slippage(slippage: f64) -> Result<f64, ModelError> {
    if !slippage.is_finite() || slippage < 0.0 {
        return Err(ModelError::InvalidSlippage(slippage));
    }
    Ok(slippage.min(MAX_SLIPPAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_route_params_query() {
        let params = RouteParams::new(BigUint::from(1_000_000u32), "0xAA", "0xbb");
        assert_eq!(
            params.query_pairs(),
            vec![
                ("amount".to_string(), "1000000".to_string()),
                ("tokenInAddress".to_string(), "0xaa".to_string()),
                ("tokenOutAddress".to_string(), "0xbb".to_string()),
            ]
        );
    }

    #[test]
    fn test_execute_params_hex_amount_and_clamp() {
        let params =
            RouteExecuteParams::new(BigUint::from(26u32), "0xaa", "0xbb", 0.9, "0xDEST").unwrap();
        let pairs = params.query_pairs();
        assert_eq!(pairs[0], ("amount".to_string(), "0x1a".to_string()));
        assert_eq!(pairs[3], ("slippage".to_string(), "0.49".to_string()));
        assert_eq!(pairs[4], ("destination".to_string(), "0xdest".to_string()));
    }

    #[test]
    fn test_bound_slippage() {
        assert_eq!(bound_slippage(0.01), Ok(0.01));
        assert_eq!(bound_slippage(5.0), Ok(MAX_SLIPPAGE));
        assert!(bound_slippage(-0.1).is_err());
        assert!(bound_slippage(f64::NAN).is_err());
    }

    #[test]
    fn test_batch_params_validation() {
        let mismatch = BatchExecuteParams::new(
            vec![BigUint::from(1u32), BigUint::from(2u32)],
            &["0xa"],
            &["0xb", "0xc"],
            0.01,
            "0xd",
        );
        assert!(matches!(mismatch, Err(ModelError::InvalidBatch(_))));

        let empty = BatchExecuteParams::new(vec![], &[], &[], 0.01, "0xd");
        assert!(matches!(empty, Err(ModelError::InvalidBatch(_))));

        let ok = BatchExecuteParams::new(
            vec![BigUint::from(16u32), BigUint::from(32u32)],
            &["0xA", "0xB"],
            &["0xC", "0xD"],
            0.02,
            "0xE",
        )
        .unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.query_pairs()[0], ("amounts".to_string(), "0x10,0x20".to_string()));
        assert_eq!(ok.query_pairs()[1], ("tokenInAddresses".to_string(), "0xa,0xb".to_string()));
    }
}

//! Typed models for the Fibrous routing and graph APIs.
//!
//! Every type here is a plain value built from a single JSON response (or, for
//! the `*Params` bundles, from caller input). Nothing holds a reference back to
//! the request that produced it.

pub mod de;
pub mod params;
pub mod protocol;
pub mod route;
pub mod slippage;
pub mod token;

use thiserror::Error;

pub use params::{BatchExecuteParams, RouteExecuteParams, RouteParams, MAX_SLIPPAGE};
pub use protocol::Protocol;
pub use route::{Route, RouteSuccess, Swap};
pub use slippage::Slippage;
pub use token::Token;

/// Semantic violations found after a response parsed successfully.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid amount '{0}': expected a non-negative integer string")]
    InvalidAmount(String),

    #[error("invalid percent '{0}': expected a value between 0 and 100")]
    InvalidPercent(String),

    #[error("route percents sum to {0}, expected 100")]
    RouteSplitMismatch(String),

    #[error("route response reported success = false")]
    Unsuccessful,

    #[error("invalid slippage tolerance {0}")]
    InvalidSlippage(f64),

    #[error("invalid batch parameters: {0}")]
    InvalidBatch(String),
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// USD value delta between the input and output legs of a quote.
///
/// `ratio` is `(output_value - input_value) / input_value`; positive means the
/// output is worth more than the input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Slippage {
    #[serde(rename = "inputValue")]
    pub input_value: Decimal,
    #[serde(rename = "outputValue")]
    pub output_value: Decimal,
    pub ratio: Decimal,
}

impl Slippage {
    pub fn is_favorable(&self) -> bool {
        self.ratio.is_sign_positive() && !self.ratio.is_zero()
    }
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PricingError {
    #[error("volatility * sqrt(time to maturity) is 0, d1 and d2 are undefined")]
    ZeroVariance,
    #[error("spot and strike must be strictly positive")]
    NonPositivePrice,
}

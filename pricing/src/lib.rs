pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::black_scholes::{
    price_option, quote, BlackScholesMerton, OptionPrice, PricingIntermediate, PricingResult,
};
pub use common::models::OptionParameters;
pub use error::PricingError;

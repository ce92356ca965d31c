use crate::common::models::OptionParameters;
use crate::error::PricingError;
use probability::distribution::{Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// Display precision of quoted prices, as in cents.
fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// The standardized distances d1 and d2, derived fresh from one parameter set.
/// Call and put of the same request must be evaluated from the same instance.
pub struct PricingIntermediate {
    pub d1: f64,
    pub d2: f64,
}

impl PricingIntermediate {
    pub fn new(dp: &OptionParameters) -> Self {
        let sigma_exp = dp.vola * dp.time_to_maturity.sqrt();
        let d1 = ((dp.spot / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_maturity)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        Self { d1, d2 }
    }
}

/// Call and put prices of one parameter set, rounded to cents.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    pub call: f64,
    pub put: f64,
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    fn discount_factor(dp: &OptionParameters) -> f64 {
        (-dp.rfr * dp.time_to_maturity).exp()
    }

    pub(crate) fn call_from(dp: &OptionParameters, inter: &PricingIntermediate) -> f64 {
        cdf(inter.d1) * dp.spot - cdf(inter.d2) * dp.strike * Self::discount_factor(dp)
    }

    pub(crate) fn put_from(dp: &OptionParameters, inter: &PricingIntermediate) -> f64 {
        cdf(-inter.d2) * dp.strike * Self::discount_factor(dp) - cdf(-inter.d1) * dp.spot
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(dp: &OptionParameters) -> f64 {
        Self::call_from(dp, &PricingIntermediate::new(dp))
    }

    fn put(dp: &OptionParameters) -> f64 {
        Self::put_from(dp, &PricingIntermediate::new(dp))
    }
}

/// Both prices of one request, evaluated from shared d1/d2 so the cdf is
/// sampled once per distance and call and put cannot disagree on the
/// intermediates.
pub fn quote(dp: &OptionParameters) -> PricingResult {
    let inter = PricingIntermediate::new(dp);
    PricingResult {
        call: round_to_cents(BlackScholesMerton::call_from(dp, &inter)),
        put: round_to_cents(BlackScholesMerton::put_from(dp, &inter)),
    }
}

/// One-shot interface: validate the five inputs, then quote.
pub fn price_option(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    vola: f64,
    rfr: f64,
) -> Result<PricingResult, PricingError> {
    let dp = OptionParameters::new(spot, strike, time_to_maturity, vola, rfr)?;
    Ok(quote(&dp))
}

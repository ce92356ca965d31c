use crate::error::PricingError;

/// The market inputs of one pricing request. Construction via [`OptionParameters::new`]
/// validates the domain constraints, so a constructed value can always be priced.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionParameters {
    /// the underlying's price at time t
    pub spot: f64,
    /// the strike or exercise price of the option
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_maturity: f64,
    /// the annualized standard deviation of the underlying's log-returns
    pub vola: f64,
    /// the annualized, continuously compounded risk-free interest rate
    pub rfr: f64,
}

impl OptionParameters {
    /// Checks the log and division domains before the formulas ever see the values:
    /// `spot` and `strike` must be strictly positive, and so must
    /// `vola * sqrt(time_to_maturity)`. The rate may be negative. NaN inputs fail
    /// the same checks.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        vola: f64,
        rfr: f64,
    ) -> Result<Self, PricingError> {
        if !(spot > 0.0 && strike > 0.0) {
            return Err(PricingError::NonPositivePrice);
        }
        if !(vola > 0.0 && time_to_maturity > 0.0) {
            return Err(PricingError::ZeroVariance);
        }
        Ok(Self {
            spot,
            strike,
            time_to_maturity,
            vola,
            rfr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters() {
        let dp = OptionParameters::new(100.0, 100.0, 1.0, 0.2, 0.01).unwrap();
        assert_eq!(dp.spot, 100.0);
        assert_eq!(dp.rfr, 0.01);
    }

    #[test]
    fn negative_rate_is_valid() {
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.2, -0.005).is_ok());
    }

    #[test]
    fn zero_time_to_maturity() {
        let err = OptionParameters::new(100.0, 100.0, 0.0, 0.2, 0.01).unwrap_err();
        assert_eq!(err, PricingError::ZeroVariance);
    }

    #[test]
    fn zero_volatility() {
        let err = OptionParameters::new(100.0, 100.0, 1.0, 0.0, 0.01).unwrap_err();
        assert_eq!(err, PricingError::ZeroVariance);
    }

    #[test]
    fn non_positive_prices() {
        let err = OptionParameters::new(0.0, 100.0, 1.0, 0.2, 0.01).unwrap_err();
        assert_eq!(err, PricingError::NonPositivePrice);

        let err = OptionParameters::new(100.0, -50.0, 1.0, 0.2, 0.01).unwrap_err();
        assert_eq!(err, PricingError::NonPositivePrice);
    }

    #[test]
    fn nan_inputs_are_rejected() {
        assert!(OptionParameters::new(f64::NAN, 100.0, 1.0, 0.2, 0.01).is_err());
        assert!(OptionParameters::new(100.0, 100.0, f64::NAN, 0.2, 0.01).is_err());
    }
}

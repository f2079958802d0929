use crate::domain::errors::ValidationError;

/// Cash amount moved by a deposit or withdrawal
///
/// Must be finite and strictly positive. A zero amount is rejected the same
/// way as a negative one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::MustBeFinite);
        }
        if value <= 0.0 {
            return Err(ValidationError::MustBePositive);
        }
        Ok(Amount(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_new_valid() {
        assert_eq!(Amount::new(500.0).unwrap().value(), 500.0);
    }

    #[test]
    fn test_amount_zero_and_negative_rejected() {
        assert_eq!(Amount::new(0.0), Err(ValidationError::MustBePositive));
        assert_eq!(Amount::new(-100.0), Err(ValidationError::MustBePositive));
    }

    #[test]
    fn test_amount_non_finite_rejected() {
        assert_eq!(Amount::new(f64::NAN), Err(ValidationError::MustBeFinite));
        assert_eq!(
            Amount::new(f64::NEG_INFINITY),
            Err(ValidationError::MustBeFinite)
        );
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::new(500.0).unwrap().to_string(), "500.0");
        assert_eq!(Amount::new(0.25).unwrap().to_string(), "0.25");
    }
}

use crate::domain::errors::ValidationError;

/// Quoted share price, always strictly positive and finite
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::MustBeFinite);
        }
        if value <= 0.0 {
            return Err(ValidationError::InvalidPrice(format!(
                "{} (must be positive)",
                value
            )));
        }
        Ok(Price(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Notional value of `quantity` shares at this price
    pub fn notional(&self, quantity: u64) -> f64 {
        self.0 * quantity as f64
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug keeps the trailing ".0" on whole numbers ("150.0", not "150")
        write!(f, "{:?}", self.0)
    }
}

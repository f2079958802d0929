use crate::domain::errors::ValidationError;

/// Number of shares in a trade, always a positive whole number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u64);

impl Quantity {
    /// Accepts the signed value a caller typed in and rejects anything `<= 0`
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::InvalidQuantity(format!(
                "{} (must be positive)",
                value
            )));
        }
        Ok(Quantity(value as u64))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

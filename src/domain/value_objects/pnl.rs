use crate::domain::errors::ValidationError;

/// Gain or loss of an account against its opening deposit
///
/// Signed, always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PnL(f64);

impl PnL {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::MustBeFinite);
        }
        Ok(PnL(value))
    }

    /// Gain of `current` over `baseline`
    ///
    /// Saturates at the f64 range instead of producing an infinity.
    pub fn between(current: f64, baseline: f64) -> Self {
        let result = current - baseline;
        PnL::new(result).unwrap_or_else(|_| {
            if result.is_sign_positive() {
                PnL(f64::MAX)
            } else {
                PnL(f64::MIN)
            }
        })
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_profit(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_loss(&self) -> bool {
        self.0 < 0.0
    }
}

impl std::fmt::Display for PnL {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 >= 0.0 {
            write!(f, "+${:.2}", self.0)
        } else {
            write!(f, "-${:.2}", self.0.abs())
        }
    }
}

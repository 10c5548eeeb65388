use crate::error::{Result, RrefError};

/// Absolute tolerance used to decide whether an entry is "effectively zero".
///
/// The default of `1e-8` is the absolute part of the usual `isclose(x, 0)`
/// test. Comparing against zero leaves no room for a relative term, so only
/// the absolute bound matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    pub const DEFAULT: f64 = 1e-8;

    pub fn new(absolute: f64) -> Result<Self> {
        if !absolute.is_finite() || absolute < 0.0 {
            return Err(RrefError::InvalidTolerance(absolute));
        }
        Ok(Self(absolute))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_effectively_zero(&self, x: f64) -> bool {
        x.abs() <= self.0
    }

    pub fn is_effectively_nonzero(&self, x: f64) -> bool {
        !self.is_effectively_zero(x)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

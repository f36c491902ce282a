use std::fmt::{Display, Formatter};

use vodca::{AsRefln, Fromln};

/// Money value in the hotel's currency.
///
/// Integral amounts keep one decimal place (`300.0`), everything else is
/// printed with the shortest representation that round-trips (`99.5`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Fromln, AsRefln)]
pub struct Amount(f64);

impl Amount {
    pub fn new(amount: impl Into<f64>) -> Self {
        Self(amount.into())
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

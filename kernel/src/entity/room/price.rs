use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::AsRefln;

use crate::entity::{Amount, Nights};
use crate::{KernelError, Violation};

/// Per-night rate of a room. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, AsRefln)]
pub struct RoomPrice(f64);

impl RoomPrice {
    pub fn total_for(&self, nights: &Nights) -> Amount {
        Amount::new(self.0 * f64::from(*nights.as_ref()))
    }
}

impl TryFrom<f64> for RoomPrice {
    type Error = Report<KernelError>;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Report::new(KernelError::Validation)
                .attach_printable(Violation::NonPositivePrice(value)))
        }
    }
}

impl From<RoomPrice> for Amount {
    fn from(value: RoomPrice) -> Self {
        Amount::new(value.0)
    }
}

impl Display for RoomPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Amount::new(self.0).fmt(f)
    }
}

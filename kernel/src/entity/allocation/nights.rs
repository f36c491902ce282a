use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::{KernelError, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct Nights(u32);

impl TryFrom<i64> for Nights {
    type Error = Report<KernelError>;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(Violation::NonPositiveNights(value)));
        }
        u32::try_from(value).map(Self).map_err(|error| {
            Report::new(error)
                .change_context(KernelError::Validation)
                .attach_printable(Violation::TooLarge(value))
        })
    }
}

impl Display for Nights {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

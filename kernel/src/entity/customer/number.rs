use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::{KernelError, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct CustomerNumber(u32);

impl CustomerNumber {
    pub fn new(number: impl Into<u32>) -> Self {
        Self(number.into())
    }
}

impl TryFrom<i64> for CustomerNumber {
    type Error = Report<KernelError>;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(Violation::NegativeCustomerNumber(value)));
        }
        u32::try_from(value).map(Self).map_err(|error| {
            Report::new(error)
                .change_context(KernelError::Validation)
                .attach_printable(Violation::TooLarge(value))
        })
    }
}

impl Display for CustomerNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

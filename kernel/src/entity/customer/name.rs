use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::{KernelError, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl TryFrom<String> for CustomerName {
    type Error = Report<KernelError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(
                Report::new(KernelError::Validation).attach_printable(Violation::BlankCustomerName)
            );
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Display for CustomerName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

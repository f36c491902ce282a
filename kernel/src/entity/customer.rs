mod name;
mod number;

pub use self::{name::*, number::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Customer {
    number: CustomerNumber,
    name: CustomerName,
}

impl Customer {
    pub fn new(number: CustomerNumber, name: CustomerName) -> Self {
        Self { number, name }
    }
}

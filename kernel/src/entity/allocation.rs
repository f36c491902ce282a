mod nights;

pub use self::nights::*;
use destructure::Destructure;
use vodca::References;

use crate::entity::{Customer, RoomNumber};

/// Links an occupied room to the customer staying in it.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Allocation {
    room_number: RoomNumber,
    customer: Customer,
}

impl Allocation {
    pub fn new(room_number: RoomNumber, customer: Customer) -> Self {
        Self {
            room_number,
            customer,
        }
    }
}

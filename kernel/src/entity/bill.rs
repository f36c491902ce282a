use destructure::Destructure;
use vodca::References;

use crate::entity::{Amount, Customer, Nights, RoomNumber, RoomPrice};

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Bill {
    room_number: RoomNumber,
    customer: Customer,
    nightly_rate: RoomPrice,
    nights: Nights,
    total: Amount,
}

impl Bill {
    pub fn new(
        room_number: RoomNumber,
        customer: Customer,
        nightly_rate: RoomPrice,
        nights: Nights,
    ) -> Self {
        let total = nightly_rate.total_for(&nights);
        Self {
            room_number,
            customer,
            nightly_rate,
            nights,
            total,
        }
    }
}

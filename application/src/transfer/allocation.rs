use kernel::prelude::entity::{Allocation, DestructAllocation, DestructCustomer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationDto {
    pub room_number: u32,
    pub customer_number: u32,
    pub customer_name: String,
}

impl From<Allocation> for AllocationDto {
    fn from(value: Allocation) -> Self {
        let DestructAllocation {
            room_number,
            customer,
        } = value.into_destruct();
        let DestructCustomer { number, name } = customer.into_destruct();
        Self {
            room_number: room_number.into(),
            customer_number: number.into(),
            customer_name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStatusDto {
    pub room_number: u32,
    pub occupant: Option<AllocationDto>,
}

#[derive(Debug)]
pub struct CheckCustomerNumberDto {
    pub customer_number: i64,
}

#[derive(Debug)]
pub struct CreateAllocationDto {
    pub room_number: i64,
    pub customer_number: i64,
    pub customer_name: String,
}

use kernel::prelude::entity::{Amount, Bill, DestructBill, DestructCustomer};

#[derive(Debug, Clone, PartialEq)]
pub struct BillDto {
    pub room_number: u32,
    pub customer_number: u32,
    pub customer_name: String,
    pub nightly_rate: Amount,
    pub nights: u32,
    pub total: Amount,
}

impl From<Bill> for BillDto {
    fn from(value: Bill) -> Self {
        let DestructBill {
            room_number,
            customer,
            nightly_rate,
            nights,
            total,
        } = value.into_destruct();
        let DestructCustomer { number, name } = customer.into_destruct();
        Self {
            room_number: room_number.into(),
            customer_number: number.into(),
            customer_name: name.into(),
            nightly_rate: nightly_rate.into(),
            nights: nights.into(),
            total,
        }
    }
}

#[derive(Debug)]
pub struct CreateBillDto {
    pub room_number: i64,
    pub nights: i64,
}

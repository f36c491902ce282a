use crate::controller::Intake;
use application::transfer::{CreateAllocationDto, CreateBillDto};

#[derive(Debug)]
pub struct AllocateRequest {
    pub room_number: i64,
    pub customer_number: i64,
    pub customer_name: String,
}

#[derive(Debug)]
pub struct BillRequest {
    pub room_number: i64,
    pub nights: i64,
}

pub struct AllocationTransformer;

impl Intake<AllocateRequest> for AllocationTransformer {
    type To = CreateAllocationDto;
    fn emit(
        &self,
        AllocateRequest {
            room_number,
            customer_number,
            customer_name,
        }: AllocateRequest,
    ) -> Self::To {
        CreateAllocationDto {
            room_number,
            customer_number,
            customer_name,
        }
    }
}

impl Intake<BillRequest> for AllocationTransformer {
    type To = CreateBillDto;
    fn emit(&self, BillRequest { room_number, nights }: BillRequest) -> Self::To {
        CreateBillDto {
            room_number,
            nights,
        }
    }
}

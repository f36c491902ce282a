use crate::controller::Intake;
use application::transfer::{CreateRoomDto, DeleteRoomsDto};
use kernel::prelude::entity::RoomKind;

#[derive(Debug)]
pub struct AddRoomRequest {
    pub number: i64,
    pub kind: RoomKind,
    pub price: f64,
}

#[derive(Debug)]
pub struct DeleteRoomsRequest {
    pub numbers: Vec<i64>,
}

pub struct RoomTransformer;

impl Intake<AddRoomRequest> for RoomTransformer {
    type To = CreateRoomDto;
    fn emit(&self, AddRoomRequest { number, kind, price }: AddRoomRequest) -> Self::To {
        CreateRoomDto {
            number,
            kind: kind.to_string(),
            price,
        }
    }
}

impl Intake<DeleteRoomsRequest> for RoomTransformer {
    type To = DeleteRoomsDto;
    fn emit(&self, DeleteRoomsRequest { numbers }: DeleteRoomsRequest) -> Self::To {
        DeleteRoomsDto { numbers }
    }
}

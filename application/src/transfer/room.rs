use kernel::prelude::entity::{Amount, DestructRoom, Room, RoomKind};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomDto {
    pub number: u32,
    pub kind: RoomKind,
    pub price: Amount,
    pub is_allocated: bool,
}

impl From<Room> for RoomDto {
    fn from(value: Room) -> Self {
        let DestructRoom {
            number,
            kind,
            price,
            is_allocated,
        } = value.into_destruct();
        Self {
            number: number.into(),
            kind,
            price: price.into(),
            is_allocated: is_allocated.into(),
        }
    }
}

#[derive(Debug)]
pub struct CheckRoomNumberDto {
    pub number: i64,
}

#[derive(Debug)]
pub struct GetRoomDto {
    pub number: i64,
}

#[derive(Debug)]
pub struct CreateRoomDto {
    pub number: i64,
    pub kind: String,
    pub price: f64,
}

#[derive(Debug)]
pub struct DeleteRoomsDto {
    pub numbers: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletedRoomsDto {
    pub deleted: Vec<u32>,
    /// Requested rooms left in place because a customer still occupies them.
    pub kept_allocated: Vec<u32>,
}

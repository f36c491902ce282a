use crate::controller::Exhaust;
use application::transfer::{DeletedRoomsDto, RoomDto};
use driver::journal::ENTRY_SEPARATOR;

pub struct RoomPresenter;

impl Exhaust<RoomDto> for RoomPresenter {
    type To = Vec<String>;
    fn emit(&self, input: RoomDto) -> Self::To {
        vec![format!(
            "Room {} ({}, {} per night) added successfully.",
            input.number, input.kind, input.price
        )]
    }
}

impl Exhaust<Vec<RoomDto>> for RoomPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<RoomDto>) -> Self::To {
        let mut lines = vec![
            "\n ### ROOM DETAILS ### \n".to_string(),
            "List of Rooms: \n".to_string(),
        ];
        for room in input {
            lines.push(format!("     Room Number: {}", room.number));
            lines.push(format!("Room Type: {}", room.kind));
            lines.push(format!("Room Price: {}", room.price));
            lines.push(ENTRY_SEPARATOR.to_string());
        }
        lines
    }
}

impl Exhaust<DeletedRoomsDto> for RoomPresenter {
    type To = Vec<String>;
    fn emit(&self, input: DeletedRoomsDto) -> Self::To {
        let mut lines = input
            .kept_allocated
            .iter()
            .map(|number| format!("Room {number} is allocated and was not deleted."))
            .collect::<Vec<_>>();
        lines.push(format!("\n {} Rooms deleted successfully.", input.deleted.len()));
        lines
    }
}

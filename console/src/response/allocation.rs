use crate::controller::Exhaust;
use application::transfer::{AllocationDto, BillDto, RoomStatusDto};
use driver::journal::ENTRY_SEPARATOR;

pub struct AllocationPresenter;

impl Exhaust<AllocationDto> for AllocationPresenter {
    type To = Vec<String>;
    fn emit(&self, input: AllocationDto) -> Self::To {
        vec![format!(
            "\nRoom {} allocated to {} successfully.",
            input.room_number, input.customer_name
        )]
    }
}

impl Exhaust<Vec<RoomStatusDto>> for AllocationPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<RoomStatusDto>) -> Self::To {
        let mut lines = vec![
            "\n ### ROOM ALLOCATIONS ### \n".to_string(),
            "List of Rooms: \n".to_string(),
        ];
        for status in input {
            lines.push(format!("     Room Number: {}", status.room_number));
            match status.occupant {
                Some(occupant) => {
                    lines.push("The room is allocated.\n".to_string());
                    lines.push(format!("Customer Number: {}", occupant.customer_number));
                    lines.push(format!("Customer Name: {}", occupant.customer_name));
                }
                None => lines.push("The room is not allocated\n".to_string()),
            }
            lines.push(ENTRY_SEPARATOR.to_string());
        }
        lines
    }
}

impl Exhaust<BillDto> for AllocationPresenter {
    type To = Vec<String>;
    fn emit(&self, input: BillDto) -> Self::To {
        vec![
            format!("\nThe billing per night is: {}", input.nightly_rate),
            format!("The total billing is: {}", input.total),
            format!("\nRoom {} deallocated successfully.", input.room_number),
        ]
    }
}

use crate::transfer::{BillDto, CreateBillDto};
use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    AllocationQuery, DependOnAllocationQuery, DependOnRoomQuery, RoomQuery,
};
use kernel::interface::update::{
    AllocationModifier, DependOnAllocationModifier, DependOnRoomModifier, RoomModifier,
};
use kernel::prelude::entity::{Bill, Nights, RoomNumber};
use kernel::{KernelError, Violation};
use tracing::info;

pub trait BillingService:
    'static
    + Sync
    + Send
    + DependOnRoomQuery
    + DependOnRoomModifier
    + DependOnAllocationQuery
    + DependOnAllocationModifier
{
    /// Charges the stay in an occupied room and frees the room.
    fn bill_room(&self, dto: CreateBillDto) -> error_stack::Result<BillDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let occupied = match RoomNumber::try_from(dto.room_number) {
            Ok(number) => self
                .room_query()
                .find_by_number(&mut connection, &number)?
                .filter(|room| !room.is_vacant()),
            Err(_) => None,
        };
        let Some(mut room) = occupied else {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(Violation::RoomNotOccupied(dto.room_number)));
        };
        let room_number = *room.number();
        let Some(allocation) = self
            .allocation_query()
            .find_by_room_number(&mut connection, &room_number)?
        else {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Room {room_number} is allocated without a customer")));
        };
        let nights = Nights::try_from(dto.nights)?;

        let bill = Bill::new(
            room_number,
            allocation.customer().clone(),
            *room.price(),
            nights,
        );
        room.release();
        self.room_modifier().update(&mut connection, room)?;
        self.allocation_modifier()
            .delete(&mut connection, &room_number)?;
        connection.commit()?;

        info!(
            "Billed room {room_number}: {nights} night(s), total {}",
            bill.total()
        );
        Ok(BillDto::from(bill))
    }
}

impl<T> BillingService for T where
    T: DependOnRoomQuery
        + DependOnRoomModifier
        + DependOnAllocationQuery
        + DependOnAllocationModifier
{
}

use error_stack::Report;
use kernel::interface::query::AllocationQuery;
use kernel::interface::update::AllocationModifier;
use kernel::prelude::entity::{Allocation, RoomNumber};
use kernel::{KernelError, Violation};
use tracing::debug;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryAllocationRepository;

impl AllocationQuery for InMemoryAllocationRepository {
    type Transaction = InMemoryTransaction;

    fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Allocation>, KernelError> {
        Ok(con.working.allocations.clone())
    }

    fn find_by_room_number(
        &self,
        con: &mut InMemoryTransaction,
        room_number: &RoomNumber,
    ) -> error_stack::Result<Option<Allocation>, KernelError> {
        Ok(con
            .working
            .allocations
            .iter()
            .find(|allocation| allocation.room_number() == room_number)
            .cloned())
    }
}

impl AllocationModifier for InMemoryAllocationRepository {
    type Transaction = InMemoryTransaction;

    fn create(
        &self,
        con: &mut InMemoryTransaction,
        allocation: Allocation,
    ) -> error_stack::Result<(), KernelError> {
        let allocations = &mut con.working.allocations;
        let room_number = *allocation.room_number();
        if allocations
            .iter()
            .any(|exist| exist.room_number() == &room_number)
        {
            return Err(Report::new(KernelError::Validation).attach_printable(
                Violation::RoomNotVacant(i64::from(*room_number.as_ref())),
            ));
        }
        debug!(
            "Allocate room {room_number} to customer {}",
            allocation.customer().number()
        );
        allocations.push(allocation);
        Ok(())
    }

    fn delete(
        &self,
        con: &mut InMemoryTransaction,
        room_number: &RoomNumber,
    ) -> error_stack::Result<(), KernelError> {
        let allocations = &mut con.working.allocations;
        let Some(position) = allocations
            .iter()
            .position(|allocation| allocation.room_number() == room_number)
        else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Room {room_number} has no allocation")));
        };
        debug!("Remove allocation of room {room_number}");
        allocations.remove(position);
        Ok(())
    }
}

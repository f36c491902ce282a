use error_stack::Report;
use kernel::interface::query::RoomQuery;
use kernel::interface::update::RoomModifier;
use kernel::prelude::entity::{Room, RoomNumber};
use kernel::{KernelError, Violation};
use tracing::debug;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryRoomRepository;

impl RoomQuery for InMemoryRoomRepository {
    type Transaction = InMemoryTransaction;

    fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        Ok(con.working.rooms.clone())
    }

    fn find_by_number(
        &self,
        con: &mut InMemoryTransaction,
        number: &RoomNumber,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        Ok(con
            .working
            .rooms
            .iter()
            .find(|room| room.number() == number)
            .cloned())
    }
}

impl RoomModifier for InMemoryRoomRepository {
    type Transaction = InMemoryTransaction;

    fn create(
        &self,
        con: &mut InMemoryTransaction,
        room: Room,
    ) -> error_stack::Result<(), KernelError> {
        let rooms = &mut con.working.rooms;
        if rooms.iter().any(|exist| exist.number() == room.number()) {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(Violation::DuplicateRoomNumber(*room.number().as_ref())));
        }
        debug!("Create room {}", room.number());
        rooms.push(room);
        Ok(())
    }

    fn update(
        &self,
        con: &mut InMemoryTransaction,
        room: Room,
    ) -> error_stack::Result<(), KernelError> {
        let Some(exist) = con
            .working
            .rooms
            .iter_mut()
            .find(|exist| exist.number() == room.number())
        else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Room {} is not registered", room.number())));
        };
        debug!("Update room {}", room.number());
        *exist = room;
        Ok(())
    }

    fn delete(
        &self,
        con: &mut InMemoryTransaction,
        number: &RoomNumber,
    ) -> error_stack::Result<(), KernelError> {
        let rooms = &mut con.working.rooms;
        let Some(position) = rooms.iter().position(|room| room.number() == number) else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Room {number} is not registered")));
        };
        debug!("Delete room {number}");
        rooms.remove(position);
        Ok(())
    }
}

use crate::transfer::{
    CheckRoomNumberDto, CreateRoomDto, DeleteRoomsDto, DeletedRoomsDto, GetRoomDto, RoomDto,
};
use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnRoomQuery, RoomQuery};
use kernel::interface::update::{DependOnRoomModifier, RoomModifier};
use kernel::prelude::entity::{IsAllocated, Room, RoomKind, RoomNumber, RoomPrice};
use kernel::{KernelError, Violation};
use tracing::info;

pub trait GetRoomService: 'static + Sync + Send + DependOnRoomQuery {
    fn get_all_rooms(&self) -> error_stack::Result<Vec<RoomDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let rooms = self.room_query().find_all(&mut connection)?;
        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }

    /// Registered room with the given number. Numbers that can never be
    /// registered (negative, out of range) simply yield `None`.
    fn get_room(&self, dto: GetRoomDto) -> error_stack::Result<Option<RoomDto>, KernelError> {
        let Ok(number) = RoomNumber::try_from(dto.number) else {
            return Ok(None);
        };
        let mut connection = self.database_connection().transact()?;
        let room = self.room_query().find_by_number(&mut connection, &number)?;
        Ok(room.map(RoomDto::from))
    }
}

impl<T> GetRoomService for T where T: DependOnRoomQuery {}

pub trait HandleRoomService:
    'static + Sync + Send + DependOnRoomQuery + DependOnRoomModifier
{
    /// Checks that `dto.number` could be registered as a new room.
    fn check_room_number(
        &self,
        dto: CheckRoomNumberDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact()?;
        let number = RoomNumber::try_from(dto.number)?;
        ensure_unregistered(self.room_query(), &mut connection, &number)
    }

    fn add_room(&self, dto: CreateRoomDto) -> error_stack::Result<RoomDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let number = RoomNumber::try_from(dto.number)?;
        ensure_unregistered(self.room_query(), &mut connection, &number)?;
        let kind = dto.kind.parse::<RoomKind>()?;
        let price = RoomPrice::try_from(dto.price)?;

        let room = Room::new(number, kind, price, IsAllocated::new(false));
        self.room_modifier().create(&mut connection, room.clone())?;
        connection.commit()?;

        info!("Added room {number} ({kind}, {price} per night)");
        Ok(RoomDto::from(room))
    }

    /// Deletes every listed room that exists and is vacant. Unknown numbers
    /// are ignored; occupied rooms are kept and reported back.
    fn delete_rooms(
        &self,
        dto: DeleteRoomsDto,
    ) -> error_stack::Result<DeletedRoomsDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let mut result = DeletedRoomsDto::default();
        let mut seen = Vec::new();
        for raw in dto.numbers {
            let Ok(number) = RoomNumber::try_from(raw) else {
                continue;
            };
            if seen.contains(&number) {
                continue;
            }
            seen.push(number);

            let Some(room) = self.room_query().find_by_number(&mut connection, &number)? else {
                continue;
            };
            if room.is_vacant() {
                self.room_modifier().delete(&mut connection, &number)?;
                result.deleted.push(number.into());
            } else {
                result.kept_allocated.push(number.into());
            }
        }
        connection.commit()?;

        info!(
            "Deleted {} room(s), kept {} allocated room(s)",
            result.deleted.len(),
            result.kept_allocated.len()
        );
        Ok(result)
    }
}

impl<T> HandleRoomService for T where T: DependOnRoomQuery + DependOnRoomModifier {}

fn ensure_unregistered<Q: RoomQuery>(
    query: &Q,
    connection: &mut Q::Transaction,
    number: &RoomNumber,
) -> error_stack::Result<(), KernelError> {
    match query.find_by_number(connection, number)? {
        Some(_) => Err(Report::new(KernelError::Validation)
            .attach_printable(Violation::DuplicateRoomNumber(*number.as_ref()))),
        None => Ok(()),
    }
}

use crate::transfer::{
    AllocationDto, CheckCustomerNumberDto, CreateAllocationDto, RoomDto, RoomStatusDto,
};
use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    AllocationQuery, CustomerQuery, DependOnAllocationQuery, DependOnCustomerQuery,
    DependOnRoomQuery, RoomQuery,
};
use kernel::interface::update::{
    AllocationModifier, CustomerModifier, DependOnAllocationModifier, DependOnCustomerModifier,
    DependOnRoomModifier, RoomModifier,
};
use kernel::prelude::entity::{Allocation, Customer, CustomerName, CustomerNumber, RoomNumber};
use kernel::{KernelError, Violation};
use tracing::info;

pub trait GetAllocationService:
    'static + Sync + Send + DependOnRoomQuery + DependOnAllocationQuery
{
    fn get_vacant_rooms(&self) -> error_stack::Result<Vec<RoomDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let rooms = self.room_query().find_all(&mut connection)?;
        Ok(rooms
            .into_iter()
            .filter(|room| room.is_vacant())
            .map(RoomDto::from)
            .collect())
    }

    fn get_occupied_rooms(&self) -> error_stack::Result<Vec<RoomDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let rooms = self.room_query().find_all(&mut connection)?;
        Ok(rooms
            .into_iter()
            .filter(|room| !room.is_vacant())
            .map(RoomDto::from)
            .collect())
    }

    /// One entry per registered room, in registration order.
    fn get_room_statuses(&self) -> error_stack::Result<Vec<RoomStatusDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let rooms = self.room_query().find_all(&mut connection)?;
        let allocations = self.allocation_query().find_all(&mut connection)?;

        Ok(rooms
            .into_iter()
            .map(|room| {
                let occupant = if room.is_vacant() {
                    None
                } else {
                    allocations
                        .iter()
                        .find(|allocation| allocation.room_number() == room.number())
                        .cloned()
                        .map(AllocationDto::from)
                };
                RoomStatusDto {
                    room_number: (*room.number()).into(),
                    occupant,
                }
            })
            .collect())
    }
}

impl<T> GetAllocationService for T where T: DependOnRoomQuery + DependOnAllocationQuery {}

pub trait HandleAllocationService:
    'static
    + Sync
    + Send
    + DependOnRoomQuery
    + DependOnRoomModifier
    + DependOnCustomerQuery
    + DependOnCustomerModifier
    + DependOnAllocationModifier
{
    /// Checks that `dto.customer_number` has not been used yet.
    fn check_customer_number(
        &self,
        dto: CheckCustomerNumberDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact()?;
        let number = CustomerNumber::try_from(dto.customer_number)?;
        if self.customer_query().is_registered(&mut connection, &number)? {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(Violation::DuplicateCustomerNumber(*number.as_ref())));
        }
        Ok(())
    }

    fn allocate_room(
        &self,
        dto: CreateAllocationDto,
    ) -> error_stack::Result<AllocationDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let vacant = match RoomNumber::try_from(dto.room_number) {
            Ok(number) => self
                .room_query()
                .find_by_number(&mut connection, &number)?
                .filter(|room| room.is_vacant()),
            Err(_) => None,
        };
        let Some(mut room) = vacant else {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(Violation::RoomNotVacant(dto.room_number)));
        };

        let customer_number = CustomerNumber::try_from(dto.customer_number)?;
        if self
            .customer_query()
            .is_registered(&mut connection, &customer_number)?
        {
            return Err(Report::new(KernelError::Validation).attach_printable(
                Violation::DuplicateCustomerNumber(*customer_number.as_ref()),
            ));
        }
        let customer_name = CustomerName::try_from(dto.customer_name)?;

        let room_number = *room.number();
        room.allocate();
        self.room_modifier().update(&mut connection, room)?;
        self.customer_modifier()
            .register(&mut connection, &customer_number)?;
        let allocation = Allocation::new(room_number, Customer::new(customer_number, customer_name));
        self.allocation_modifier()
            .create(&mut connection, allocation.clone())?;
        connection.commit()?;

        info!("Allocated room {room_number} to customer {customer_number}");
        Ok(AllocationDto::from(allocation))
    }
}

impl<T> HandleAllocationService for T where
    T: DependOnRoomQuery
        + DependOnRoomModifier
        + DependOnCustomerQuery
        + DependOnCustomerModifier
        + DependOnAllocationModifier
{
}

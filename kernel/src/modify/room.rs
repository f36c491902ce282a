use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Room, RoomNumber};
use crate::KernelError;

pub trait RoomModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    fn create(&self, con: &mut Self::Transaction, room: Room)
        -> error_stack::Result<(), KernelError>;
    fn update(&self, con: &mut Self::Transaction, room: Room)
        -> error_stack::Result<(), KernelError>;
    fn delete(
        &self,
        con: &mut Self::Transaction,
        number: &RoomNumber,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRoomModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RoomModifier: RoomModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn room_modifier(&self) -> &Self::RoomModifier;
}

use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Room, RoomNumber};
use crate::KernelError;

pub trait RoomQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Every room in registration order.
    fn find_all(&self, con: &mut Self::Transaction)
        -> error_stack::Result<Vec<Room>, KernelError>;
    fn find_by_number(
        &self,
        con: &mut Self::Transaction,
        number: &RoomNumber,
    ) -> error_stack::Result<Option<Room>, KernelError>;
}

pub trait DependOnRoomQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RoomQuery: RoomQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn room_query(&self) -> &Self::RoomQuery;
}

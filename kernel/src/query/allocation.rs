use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Allocation, RoomNumber};
use crate::KernelError;

pub trait AllocationQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Allocation>, KernelError>;
    fn find_by_room_number(
        &self,
        con: &mut Self::Transaction,
        room_number: &RoomNumber,
    ) -> error_stack::Result<Option<Allocation>, KernelError>;
}

pub trait DependOnAllocationQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type AllocationQuery: AllocationQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn allocation_query(&self) -> &Self::AllocationQuery;
}

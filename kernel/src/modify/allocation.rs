use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Allocation, RoomNumber};
use crate::KernelError;

pub trait AllocationModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    fn create(
        &self,
        con: &mut Self::Transaction,
        allocation: Allocation,
    ) -> error_stack::Result<(), KernelError>;
    fn delete(
        &self,
        con: &mut Self::Transaction,
        room_number: &RoomNumber,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAllocationModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type AllocationModifier: AllocationModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn allocation_modifier(&self) -> &Self::AllocationModifier;
}

use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::CustomerNumber;
use crate::KernelError;

pub trait CustomerModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    fn register(
        &self,
        con: &mut Self::Transaction,
        number: &CustomerNumber,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCustomerModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CustomerModifier: CustomerModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn customer_modifier(&self) -> &Self::CustomerModifier;
}

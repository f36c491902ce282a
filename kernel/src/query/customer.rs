use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::CustomerNumber;
use crate::KernelError;

pub trait CustomerQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    fn is_registered(
        &self,
        con: &mut Self::Transaction,
        number: &CustomerNumber,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnCustomerQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CustomerQuery: CustomerQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn customer_query(&self) -> &Self::CustomerQuery;
}

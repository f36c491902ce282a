use crate::KernelError;

pub trait DatabaseConnection: 'static + Sync + Send {
    type Transaction: Transaction;
    fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError>;
}

pub trait DependOnDatabaseConnection: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T> DependOnDatabaseConnection for T
where
    T: DatabaseConnection,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

/// Unit of work over the store. Changes become visible only on [`commit`].
///
/// [`commit`]: Transaction::commit
pub trait Transaction: 'static + Sync + Send {
    fn commit(self) -> error_stack::Result<(), KernelError>;
    fn roll_back(self) -> error_stack::Result<(), KernelError>;
}

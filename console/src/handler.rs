use driver::database::{InMemoryAllocationRepository, InMemoryDatabase};
use driver::journal::TextFileJournal;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::journal::DependOnAllocationJournal;
use kernel::interface::query::DependOnAllocationQuery;
use kernel::KernelError;
use vodca::References;

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
    journal: TextFileJournal,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let database = InMemoryDatabase::new();
        let journal = TextFileJournal::new()?;

        Ok(Self::new(database, journal))
    }

    pub fn new(database: InMemoryDatabase, journal: TextFileJournal) -> Self {
        Self { database, journal }
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnAllocationQuery for Handler {
    type AllocationQuery = InMemoryAllocationRepository;
    fn allocation_query(&self) -> &Self::AllocationQuery {
        self.database.allocation_query()
    }
}

impl DependOnAllocationJournal for Handler {
    type AllocationJournal = TextFileJournal;
    fn allocation_journal(&self) -> &Self::AllocationJournal {
        &self.journal
    }
}

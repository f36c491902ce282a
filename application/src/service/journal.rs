use crate::transfer::{BackupDto, JournalContentDto, SavedJournalDto};
use kernel::interface::database::DatabaseConnection;
use kernel::interface::journal::{AllocationJournal, DependOnAllocationJournal};
use kernel::interface::query::{AllocationQuery, DependOnAllocationQuery};
use kernel::prelude::entity::CapturedAt;
use kernel::KernelError;

pub trait JournalService:
    'static + Sync + Send + DependOnAllocationQuery + DependOnAllocationJournal
{
    /// Writes every active allocation to the journal, replacing its content.
    fn save_allocations(&self) -> error_stack::Result<SavedJournalDto, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let allocations = self.allocation_query().find_all(&mut connection)?;

        let journal = self.allocation_journal();
        journal.save(&allocations, &CapturedAt::now())?;
        Ok(SavedJournalDto {
            path: journal.location().to_path_buf(),
            entries: allocations.len(),
        })
    }

    fn load_allocations(&self) -> error_stack::Result<JournalContentDto, KernelError> {
        let journal = self.allocation_journal();
        let content = journal.load()?;
        Ok(JournalContentDto {
            path: journal.location().to_path_buf(),
            content,
        })
    }

    fn backup_allocations(&self) -> error_stack::Result<BackupDto, KernelError> {
        let journal = self.allocation_journal();
        let backup = journal.backup(&CapturedAt::now())?;
        Ok(BackupDto {
            path: journal.location().to_path_buf(),
            backup,
        })
    }
}

impl<T> JournalService for T where T: DependOnAllocationQuery + DependOnAllocationJournal {}

use std::path::{Path, PathBuf};

use crate::entity::{Allocation, CapturedAt};
use crate::KernelError;

/// Flat-file record of the allocation ledger.
pub trait AllocationJournal: 'static + Sync + Send {
    fn location(&self) -> &Path;

    /// Replaces the journal content with the header followed by one block
    /// per allocation, all stamped with `captured_at`.
    fn save(
        &self,
        allocations: &[Allocation],
        captured_at: &CapturedAt,
    ) -> error_stack::Result<(), KernelError>;

    /// Raw journal text.
    fn load(&self) -> error_stack::Result<String, KernelError>;

    /// Copies the journal into a timestamp-named file and resets the
    /// journal to the header only. Returns the path of the copy.
    fn backup(&self, taken_at: &CapturedAt) -> error_stack::Result<PathBuf, KernelError>;
}

pub trait DependOnAllocationJournal: 'static + Sync + Send {
    type AllocationJournal: AllocationJournal;
    fn allocation_journal(&self) -> &Self::AllocationJournal;
}

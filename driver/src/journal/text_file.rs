use std::env::VarError;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use kernel::interface::journal::AllocationJournal;
use kernel::prelude::entity::{Allocation, CapturedAt};
use kernel::KernelError;
use time::macros::format_description;
use tracing::{debug, info};

use crate::env;
use crate::error::{ConvertError, DriverError};

static DATA_FILE: &str = "LHMS_DATA_FILE";
static DEFAULT_FILE_NAME: &str = "LHMS_764707603.txt";

pub const JOURNAL_HEADER: &str = "\t #### LANGHAM HOTEL MANAGEMENT SYSTEM ####\n";
pub const ENTRY_SEPARATOR: &str = "****************************************";

/// Allocation journal stored as a human-readable text file.
pub struct TextFileJournal {
    path: PathBuf,
}

impl TextFileJournal {
    /// Uses `LHMS_DATA_FILE` when set, otherwise `LHMS_764707603.txt` in
    /// the working directory.
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let path = match env(DATA_FILE) {
            Ok(path) => PathBuf::from(path),
            Err(DriverError::Env(dotenvy::Error::EnvVar(VarError::NotPresent))) => {
                std::env::current_dir()
                    .convert_error()?
                    .join(DEFAULT_FILE_NAME)
            }
            Err(error) => return Err::<Self, _>(error).convert_error(),
        };
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn backup_path(&self, taken_at: &CapturedAt) -> error_stack::Result<PathBuf, KernelError> {
        let stem = self
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "LHMS".to_string());
        let stamp = taken_at
            .as_ref()
            .format(format_description!(
                "[month]-[day]-[year]_[hour].[minute].[second]"
            ))
            .convert_error()?;
        Ok(self.path.with_file_name(format!("{stem}_Backup_{stamp}.txt")))
    }
}

/// Renders the full journal text for `allocations`.
pub fn render_journal(
    allocations: &[Allocation],
    captured_at: &CapturedAt,
) -> error_stack::Result<String, KernelError> {
    let date = captured_at
        .as_ref()
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .convert_error()?;
    let mut text = String::from(JOURNAL_HEADER);
    for allocation in allocations {
        let customer = allocation.customer();
        write!(
            text,
            "\nRoom Number: {}\nCustomer Number: {}\nCustomer Name: {}\nDate: {date}\n{ENTRY_SEPARATOR}",
            allocation.room_number(),
            customer.number(),
            customer.name(),
        )
        .map_err(|error| Report::new(error).change_context(KernelError::Internal))?;
    }
    Ok(text)
}

impl AllocationJournal for TextFileJournal {
    fn location(&self) -> &Path {
        &self.path
    }

    fn save(
        &self,
        allocations: &[Allocation],
        captured_at: &CapturedAt,
    ) -> error_stack::Result<(), KernelError> {
        let text = render_journal(allocations, captured_at)?;
        fs::write(&self.path, text)
            .convert_error()
            .attach_printable_lazy(|| format!("Path: {}", self.path.display()))?;
        info!(
            "Saved {} allocation(s) to {}",
            allocations.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> error_stack::Result<String, KernelError> {
        let text = fs::read_to_string(&self.path)
            .convert_error()
            .attach_printable_lazy(|| format!("Path: {}", self.path.display()))?;
        debug!("Loaded {} byte(s) from {}", text.len(), self.path.display());
        Ok(text)
    }

    fn backup(&self, taken_at: &CapturedAt) -> error_stack::Result<PathBuf, KernelError> {
        let content = self.load()?;
        let backup = self.backup_path(taken_at)?;
        fs::write(&backup, content)
            .convert_error()
            .attach_printable_lazy(|| format!("Path: {}", backup.display()))?;
        fs::write(&self.path, JOURNAL_HEADER)
            .convert_error()
            .attach_printable_lazy(|| format!("Path: {}", self.path.display()))?;
        info!(
            "Backed up {} to {} and cleared it",
            self.path.display(),
            backup.display()
        );
        Ok(backup)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::journal::AllocationJournal;
    use kernel::prelude::entity::{
        Allocation, CapturedAt, Customer, CustomerName, CustomerNumber, RoomNumber,
    };
    use kernel::KernelError;
    use time::macros::datetime;

    use super::{TextFileJournal, JOURNAL_HEADER};

    fn allocation(room: u32, customer: u32, name: &str) -> Allocation {
        Allocation::new(
            RoomNumber::new(room),
            Customer::new(CustomerNumber::new(customer), CustomerName::new(name)),
        )
    }

    fn captured_at() -> CapturedAt {
        CapturedAt::new(datetime!(2024-07-13 09:05:07 UTC))
    }

    #[test]
    fn save_writes_header_and_one_block_per_allocation() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let journal = TextFileJournal::with_path(dir.path().join("LHMS_1.txt"));
        journal.save(
            &[allocation(101, 5, "Ana"), allocation(102, 6, "Luis")],
            &captured_at(),
        )?;

        let expected = format!(
            "{JOURNAL_HEADER}\
             \nRoom Number: 101\nCustomer Number: 5\nCustomer Name: Ana\nDate: 2024-07-13 09:05:07\n{stars}\
             \nRoom Number: 102\nCustomer Number: 6\nCustomer Name: Luis\nDate: 2024-07-13 09:05:07\n{stars}",
            stars = "*".repeat(40),
        );
        assert_eq!(journal.load()?, expected);
        Ok(())
    }

    #[test]
    fn save_overwrites_previous_content() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let journal = TextFileJournal::with_path(dir.path().join("LHMS_1.txt"));
        journal.save(&[allocation(101, 5, "Ana")], &captured_at())?;
        journal.save(&[], &captured_at())?;
        assert_eq!(journal.load()?, JOURNAL_HEADER);
        Ok(())
    }

    #[test]
    fn load_of_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let journal = TextFileJournal::with_path(dir.path().join("missing.txt"));
        let report = journal.load().unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }

    #[test]
    fn backup_moves_content_and_leaves_header() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let journal = TextFileJournal::with_path(dir.path().join("LHMS_1.txt"));
        journal.save(&[allocation(101, 5, "Ana")], &captured_at())?;
        let before = journal.load()?;

        let backup = journal.backup(&captured_at())?;

        assert_eq!(
            backup.file_name().and_then(|name| name.to_str()),
            Some("LHMS_1_Backup_07-13-2024_09.05.07.txt")
        );
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), before);
        assert_eq!(journal.load()?, JOURNAL_HEADER);
        Ok(())
    }

    #[test]
    fn backup_of_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let journal = TextFileJournal::with_path(dir.path().join("missing.txt"));
        let report = journal.backup(&captured_at()).unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
        assert!(!dir.path().join("missing.txt").exists());
    }
}

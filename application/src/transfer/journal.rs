use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedJournalDto {
    pub path: PathBuf,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalContentDto {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupDto {
    pub path: PathBuf,
    pub backup: PathBuf,
}

use std::path::Path;

use crate::controller::Exhaust;
use application::transfer::{BackupDto, JournalContentDto, SavedJournalDto};

pub struct JournalPresenter;

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Exhaust<SavedJournalDto> for JournalPresenter {
    type To = Vec<String>;
    fn emit(&self, input: SavedJournalDto) -> Self::To {
        vec![format!(
            "Room allocations saved as '{}' successfully.",
            file_label(&input.path)
        )]
    }
}

impl Exhaust<JournalContentDto> for JournalPresenter {
    type To = Vec<String>;
    fn emit(&self, input: JournalContentDto) -> Self::To {
        vec![input.content]
    }
}

impl Exhaust<BackupDto> for JournalPresenter {
    type To = Vec<String>;
    fn emit(&self, input: BackupDto) -> Self::To {
        vec![
            format!("Content of '{}' eliminated successfully.", file_label(&input.path)),
            format!("Backup created successfully as '{}'.", file_label(&input.backup)),
        ]
    }
}

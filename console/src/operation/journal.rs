use std::io::{BufRead, Write};

use application::service::JournalService;
use tracing::warn;

use crate::controller::Controller;
use crate::error::PromptError;
use crate::menu::Console;
use crate::response::JournalPresenter;

pub trait JournalOperation {
    fn save_allocations(&mut self) -> error_stack::Result<(), PromptError>;
    fn show_saved_allocations(&mut self) -> error_stack::Result<(), PromptError>;
    fn backup_allocations(&mut self) -> error_stack::Result<(), PromptError>;
}

impl<R: BufRead, W: Write> JournalOperation for Console<R, W> {
    fn save_allocations(&mut self) -> error_stack::Result<(), PromptError> {
        self.prompt
            .say(" ### SAVE ROOM ALLOCATIONS TO FILE ### \n")?;
        let handler = &self.handler;
        match Controller::new((), JournalPresenter).bypass(|| handler.save_allocations()) {
            Ok(lines) => self.prompt.say_all(lines),
            Err(report) => {
                warn!("Saving allocations failed: {report:?}");
                self.prompt.say("An error occurred while saving the file.")
            }
        }
    }

    fn show_saved_allocations(&mut self) -> error_stack::Result<(), PromptError> {
        self.prompt.say(" ### SHOW ROOM ALLOCATIONS ### \n")?;
        let handler = &self.handler;
        let content =
            Controller::new((), JournalPresenter).bypass(|| handler.load_allocations());
        self.present(content)
    }

    fn backup_allocations(&mut self) -> error_stack::Result<(), PromptError> {
        self.prompt.say(" ### BACKUP ### \n")?;
        let handler = &self.handler;
        let backup =
            Controller::new((), JournalPresenter).bypass(|| handler.backup_allocations());
        self.present(backup)
    }
}

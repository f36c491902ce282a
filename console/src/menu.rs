use std::io::{BufRead, Write};

use error_stack::Report;
use kernel::KernelError;
use tracing::{debug, warn};

use crate::error::{Feedback, PromptError};
use crate::handler::Handler;
use crate::operation::{AllocationOperation, JournalOperation, RoomOperation};
use crate::prompt::{Prompt, INVALID_NUMBER};

const BORDER: &str =
    "**********************************************************************";

const MENU_ITEMS: [&str; 10] = [
    "0. Exit",
    "1. Add Rooms",
    "2. Delete Rooms",
    "3. Display Rooms Details",
    "4. Allocate Rooms",
    "5. Display Room Allocation Details",
    "6. Billing & De-Allocation",
    "7. Save the Room Allocations in the database",
    "8. Load the Room Allocations from the database",
    "9. Backup of Room Allocations",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddRooms,
    DeleteRooms,
    DisplayRooms,
    AllocateRoom,
    DisplayAllocations,
    Billing,
    SaveAllocations,
    LoadAllocations,
    BackupAllocations,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let choice = match value {
            0 => MenuChoice::Exit,
            1 => MenuChoice::AddRooms,
            2 => MenuChoice::DeleteRooms,
            3 => MenuChoice::DisplayRooms,
            4 => MenuChoice::AllocateRoom,
            5 => MenuChoice::DisplayAllocations,
            6 => MenuChoice::Billing,
            7 => MenuChoice::SaveAllocations,
            8 => MenuChoice::LoadAllocations,
            9 => MenuChoice::BackupAllocations,
            other => return Err(other),
        };
        Ok(choice)
    }
}

/// Interactive session over one input and one output stream.
pub struct Console<R, W> {
    pub(crate) handler: Handler,
    pub(crate) prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(handler: Handler, input: R, output: W) -> Self {
        Self {
            handler,
            prompt: Prompt::new(input, output),
        }
    }

    /// Shows the menu until the operator exits or input runs out.
    pub fn run(&mut self) -> error_stack::Result<(), PromptError> {
        loop {
            self.show_menu()?;
            let answer = match self.prompt.ask_text("Enter your choice number here (0-9): ") {
                Ok(answer) => answer,
                Err(report) if is_closed(&report) => break,
                Err(report) => return Err(report),
            };
            let Ok(number) = answer.trim().parse::<i64>() else {
                self.prompt.say(INVALID_NUMBER)?;
                continue;
            };
            let choice = match MenuChoice::try_from(number) {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => choice,
                Err(_) => {
                    self.prompt
                        .say("\nInvalid choice, please enter a number between 0 and 9\n")?;
                    continue;
                }
            };

            debug!("Menu choice {choice:?}");
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(report) if is_closed(&report) => break,
                Err(report) => return Err(report),
            }
        }
        self.prompt.say("Exiting the program...")
    }

    fn show_menu(&mut self) -> error_stack::Result<(), PromptError> {
        self.prompt.say("\n")?;
        self.prompt.say("\n")?;
        self.prompt.say(BORDER)?;
        self.prompt
            .say("                 LANGHAM HOTEL MANAGEMENT SYSTEM             ")?;
        self.prompt
            .say("                              MENU                        ")?;
        self.prompt.say(BORDER)?;
        self.prompt
            .say_all(MENU_ITEMS.iter().map(|item| item.to_string()))?;
        self.prompt.say(BORDER)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> error_stack::Result<(), PromptError> {
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::AddRooms => self.add_rooms(),
            MenuChoice::DeleteRooms => self.delete_rooms(),
            MenuChoice::DisplayRooms => self.display_rooms(),
            MenuChoice::AllocateRoom => self.allocate_room(),
            MenuChoice::DisplayAllocations => self.display_allocations(),
            MenuChoice::Billing => self.bill_room(),
            MenuChoice::SaveAllocations => self.save_allocations(),
            MenuChoice::LoadAllocations => self.show_saved_allocations(),
            MenuChoice::BackupAllocations => self.backup_allocations(),
        }
    }

    pub(crate) fn present(
        &mut self,
        result: error_stack::Result<Vec<String>, KernelError>,
    ) -> error_stack::Result<(), PromptError> {
        match result {
            Ok(lines) => self.prompt.say_all(lines),
            Err(report) => self.report(&report),
        }
    }

    pub(crate) fn report(
        &mut self,
        report: &Report<KernelError>,
    ) -> error_stack::Result<(), PromptError> {
        warn!("Operation failed: {report:?}");
        self.prompt.say(Feedback(report))
    }
}

fn is_closed(report: &Report<PromptError>) -> bool {
    matches!(report.current_context(), PromptError::Closed)
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::path::Path;

    use driver::database::InMemoryDatabase;
    use driver::journal::{TextFileJournal, JOURNAL_HEADER};

    use super::{Console, MenuChoice};
    use crate::handler::Handler;

    fn session(input: impl AsRef<[u8]>, journal: &Path) -> String {
        let mut output = Vec::new();
        let handler = Handler::new(InMemoryDatabase::new(), TextFileJournal::with_path(journal));
        Console::new(handler, input.as_ref(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn menu_numbers() {
        assert_eq!(MenuChoice::try_from(0), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::try_from(9), Ok(MenuChoice::BackupAllocations));
        assert_eq!(MenuChoice::try_from(10), Err(10));
        assert_eq!(MenuChoice::try_from(-1), Err(-1));
    }

    #[test]
    fn allocate_and_bill_a_room() {
        let dir = tempfile::tempdir().unwrap();
        let printed = session(
            "1\n1\n101\nSingle\n300\n4\n101\n1\nAna\n6\n101\n1\n0\n",
            &dir.path().join("LHMS_test.txt"),
        );

        assert!(printed.contains("Room 101 (Single, 300.0 per night) added successfully."));
        assert!(printed.contains("Room 101 allocated to Ana successfully."));
        assert!(printed.contains("The billing per night is: 300.0"));
        assert!(printed.contains("The total billing is: 300.0"));
        assert!(printed.contains("Room 101 deallocated successfully."));
        assert!(printed.ends_with("Exiting the program...\n"));
    }

    #[test]
    fn duplicate_room_number_is_asked_again() {
        let dir = tempfile::tempdir().unwrap();
        let printed = session(
            "1\n2\n200\nDouble\n150\n200\n201\nsuite\n0\n500\n0\n",
            &dir.path().join("LHMS_test.txt"),
        );

        assert_eq!(
            printed
                .matches("Room number already exists. Please enter a different room number.")
                .count(),
            1
        );
        assert!(printed.contains("Room 200 (Double, 150.0 per night) added successfully."));
        assert!(printed.contains("Room 201 (Suite, 500.0 per night) added successfully."));
    }

    #[test]
    fn rejected_answers_are_asked_again() {
        let dir = tempfile::tempdir().unwrap();
        let printed = session(
            "1\n1\n101\nLoft\nSingle\n0\n-5\nNaN\n300\n4\n102\n101\n1\nAna\n6\n7\n101\n0\n-5\n2\n0\n",
            &dir.path().join("LHMS_test.txt"),
        );

        assert_eq!(
            printed
                .matches("Enter the type of room 1 (Single, Double, Suite): ")
                .count(),
            2
        );
        assert_eq!(
            printed
                .matches("Enter the price per night of the room 1: ")
                .count(),
            4
        );
        assert!(printed.contains("Room 101 (Single, 300.0 per night) added successfully."));

        assert_eq!(
            printed
                .matches("Enter the room number you want to allocate: ")
                .count(),
            2
        );
        assert_eq!(printed.matches("Enter the room number: ").count(), 2);
        assert_eq!(printed.matches("Please enter a valid room number.").count(), 1);
        assert_eq!(
            printed
                .matches("Please enter a number of nights greater than zero.")
                .count(),
            2
        );
        assert!(printed.contains("The total billing is: 600.0"));
        assert!(printed.ends_with("Exiting the program...\n"));
    }

    #[test]
    fn undecodable_name_does_not_end_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = b"1\n1\n101\nSingle\n300\n4\n101\n1\n".to_vec();
        input.extend_from_slice(b"An\xffa\nAna\n0\n");
        let printed = session(input, &dir.path().join("LHMS_test.txt"));

        assert!(printed.contains("Please enter the answer again using plain text."));
        assert!(printed.contains("Room 101 allocated to Ana successfully."));
        assert!(printed.ends_with("Exiting the program...\n"));
    }

    #[test]
    fn bad_choices_return_to_the_menu() {
        let dir = tempfile::tempdir().unwrap();
        let printed = session("12\nabc\n0\n", &dir.path().join("LHMS_test.txt"));

        assert!(printed.contains("Invalid choice, please enter a number between 0 and 9"));
        assert!(printed.contains("Please enter a valid number."));
        assert_eq!(printed.matches("LANGHAM HOTEL MANAGEMENT SYSTEM").count(), 3);
        assert!(printed.ends_with("Exiting the program...\n"));
    }

    #[test]
    fn closed_input_exits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LHMS_test.txt");

        assert!(session("", &path).ends_with("Exiting the program...\n"));
        assert!(session("1\n2\n101\n", &path).ends_with("Exiting the program...\n"));
    }

    #[test]
    fn nothing_to_allocate_or_bill() {
        let dir = tempfile::tempdir().unwrap();
        let printed = session("2\n4\n6\n0\n", &dir.path().join("LHMS_test.txt"));

        assert!(printed.contains("No rooms available to delete."));
        assert!(printed.contains("No rooms available to allocate."));
        assert!(printed.contains("No rooms available to deallocate."));
    }

    #[test]
    fn delete_keeps_allocated_rooms() {
        let dir = tempfile::tempdir().unwrap();
        let printed = session(
            "1\n2\n101\nSingle\n100\n102\nDouble\n200\n4\n101\n5\nBea\n2\n101\n999\n102\n-1\n5\n0\n",
            &dir.path().join("LHMS_test.txt"),
        );

        assert!(printed.contains("Please enter a valid room number."));
        assert!(printed.contains("Room 101 is allocated and was not deleted."));
        assert!(printed.contains(" 1 Rooms deleted successfully."));
        assert!(printed.contains("The room is allocated."));
        assert!(!printed.contains("     Room Number: 102"));
    }

    #[test]
    fn save_load_and_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LHMS_test.txt");
        let printed = session(
            "1\n1\n101\nSingle\n300\n4\n101\n7\nAna\n7\n8\n9\n0\n",
            &path,
        );

        assert!(printed.contains("Room allocations saved as 'LHMS_test.txt' successfully."));
        assert!(printed.contains("Customer Name: Ana"));
        assert!(printed.contains("Content of 'LHMS_test.txt' eliminated successfully."));
        assert!(printed.contains("Backup created successfully as 'LHMS_test_Backup_"));
        assert_eq!(fs::read_to_string(&path).unwrap(), JOURNAL_HEADER);

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().contains("_Backup_"))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn load_before_save_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let printed = session("8\n9\n0\n", &dir.path().join("LHMS_test.txt"));

        assert_eq!(
            printed
                .matches("File not found. Try saving the room allocations first.")
                .count(),
            2
        );
    }
}

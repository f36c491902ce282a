use std::fmt::{Display, Formatter};
use std::process::{ExitCode, Termination};

use error_stack::{Context, Report};
use kernel::{KernelError, Violation};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Failure talking to the operator.
#[derive(Debug)]
pub enum PromptError {
    /// Input reached end of file.
    Closed,
    Io,
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Closed => write!(f, "Operator input was closed"),
            PromptError::Io => write!(f, "Failed to talk to the operator"),
        }
    }
}

impl Context for PromptError {}

/// Operator-facing message for a failed operation.
pub struct Feedback<'a>(pub &'a Report<KernelError>);

impl Display for Feedback<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(violation) = self.0.downcast_ref::<Violation>() {
            return match violation {
                Violation::DuplicateRoomNumber(_) => write!(
                    f,
                    "Room number already exists. Please enter a different room number."
                ),
                Violation::NegativeRoomNumber(_)
                | Violation::RoomNotVacant(_)
                | Violation::RoomNotOccupied(_) => write!(f, "Please enter a valid room number."),
                Violation::TooLarge(_) => write!(f, "Please enter a valid number."),
                Violation::UnknownRoomKind(_) => {
                    write!(f, "Please enter a valid type (Single, Double, Suite).")
                }
                Violation::NonPositivePrice(_) => {
                    write!(f, "Please enter a price greater than zero.")
                }
                Violation::NegativeCustomerNumber(_) => {
                    write!(f, "Please enter a valid customer number.")
                }
                Violation::DuplicateCustomerNumber(_) => write!(
                    f,
                    "\nCustomer number already exists. Please enter a different customer number."
                ),
                Violation::BlankCustomerName => write!(f, "Please enter the customer name."),
                Violation::NonPositiveNights(_) => {
                    write!(f, "Please enter a number of nights greater than zero.")
                }
            };
        }
        match self.0.current_context() {
            KernelError::NotFound => {
                write!(f, "File not found. Try saving the room allocations first.")
            }
            KernelError::Io => write!(f, "An error occurred while accessing the file."),
            KernelError::Validation | KernelError::Internal => {
                write!(f, "The operation could not be completed: {}", self.0.current_context())
            }
        }
    }
}

use std::io::{BufRead, Write};

use application::service::{BillingService, GetAllocationService, HandleAllocationService};
use application::transfer::{CheckCustomerNumberDto, RoomDto};

use crate::controller::Controller;
use crate::error::{Feedback, PromptError};
use crate::menu::Console;
use crate::request::{AllocateRequest, AllocationTransformer, BillRequest};
use crate::response::AllocationPresenter;

const INVALID_ROOM: &str = "Please enter a valid room number.";

pub trait AllocationOperation {
    fn allocate_room(&mut self) -> error_stack::Result<(), PromptError>;
    fn display_allocations(&mut self) -> error_stack::Result<(), PromptError>;
    fn bill_room(&mut self) -> error_stack::Result<(), PromptError>;
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Asks until the answer is one of `rooms`, printing `rejected` after a
    /// number that is not listed.
    fn ask_listed_room(
        &mut self,
        question: &str,
        rooms: &[RoomDto],
        rejected: Option<&str>,
    ) -> error_stack::Result<i64, PromptError> {
        loop {
            let number = self.prompt.ask_number::<i64>(question)?;
            if rooms.iter().any(|room| i64::from(room.number) == number) {
                return Ok(number);
            }
            if let Some(message) = rejected {
                self.prompt.say(message)?;
            }
        }
    }
}

impl<R: BufRead, W: Write> AllocationOperation for Console<R, W> {
    fn allocate_room(&mut self) -> error_stack::Result<(), PromptError> {
        let vacant = match self.handler.database().get_vacant_rooms() {
            Ok(rooms) => rooms,
            Err(report) => return self.report(&report),
        };

        self.prompt.say(" ### ALLOCATE ROOM ### \n")?;
        self.prompt.say("List of not allocated Rooms: \n")?;
        if vacant.is_empty() {
            return self.prompt.say("No rooms available to allocate.");
        }
        self.prompt.say_all(
            vacant
                .iter()
                .map(|room| format!("* Room Number: {}", room.number)),
        )?;

        let room_number = self.ask_listed_room(
            "Enter the room number you want to allocate: ",
            &vacant,
            None,
        )?;
        let customer_number = loop {
            let customer_number = self
                .prompt
                .ask_number::<i64>("Enter the customer number: ")?;
            match self
                .handler
                .database()
                .check_customer_number(CheckCustomerNumberDto { customer_number })
            {
                Ok(()) => break customer_number,
                Err(report) => self.prompt.say(Feedback(&report))?,
            }
        };
        let customer_name = loop {
            let name = self.prompt.ask_text("Enter the customer name: ")?;
            if !name.trim().is_empty() {
                break name;
            }
            self.prompt.say("Please enter the customer name.")?;
        };

        let handler = &self.handler;
        let allocated = Controller::new(AllocationTransformer, AllocationPresenter)
            .intake(AllocateRequest {
                room_number,
                customer_number,
                customer_name,
            })
            .handle(|dto| handler.database().allocate_room(dto));
        self.present(allocated)
    }

    fn display_allocations(&mut self) -> error_stack::Result<(), PromptError> {
        let handler = &self.handler;
        let statuses = Controller::new((), AllocationPresenter)
            .bypass(|| handler.database().get_room_statuses());
        self.present(statuses)
    }

    fn bill_room(&mut self) -> error_stack::Result<(), PromptError> {
        let occupied = match self.handler.database().get_occupied_rooms() {
            Ok(rooms) => rooms,
            Err(report) => return self.report(&report),
        };

        self.prompt.say(" ### BILLING & DEALLOCATION ### \n")?;
        self.prompt.say("List of Rooms already allocated: \n")?;
        if occupied.is_empty() {
            return self.prompt.say("No rooms available to deallocate.\n");
        }
        self.prompt.say_all(
            occupied
                .iter()
                .map(|room| format!("* Room Number: {}", room.number)),
        )?;

        let room_number = self.ask_listed_room(
            "Enter the room number: ",
            &occupied,
            Some(INVALID_ROOM),
        )?;
        let nights = loop {
            let nights = self
                .prompt
                .ask_number::<i64>("Enter the number of nights: ")?;
            if nights > 0 {
                break nights;
            }
            self.prompt
                .say("Please enter a number of nights greater than zero.")?;
        };

        let handler = &self.handler;
        let billed = Controller::new(AllocationTransformer, AllocationPresenter)
            .intake(BillRequest {
                room_number,
                nights,
            })
            .handle(|dto| handler.database().bill_room(dto));
        self.present(billed)
    }
}

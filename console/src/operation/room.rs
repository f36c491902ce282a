use std::io::{BufRead, Write};

use application::service::{GetRoomService, HandleRoomService};
use application::transfer::{CheckRoomNumberDto, GetRoomDto};
use kernel::prelude::entity::{RoomKind, RoomPrice};

use crate::controller::Controller;
use crate::error::{Feedback, PromptError};
use crate::menu::Console;
use crate::request::{AddRoomRequest, DeleteRoomsRequest, RoomTransformer};
use crate::response::RoomPresenter;

const STOP: i64 = -1;

pub trait RoomOperation {
    fn add_rooms(&mut self) -> error_stack::Result<(), PromptError>;
    fn delete_rooms(&mut self) -> error_stack::Result<(), PromptError>;
    fn display_rooms(&mut self) -> error_stack::Result<(), PromptError>;
}

impl<R: BufRead, W: Write> RoomOperation for Console<R, W> {
    fn add_rooms(&mut self) -> error_stack::Result<(), PromptError> {
        self.prompt.say("\n ### ADD ROOMS ### \n")?;
        let count = self
            .prompt
            .ask_number::<i64>("Enter the number of rooms you want to add: ")?;

        for index in 1..=count {
            let number = loop {
                let number = self
                    .prompt
                    .ask_number::<i64>(&format!("Enter the room number {index}: "))?;
                match self
                    .handler
                    .database()
                    .check_room_number(CheckRoomNumberDto { number })
                {
                    Ok(()) => break number,
                    Err(report) => self.prompt.say(Feedback(&report))?,
                }
            };
            let kind = loop {
                let answer = self.prompt.ask_text(&format!(
                    "Enter the type of room {index} (Single, Double, Suite): "
                ))?;
                if let Ok(kind) = answer.parse::<RoomKind>() {
                    break kind;
                }
            };
            let price = loop {
                let price = self
                    .prompt
                    .ask_number::<f64>(&format!("Enter the price per night of the room {index}: "))?;
                if RoomPrice::try_from(price).is_ok() {
                    break price;
                }
            };

            let handler = &self.handler;
            let added = Controller::new(RoomTransformer, RoomPresenter)
                .intake(AddRoomRequest {
                    number,
                    kind,
                    price,
                })
                .handle(|dto| handler.database().add_room(dto));
            self.present(added)?;
        }
        Ok(())
    }

    fn delete_rooms(&mut self) -> error_stack::Result<(), PromptError> {
        let rooms = match self.handler.database().get_all_rooms() {
            Ok(rooms) => rooms,
            Err(report) => return self.report(&report),
        };
        if rooms.is_empty() {
            return self.prompt.say("\nNo rooms available to delete.\n");
        }

        self.prompt.say("\n ### DELETE ROOMS ### \n")?;
        self.prompt.say("List of Rooms already created: ")?;
        self.prompt.say_all(
            rooms
                .iter()
                .map(|room| format!("Room Number: {}", room.number)),
        )?;

        let mut numbers = Vec::new();
        loop {
            let number = self
                .prompt
                .ask_number::<i64>("Enter the room number you want to delete (-1 to exit): ")?;
            if number == STOP {
                break;
            }
            match self.handler.database().get_room(GetRoomDto { number }) {
                Ok(Some(_)) => numbers.push(number),
                Ok(None) => self.prompt.say("Please enter a valid room number.")?,
                Err(report) => return self.report(&report),
            }
        }

        let handler = &self.handler;
        let deleted = Controller::new(RoomTransformer, RoomPresenter)
            .intake(DeleteRoomsRequest { numbers })
            .handle(|dto| handler.database().delete_rooms(dto));
        self.present(deleted)
    }

    fn display_rooms(&mut self) -> error_stack::Result<(), PromptError> {
        let handler = &self.handler;
        let rooms = Controller::new((), RoomPresenter).bypass(|| handler.database().get_all_rooms());
        self.present(rooms)
    }
}

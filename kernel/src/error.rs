use std::fmt::{Display, Formatter};

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation,
    NotFound,
    Io,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid value"),
            KernelError::NotFound => write!(f, "Requested record or file not found"),
            KernelError::Io => write!(f, "Failed to access the journal file"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Reason attached to a [`KernelError::Validation`] report.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    NegativeRoomNumber(i64),
    TooLarge(i64),
    DuplicateRoomNumber(u32),
    UnknownRoomKind(String),
    NonPositivePrice(f64),
    RoomNotVacant(i64),
    RoomNotOccupied(i64),
    NegativeCustomerNumber(i64),
    DuplicateCustomerNumber(u32),
    BlankCustomerName,
    NonPositiveNights(i64),
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::NegativeRoomNumber(number) => {
                write!(f, "Room number {number} is negative")
            }
            Violation::TooLarge(number) => write!(f, "Number {number} is too large"),
            Violation::DuplicateRoomNumber(number) => {
                write!(f, "Room number {number} already exists")
            }
            Violation::UnknownRoomKind(kind) => {
                write!(f, "Room type `{kind}` is not one of Single, Double, Suite")
            }
            Violation::NonPositivePrice(price) => {
                write!(f, "Room price {price} must be greater than zero")
            }
            Violation::RoomNotVacant(number) => {
                write!(f, "Room {number} is not an unallocated room")
            }
            Violation::RoomNotOccupied(number) => {
                write!(f, "Room {number} is not currently allocated")
            }
            Violation::NegativeCustomerNumber(number) => {
                write!(f, "Customer number {number} is negative")
            }
            Violation::DuplicateCustomerNumber(number) => {
                write!(f, "Customer number {number} already exists")
            }
            Violation::BlankCustomerName => write!(f, "Customer name is empty"),
            Violation::NonPositiveNights(nights) => {
                write!(f, "Number of nights {nights} must be greater than zero")
            }
        }
    }
}

use std::io::ErrorKind;

use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(std::io::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    TimeFormat(time::error::Format),
}

impl From<std::io::Error> for DriverError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<time::error::Format> for DriverError {
    fn from(value: time::error::Format) -> Self {
        Self::TimeFormat(value)
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                DriverError::Io(io) if io.kind() == ErrorKind::NotFound => KernelError::NotFound,
                DriverError::Io(_) => KernelError::Io,
                DriverError::Env(_) | DriverError::TimeFormat(_) => KernelError::Internal,
            };
            Report::new(error).change_context(context)
        })
    }
}

impl<T> ConvertError for Result<T, std::io::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(DriverError::from).convert_error()
    }
}

impl<T> ConvertError for Result<T, time::error::Format> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(DriverError::from).convert_error()
    }
}

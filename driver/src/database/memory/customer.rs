use error_stack::Report;
use kernel::interface::query::CustomerQuery;
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::CustomerNumber;
use kernel::{KernelError, Violation};
use tracing::debug;

use crate::database::memory::InMemoryTransaction;

/// Customer numbers stay registered for the whole session.
pub struct InMemoryCustomerRepository;

impl CustomerQuery for InMemoryCustomerRepository {
    type Transaction = InMemoryTransaction;

    fn is_registered(
        &self,
        con: &mut InMemoryTransaction,
        number: &CustomerNumber,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(con.working.customers.contains(number))
    }
}

impl CustomerModifier for InMemoryCustomerRepository {
    type Transaction = InMemoryTransaction;

    fn register(
        &self,
        con: &mut InMemoryTransaction,
        number: &CustomerNumber,
    ) -> error_stack::Result<(), KernelError> {
        let customers = &mut con.working.customers;
        if customers.contains(number) {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(Violation::DuplicateCustomerNumber(*number.as_ref())));
        }
        debug!("Register customer {number}");
        customers.push(*number);
        Ok(())
    }
}

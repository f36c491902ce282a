use std::sync::{Arc, Mutex, MutexGuard};

use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnAllocationQuery, DependOnCustomerQuery, DependOnRoomQuery,
};
use kernel::interface::update::{
    DependOnAllocationModifier, DependOnCustomerModifier, DependOnRoomModifier,
};
use kernel::prelude::entity::{Allocation, CustomerNumber, Room};
use kernel::KernelError;

pub use self::{allocation::*, customer::*, room::*};

mod allocation;
mod customer;
mod room;

/// Everything the front desk knows during a session.
#[derive(Debug, Clone, Default)]
pub struct HotelState {
    rooms: Vec<Room>,
    customers: Vec<CustomerNumber>,
    allocations: Vec<Allocation>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    state: Arc<Mutex<HotelState>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> error_stack::Result<MutexGuard<'_, HotelState>, KernelError> {
        lock(&self.state)
    }
}

fn lock(
    state: &Mutex<HotelState>,
) -> error_stack::Result<MutexGuard<'_, HotelState>, KernelError> {
    state.lock().map_err(|_| {
        Report::new(KernelError::Internal).attach_printable("Hotel state lock is poisoned")
    })
}

impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let working = self.lock()?.clone();
        Ok(InMemoryTransaction {
            working,
            origin: Arc::clone(&self.state),
        })
    }
}

/// Working copy of [`HotelState`]; published to the database on commit.
pub struct InMemoryTransaction {
    working: HotelState,
    origin: Arc<Mutex<HotelState>>,
}

impl Transaction for InMemoryTransaction {
    fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self { working, origin } = self;
        *lock(&origin)? = working;
        Ok(())
    }

    fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl DependOnRoomQuery for InMemoryDatabase {
    type RoomQuery = InMemoryRoomRepository;
    fn room_query(&self) -> &Self::RoomQuery {
        &InMemoryRoomRepository
    }
}

impl DependOnRoomModifier for InMemoryDatabase {
    type RoomModifier = InMemoryRoomRepository;
    fn room_modifier(&self) -> &Self::RoomModifier {
        &InMemoryRoomRepository
    }
}

impl DependOnCustomerQuery for InMemoryDatabase {
    type CustomerQuery = InMemoryCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &InMemoryCustomerRepository
    }
}

impl DependOnCustomerModifier for InMemoryDatabase {
    type CustomerModifier = InMemoryCustomerRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &InMemoryCustomerRepository
    }
}

impl DependOnAllocationQuery for InMemoryDatabase {
    type AllocationQuery = InMemoryAllocationRepository;
    fn allocation_query(&self) -> &Self::AllocationQuery {
        &InMemoryAllocationRepository
    }
}

impl DependOnAllocationModifier for InMemoryDatabase {
    type AllocationModifier = InMemoryAllocationRepository;
    fn allocation_modifier(&self) -> &Self::AllocationModifier {
        &InMemoryAllocationRepository
    }
}

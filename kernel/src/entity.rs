mod allocation;
mod bill;
mod common;
mod customer;
mod room;

pub use self::{allocation::*, bill::*, common::*, customer::*, room::*};

mod allocation;
mod customer;
mod room;

pub use self::{allocation::*, customer::*, room::*};

mod allocation;
mod bill;
mod journal;
mod room;

pub use self::{allocation::*, bill::*, journal::*, room::*};

mod allocation;
mod journal;
mod room;

pub use self::{allocation::*, journal::*, room::*};

mod allocation;
mod room;

pub use self::{allocation::*, room::*};

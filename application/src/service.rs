mod allocation;
mod billing;
mod journal;
mod room;

pub use self::{allocation::*, billing::*, journal::*, room::*};

mod amount;
mod time;

pub use self::{amount::*, time::*};

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;

use crate::{KernelError, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Single,
    Double,
    Suite,
}

impl RoomKind {
    pub const ALL: [RoomKind; 3] = [RoomKind::Single, RoomKind::Double, RoomKind::Suite];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Single => "Single",
            RoomKind::Double => "Double",
            RoomKind::Suite => "Suite",
        }
    }
}

impl FromStr for RoomKind {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                Report::new(KernelError::Validation)
                    .attach_printable(Violation::UnknownRoomKind(trimmed.to_string()))
            })
    }
}

impl Display for RoomKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

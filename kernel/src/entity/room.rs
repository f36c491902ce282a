mod allocated;
mod kind;
mod number;
mod price;

pub use self::{allocated::*, kind::*, number::*, price::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Room {
    number: RoomNumber,
    kind: RoomKind,
    price: RoomPrice,
    is_allocated: IsAllocated,
}

impl Room {
    pub fn new(
        number: RoomNumber,
        kind: RoomKind,
        price: RoomPrice,
        is_allocated: IsAllocated,
    ) -> Self {
        Self {
            number,
            kind,
            price,
            is_allocated,
        }
    }

    pub fn is_vacant(&self) -> bool {
        !*self.is_allocated.as_ref()
    }

    pub fn allocate(&mut self) {
        self.is_allocated = IsAllocated::new(true);
    }

    pub fn release(&mut self) {
        self.is_allocated = IsAllocated::new(false);
    }
}

#[cfg(test)]
mod test {
    use super::{IsAllocated, Room, RoomKind, RoomNumber, RoomPrice};

    #[test]
    fn allocate_and_release_toggle_vacancy() {
        let price = RoomPrice::try_from(80.0).unwrap();
        let mut room = Room::new(
            RoomNumber::new(12u32),
            RoomKind::Double,
            price,
            IsAllocated::new(false),
        );
        assert!(room.is_vacant());

        room.allocate();
        assert!(!room.is_vacant());
        assert_eq!(room.is_allocated(), &IsAllocated::new(true));

        room.release();
        assert!(room.is_vacant());
    }
}

use application::service::{
    BillingService, GetAllocationService, GetRoomService, HandleAllocationService,
    HandleRoomService,
};
use application::transfer::{
    AllocationDto, CheckCustomerNumberDto, CheckRoomNumberDto, CreateAllocationDto,
    CreateBillDto, CreateRoomDto, DeleteRoomsDto, GetRoomDto, RoomStatusDto,
};
use driver::database::InMemoryDatabase;
use kernel::prelude::entity::{Amount, RoomKind};
use kernel::{KernelError, Violation};

fn add(db: &InMemoryDatabase, number: i64, kind: &str, price: f64) {
    db.add_room(CreateRoomDto {
        number,
        kind: kind.to_string(),
        price,
    })
    .unwrap();
}

fn allocate(
    db: &InMemoryDatabase,
    room_number: i64,
    customer_number: i64,
    name: &str,
) -> error_stack::Result<AllocationDto, KernelError> {
    db.allocate_room(CreateAllocationDto {
        room_number,
        customer_number,
        customer_name: name.to_string(),
    })
}

fn violation<T>(result: error_stack::Result<T, KernelError>) -> Violation {
    let report = match result {
        Ok(_) => panic!("operation was expected to fail"),
        Err(report) => report,
    };
    assert!(matches!(report.current_context(), KernelError::Validation));
    report
        .downcast_ref::<Violation>()
        .cloned()
        .expect("validation failures carry a violation")
}

#[test]
fn allocate_then_bill_a_single_room() -> error_stack::Result<(), KernelError> {
    let db = InMemoryDatabase::new();
    add(&db, 101, "Single", 100.0);

    let allocation = allocate(&db, 101, 5, "Ana")?;
    assert_eq!(
        allocation,
        AllocationDto {
            room_number: 101,
            customer_number: 5,
            customer_name: "Ana".to_string(),
        }
    );
    assert!(db.get_room(GetRoomDto { number: 101 })?.unwrap().is_allocated);

    let bill = db.bill_room(CreateBillDto {
        room_number: 101,
        nights: 3,
    })?;
    assert_eq!(bill.nightly_rate, Amount::new(100.0));
    assert_eq!(bill.total, Amount::new(300.0));
    assert_eq!(bill.total.to_string(), "300.0");
    assert_eq!(bill.customer_name, "Ana");

    let room = db.get_room(GetRoomDto { number: 101 })?.unwrap();
    assert!(!room.is_allocated);
    assert!(db.get_room_statuses()?.iter().all(|status| status.occupant.is_none()));
    Ok(())
}

#[test]
fn duplicate_room_number_is_rejected() -> error_stack::Result<(), KernelError> {
    let db = InMemoryDatabase::new();
    add(&db, 200, "Double", 150.0);

    let duplicate = db.add_room(CreateRoomDto {
        number: 200,
        kind: "Suite".to_string(),
        price: 300.0,
    });
    assert_eq!(violation(duplicate), Violation::DuplicateRoomNumber(200));
    assert_eq!(
        violation(db.check_room_number(CheckRoomNumberDto { number: 200 })),
        Violation::DuplicateRoomNumber(200)
    );

    let rooms = db.get_all_rooms()?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].number, 200);
    assert_eq!(rooms[0].kind, RoomKind::Double);
    Ok(())
}

#[test]
fn invalid_room_values_are_rejected() {
    let db = InMemoryDatabase::new();
    let create = |number, kind: &str, price| {
        db.add_room(CreateRoomDto {
            number,
            kind: kind.to_string(),
            price,
        })
    };

    assert_eq!(violation(create(-1, "Single", 10.0)), Violation::NegativeRoomNumber(-1));
    assert_eq!(
        violation(create(1, "Loft", 10.0)),
        Violation::UnknownRoomKind("Loft".to_string())
    );
    assert_eq!(violation(create(1, "Suite", 0.0)), Violation::NonPositivePrice(0.0));
    assert!(db.get_all_rooms().unwrap().is_empty());
}

#[test]
fn room_cannot_be_allocated_twice() -> error_stack::Result<(), KernelError> {
    let db = InMemoryDatabase::new();
    add(&db, 1, "Suite", 500.0);
    allocate(&db, 1, 10, "Ana")?;

    assert_eq!(violation(allocate(&db, 1, 11, "Luis")), Violation::RoomNotVacant(1));
    assert_eq!(violation(allocate(&db, 99, 12, "Eva")), Violation::RoomNotVacant(99));
    Ok(())
}

#[test]
fn failed_allocation_leaves_state_untouched() -> error_stack::Result<(), KernelError> {
    let db = InMemoryDatabase::new();
    add(&db, 1, "Single", 80.0);
    add(&db, 2, "Single", 80.0);
    allocate(&db, 1, 7, "Ana")?;

    assert_eq!(
        violation(allocate(&db, 2, 7, "Luis")),
        Violation::DuplicateCustomerNumber(7)
    );
    assert_eq!(violation(allocate(&db, 2, 8, "   ")), Violation::BlankCustomerName);

    let vacant = db
        .get_vacant_rooms()?
        .into_iter()
        .map(|room| room.number)
        .collect::<Vec<_>>();
    assert_eq!(vacant, vec![2]);
    db.check_customer_number(CheckCustomerNumberDto { customer_number: 8 })?;
    Ok(())
}

#[test]
fn customer_numbers_stay_used_after_billing() -> error_stack::Result<(), KernelError> {
    let db = InMemoryDatabase::new();
    add(&db, 1, "Single", 80.0);
    allocate(&db, 1, 7, "Ana")?;
    db.bill_room(CreateBillDto {
        room_number: 1,
        nights: 1,
    })?;

    assert_eq!(
        violation(db.check_customer_number(CheckCustomerNumberDto { customer_number: 7 })),
        Violation::DuplicateCustomerNumber(7)
    );
    Ok(())
}

#[test]
fn billing_requires_an_occupied_room_and_positive_nights() -> error_stack::Result<(), KernelError>
{
    let db = InMemoryDatabase::new();
    add(&db, 1, "Double", 90.5);

    let vacant = db.bill_room(CreateBillDto {
        room_number: 1,
        nights: 2,
    });
    assert_eq!(violation(vacant), Violation::RoomNotOccupied(1));

    allocate(&db, 1, 3, "Ana")?;
    let no_nights = db.bill_room(CreateBillDto {
        room_number: 1,
        nights: 0,
    });
    assert_eq!(violation(no_nights), Violation::NonPositiveNights(0));
    assert_eq!(db.get_occupied_rooms()?.len(), 1);

    let bill = db.bill_room(CreateBillDto {
        room_number: 1,
        nights: 2,
    })?;
    assert_eq!(bill.total.to_string(), "181.0");
    Ok(())
}

#[test]
fn delete_skips_unknown_and_allocated_rooms() -> error_stack::Result<(), KernelError> {
    let db = InMemoryDatabase::new();
    add(&db, 1, "Single", 50.0);
    add(&db, 2, "Double", 70.0);
    add(&db, 3, "Suite", 90.0);
    allocate(&db, 3, 1, "Ana")?;

    let result = db.delete_rooms(DeleteRoomsDto {
        numbers: vec![1, 1, 42, 3],
    })?;
    assert_eq!(result.deleted, vec![1]);
    assert_eq!(result.kept_allocated, vec![3]);

    let statuses = db.get_room_statuses()?;
    assert_eq!(
        statuses,
        vec![
            RoomStatusDto {
                room_number: 2,
                occupant: None,
            },
            RoomStatusDto {
                room_number: 3,
                occupant: Some(AllocationDto {
                    room_number: 3,
                    customer_number: 1,
                    customer_name: "Ana".to_string(),
                }),
            },
        ]
    );
    Ok(())
}

//! Repository integration tests against an embedded SurrealDB instance.
//! Run: cargo test -p resort-server --test repository_crud

use resort_server::db::DbService;
use resort_server::db::models::{
    AccommodationCreate, AccommodationUpdate, ReservationCreate, ReservationUpdate, RoomCreate,
    SaleCreate, StaffCreate, TicketCreate,
};
use resort_server::db::repository::{
    AccommodationRepository, RepoError, ReservationRepository, RoomRepository, SaleRepository,
    StaffRepository, TicketRepository,
};
use rust_decimal::Decimal;
use shared::{ReservationStatus, ReservationType, SaleCategory, StaffRole};

async fn setup() -> (tempfile::TempDir, DbService) {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path()).await.unwrap();
    (tmp, service)
}

#[tokio::test]
async fn accommodation_crud_and_room_cascade() {
    let (_tmp, service) = setup().await;
    let acc_repo = AccommodationRepository::new(service.db.clone());
    let room_repo = RoomRepository::new(service.db.clone());

    let acc = acc_repo
        .create(AccommodationCreate {
            name: "Giljo Pension".to_string(),
            contact: Some("010-1234-5678".to_string()),
            details: None,
        })
        .await
        .unwrap();
    let acc_id = acc.id.as_ref().unwrap().to_string();

    // Duplicate name rejected
    let dup = acc_repo
        .create(AccommodationCreate {
            name: "Giljo Pension".to_string(),
            contact: None,
            details: None,
        })
        .await;
    assert!(matches!(dup, Err(RepoError::Duplicate(_))));

    // Rooms under the accommodation
    room_repo
        .create(
            &acc_id,
            RoomCreate {
                name: "Ondol A".to_string(),
                capacity: 4,
                price: Decimal::new(150_000, 0),
            },
        )
        .await
        .unwrap();

    // Duplicate room name within the same accommodation rejected
    let dup_room = room_repo
        .create(
            &acc_id,
            RoomCreate {
                name: "Ondol A".to_string(),
                capacity: 2,
                price: Decimal::new(90_000, 0),
            },
        )
        .await;
    assert!(matches!(dup_room, Err(RepoError::Duplicate(_))));

    // Update accommodation name
    let updated = acc_repo
        .update(
            &acc_id,
            AccommodationUpdate {
                name: Some("Giljo Resort".to_string()),
                contact: None,
                details: Some("Lakeside".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Giljo Resort");
    assert_eq!(updated.contact.as_deref(), Some("010-1234-5678"));

    // A reservation linked to the accommodation before deletion
    let res_repo = ReservationRepository::new(service.db.clone());
    let res = res_repo
        .create(ReservationCreate {
            reservation_type: ReservationType::Accommodation,
            customer_name: "Kim".to_string(),
            phone: None,
            date: "2026-08-28".to_string(),
            headcount: 2,
            accommodation: Some(acc_id.clone()),
            ticket: None,
            pickup_location: None,
            pickup_time: None,
            total_amount: Decimal::new(150_000, 0),
            deposit: None,
            notes: None,
        })
        .await
        .unwrap();
    let res_id = res.id.as_ref().unwrap().to_string();
    assert!(res.accommodation.is_some());

    // Deleting the accommodation removes its rooms and unlinks reservations
    assert!(acc_repo.delete(&acc_id).await.unwrap());
    assert!(acc_repo.find_by_id(&acc_id).await.unwrap().is_none());
    let orphans = room_repo.find_by_accommodation(&acc_id).await.unwrap();
    assert!(orphans.is_empty());
    let survivor = res_repo.find_by_id(&res_id).await.unwrap().unwrap();
    assert!(survivor.accommodation.is_none());
}

#[tokio::test]
async fn ticket_duplicate_name_rejected() {
    let (_tmp, service) = setup().await;
    let repo = TicketRepository::new(service.db.clone());

    repo.create(TicketCreate {
        name: "Day Pass".to_string(),
        price: Decimal::new(35_000, 0),
    })
    .await
    .unwrap();

    let dup = repo
        .create(TicketCreate {
            name: "Day Pass".to_string(),
            price: Decimal::new(40_000, 0),
        })
        .await;
    assert!(matches!(dup, Err(RepoError::Duplicate(_))));
}

fn day_reservation(customer: &str, date: &str, total: i64, deposit: i64) -> ReservationCreate {
    ReservationCreate {
        reservation_type: ReservationType::Day,
        customer_name: customer.to_string(),
        phone: None,
        date: date.to_string(),
        headcount: 2,
        accommodation: None,
        ticket: None,
        pickup_location: None,
        pickup_time: None,
        total_amount: Decimal::new(total, 0),
        deposit: Some(Decimal::new(deposit, 0)),
        notes: None,
    }
}

#[tokio::test]
async fn reservation_balance_is_server_derived() {
    let (_tmp, service) = setup().await;
    let repo = ReservationRepository::new(service.db.clone());

    let res = repo
        .create(day_reservation("Kim", "2026-08-28", 150_000, 50_000))
        .await
        .unwrap();
    assert_eq!(res.balance, Decimal::new(100_000, 0));
    assert_eq!(res.status, ReservationStatus::Booked);

    // Deposit above total rejected
    let bad = repo
        .create(day_reservation("Lee", "2026-08-28", 100_000, 200_000))
        .await;
    assert!(matches!(bad, Err(RepoError::Validation(_))));

    // Invalid date rejected
    let bad_date = repo
        .create(day_reservation("Lee", "28/08/2026", 100_000, 0))
        .await;
    assert!(matches!(bad_date, Err(RepoError::Validation(_))));
}

#[tokio::test]
async fn reservation_headcount_must_be_positive() {
    let (_tmp, service) = setup().await;
    let repo = ReservationRepository::new(service.db.clone());

    let mut zero = day_reservation("Kim", "2026-08-28", 100_000, 0);
    zero.headcount = 0;
    let err = repo.create(zero).await;
    assert!(matches!(err, Err(RepoError::Validation(_))));

    let res = repo
        .create(day_reservation("Kim", "2026-08-28", 100_000, 0))
        .await
        .unwrap();
    let id = res.id.as_ref().unwrap().to_string();
    let err = repo
        .update(
            &id,
            ReservationUpdate {
                headcount: Some(0),
                ..ReservationUpdate::default()
            },
        )
        .await;
    assert!(matches!(err, Err(RepoError::Validation(_))));
}

#[tokio::test]
async fn reservation_update_normalizes_links_on_type_switch() {
    let (_tmp, service) = setup().await;
    let acc_repo = AccommodationRepository::new(service.db.clone());
    let ticket_repo = TicketRepository::new(service.db.clone());
    let repo = ReservationRepository::new(service.db.clone());

    let acc = acc_repo
        .create(AccommodationCreate {
            name: "Giljo Pension".to_string(),
            contact: None,
            details: None,
        })
        .await
        .unwrap();
    let acc_id = acc.id.as_ref().unwrap().to_string();
    let ticket = ticket_repo
        .create(TicketCreate {
            name: "Day Pass".to_string(),
            price: Decimal::new(35_000, 0),
        })
        .await
        .unwrap();
    let ticket_id = ticket.id.as_ref().unwrap().to_string();

    let res = repo
        .create(ReservationCreate {
            reservation_type: ReservationType::Accommodation,
            customer_name: "Kim".to_string(),
            phone: Some("010-1234-5678".to_string()),
            date: "2026-08-28".to_string(),
            headcount: 2,
            accommodation: Some(acc_id.clone()),
            ticket: None,
            pickup_location: None,
            pickup_time: None,
            total_amount: Decimal::new(150_000, 0),
            deposit: None,
            notes: Some("Late check-in".to_string()),
        })
        .await
        .unwrap();
    let id = res.id.as_ref().unwrap().to_string();

    // An accommodation stay cannot link a ticket at creation
    let mixed = repo
        .create(ReservationCreate {
            reservation_type: ReservationType::Accommodation,
            customer_name: "Lee".to_string(),
            phone: None,
            date: "2026-08-28".to_string(),
            headcount: 1,
            accommodation: None,
            ticket: Some(ticket_id.clone()),
            pickup_location: None,
            pickup_time: None,
            total_amount: Decimal::new(50_000, 0),
            deposit: None,
            notes: None,
        })
        .await;
    assert!(matches!(mixed, Err(RepoError::Validation(_))));

    // Switching to a day visit drops the accommodation link even when the
    // payload also carries a ticket
    let switched = repo
        .update(
            &id,
            ReservationUpdate {
                reservation_type: Some(ReservationType::Day),
                ticket: Some(Some(ticket_id.clone())),
                ..ReservationUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(switched.reservation_type, ReservationType::Day);
    assert!(switched.accommodation.is_none());
    assert!(switched.ticket.is_some());

    // A day visit refuses an accommodation link outright
    let err = repo
        .update(
            &id,
            ReservationUpdate {
                accommodation: Some(Some(acc_id.clone())),
                ..ReservationUpdate::default()
            },
        )
        .await;
    assert!(matches!(err, Err(RepoError::Validation(_))));

    // Explicit null clears optional fields and links
    let cleared = repo
        .update(
            &id,
            ReservationUpdate {
                ticket: Some(None),
                phone: Some(None),
                notes: Some(None),
                ..ReservationUpdate::default()
            },
        )
        .await
        .unwrap();
    assert!(cleared.ticket.is_none());
    assert!(cleared.phone.is_none());
    assert!(cleared.notes.is_none());
}

#[tokio::test]
async fn reservation_range_filter_and_sort() {
    let (_tmp, service) = setup().await;
    let repo = ReservationRepository::new(service.db.clone());

    repo.create(day_reservation("Kim", "2026-08-25", 100_000, 0))
        .await
        .unwrap();
    repo.create(day_reservation("Lee", "2026-08-27", 100_000, 0))
        .await
        .unwrap();
    repo.create(day_reservation("Park", "2026-09-01", 100_000, 0))
        .await
        .unwrap();

    let rows = repo
        .find_range(Some("2026-08-01"), Some("2026-08-31"), "date", "asc")
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].customer_name, "Kim");
    assert_eq!(rows[1].customer_name, "Lee");

    let rows = repo
        .find_range(Some("2026-08-01"), Some("2026-09-30"), "date", "desc")
        .await
        .unwrap();
    assert_eq!(rows[0].customer_name, "Park");

    // Unknown sort field rejected
    let err = repo
        .find_range(None, None, "customer_name", "asc")
        .await;
    assert!(matches!(err, Err(RepoError::Validation(_))));
}

#[tokio::test]
async fn reservation_status_transitions_only_from_booked() {
    let (_tmp, service) = setup().await;
    let repo = ReservationRepository::new(service.db.clone());

    let res = repo
        .create(day_reservation("Kim", "2026-08-28", 100_000, 0))
        .await
        .unwrap();
    let id = res.id.as_ref().unwrap().to_string();

    let completed = repo
        .update_status(&id, ReservationStatus::Completed)
        .await
        .unwrap();
    assert_eq!(completed.status, ReservationStatus::Completed);

    // Terminal state cannot change again
    let err = repo.update_status(&id, ReservationStatus::Cancelled).await;
    assert!(matches!(err, Err(RepoError::BusinessRule(_))));
}

#[tokio::test]
async fn cancelled_reservations_excluded_from_count() {
    let (_tmp, service) = setup().await;
    let repo = ReservationRepository::new(service.db.clone());

    let a = repo
        .create(day_reservation("Kim", "2026-08-28", 100_000, 0))
        .await
        .unwrap();
    repo.create(day_reservation("Lee", "2026-08-28", 100_000, 0))
        .await
        .unwrap();

    repo.update_status(
        &a.id.as_ref().unwrap().to_string(),
        ReservationStatus::Cancelled,
    )
    .await
    .unwrap();

    let count = repo.count_in_range("2026-08-28", "2026-08-28").await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn sale_requires_existing_reservation_link() {
    let (_tmp, service) = setup().await;
    let sale_repo = SaleRepository::new(service.db.clone());
    let res_repo = ReservationRepository::new(service.db.clone());

    // Dangling reservation link rejected
    let err = sale_repo
        .create(SaleCreate {
            item_name: "BBQ Set".to_string(),
            amount: Decimal::new(45_000, 0),
            category: SaleCategory::Food,
            reservation: Some("reservation:doesnotexist".to_string()),
        })
        .await;
    assert!(matches!(err, Err(RepoError::NotFound(_))));

    // Linked sale resolves the customer name in list rows
    let res = res_repo
        .create(day_reservation("Kim", "2026-08-28", 100_000, 0))
        .await
        .unwrap();
    sale_repo
        .create(SaleCreate {
            item_name: "BBQ Set".to_string(),
            amount: Decimal::new(45_000, 0),
            category: SaleCategory::Food,
            reservation: Some(res.id.as_ref().unwrap().to_string()),
        })
        .await
        .unwrap();
    sale_repo
        .create(SaleCreate {
            item_name: "Walk-in Rental".to_string(),
            amount: Decimal::new(20_000, 0),
            category: SaleCategory::Ski,
            reservation: None,
        })
        .await
        .unwrap();

    let rows = sale_repo.find_range(None, None).await.unwrap();
    assert_eq!(rows.len(), 2);
    let linked = rows.iter().find(|r| r.item_name == "BBQ Set").unwrap();
    assert_eq!(linked.customer_name.as_deref(), Some("Kim"));
    let walk_in = rows.iter().find(|r| r.item_name == "Walk-in Rental").unwrap();
    assert!(walk_in.customer_name.is_none());
}

#[tokio::test]
async fn staff_bootstrap_and_password_verification() {
    let (_tmp, service) = setup().await;
    let repo = StaffRepository::new(service.db.clone());

    repo.ensure_default_admin("admin@resort.example", Some("bootstrap-pass"))
        .await
        .unwrap();

    // Bootstrap is idempotent once accounts exist
    repo.ensure_default_admin("other@resort.example", Some("ignored"))
        .await
        .unwrap();
    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);

    let admin = repo
        .find_by_email("admin@resort.example")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(admin.role, StaffRole::Admin);
    assert!(admin.verify_password("bootstrap-pass").unwrap());
    assert!(!admin.verify_password("wrong").unwrap());

    // Duplicate email rejected
    let dup = repo
        .create(StaffCreate {
            email: "admin@resort.example".to_string(),
            password: "another-pass".to_string(),
            name: "Second Admin".to_string(),
            phone: None,
            role: StaffRole::Employee,
        })
        .await;
    assert!(matches!(dup, Err(RepoError::Duplicate(_))));
}

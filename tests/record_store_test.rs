use psytrack::core::metrics;
use psytrack::core::{DashboardStats, SpecialistStatus, StatusFilter};
use psytrack::{RecordStore, SeedData};
use tokio_test::{assert_err, assert_ok};

fn store() -> RecordStore {
    RecordStore::new(SeedData::mock().specialists)
}

#[test]
fn test_status_update_scenario() {
    let mut store = store();
    assert_eq!(
        metrics::dashboard_stats(store.list_all()),
        DashboardStats {
            total: 3,
            pending: 1,
            verified: 1
        }
    );

    assert_ok!(store.update_status("1", SpecialistStatus::Verified));

    assert_eq!(
        metrics::dashboard_stats(store.list_all()),
        DashboardStats {
            total: 3,
            pending: 0,
            verified: 2
        }
    );
}

#[test]
fn test_note_scenario() {
    let mut store = store();
    let before = store.get("2").unwrap().notes.len();

    assert_err!(store.append_note("2", "  "));
    assert_eq!(store.get("2").unwrap().notes.len(), before);

    assert_ok!(store.append_note("2", "Called twice"));
    let notes = &store.get("2").unwrap().notes;
    assert_eq!(notes.len(), before + 1);
    assert_eq!(notes.last().map(String::as_str), Some("Called twice"));
}

#[test]
fn test_partitions_hold_over_update_sequence() {
    let mut store = store();
    let updates = [
        ("1", SpecialistStatus::Contacted),
        ("2", SpecialistStatus::Rejected),
        ("3", SpecialistStatus::Pending),
        ("1", SpecialistStatus::Pending),
        ("2", SpecialistStatus::Verified),
        ("missing", SpecialistStatus::Rejected),
    ];

    for (id, status) in updates {
        let _ = store.update_status(id, status);

        let mut total = 0;
        for status in SpecialistStatus::ALL {
            let part = store.list_by_status(StatusFilter::Only(status));
            assert!(part.iter().all(|r| r.status == status));
            total += part.len();
        }
        assert_eq!(total, store.list_all().len());
    }

    let statuses: Vec<SpecialistStatus> = store.list_all().iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            SpecialistStatus::Pending,
            SpecialistStatus::Verified,
            SpecialistStatus::Pending
        ]
    );
}

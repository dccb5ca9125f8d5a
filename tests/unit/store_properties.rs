/// Invariants of the habit store that must hold for any sequence of edits
use std::rc::Rc;
use chrono::NaiveDate;
use habit_streaks::*;

fn store() -> (HabitStore<SqliteStorage>, Rc<FixedClock>) {
    let clock = Rc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()));
    let storage = SqliteStorage::in_memory().expect("Failed to open storage");
    (HabitStore::new(storage, Box::new(clock.clone())), clock)
}

fn ids(store: &HabitStore<SqliteStorage>) -> Vec<u32> {
    store.list().unwrap().iter().map(|h| h.id.value()).collect()
}

fn names(store: &HabitStore<SqliteStorage>) -> Vec<String> {
    store.list().unwrap().into_iter().map(|h| h.name).collect()
}

#[test]
fn test_ids_stay_dense_through_mixed_deletes() {
    let (store, _) = store();
    let mut expected: Vec<String> = Vec::new();

    // Deterministic mix of creates and deletes at varying positions
    let plan: &[(&str, u32)] = &[
        ("add", 0), ("add", 0), ("add", 0), ("del", 2), ("add", 0), ("add", 0),
        ("del", 1), ("del", 3), ("add", 0), ("del", 3), ("add", 0), ("del", 1),
    ];

    let mut counter = 0;
    for (op, position) in plan {
        match *op {
            "add" => {
                counter += 1;
                let name = format!("habit-{}", counter);
                store.create(&name).unwrap();
                expected.push(name);
            }
            _ => {
                store.delete(HabitId(*position)).unwrap();
                expected.remove(*position as usize - 1);
            }
        }

        let count = expected.len() as u32;
        assert_eq!(ids(&store), (1..=count).collect::<Vec<_>>());
        assert_eq!(names(&store), expected);
    }
}

#[test]
fn test_zero_sets_record_to_best_streak() {
    let (store, _) = store();
    let id = store.create("Read").unwrap();

    let mut best: Option<u32> = None;
    for streak in [3_u32, 1, 7, 0, 7, 2, 12] {
        store.set_score(id, i64::from(streak)).unwrap();
        store.zero(id).unwrap();

        best = Some(best.map_or(streak, |b| b.max(streak)));
        let habit = store.get(id).unwrap();
        assert_eq!(habit.streak_days, 0);
        assert_eq!(habit.record, best);
    }
}

#[test]
fn test_already_checked_never_mutates() {
    let (store, _) = store();
    let id = store.create("Read").unwrap();
    let before = store.get(id).unwrap();

    for _ in 0..3 {
        assert_eq!(store.plan_checkin(id).unwrap(), CheckinDecision::AlreadyChecked);
    }
    assert_eq!(store.get(id).unwrap(), before);
}

#[test]
fn test_forgiveness_window_adds_exactly_one() {
    for gap in [1, 2] {
        let (store, clock) = store();
        let id = store.create("Read").unwrap();
        clock.advance_days(gap);

        let decision = store.plan_checkin(id).unwrap();
        assert_eq!(decision, CheckinDecision::AutoAdvance(1));
        store.apply_checkin(id, decision.days_to_add().unwrap()).unwrap();
        assert_eq!(store.get(id).unwrap().streak_days, 2);
    }
}

#[test]
fn test_reorder_swaps_only_the_two_positions() {
    let (store, _) = store();
    for name in ["A", "B", "C", "D"] {
        store.create(name).unwrap();
    }

    store.reorder(HabitId(1), HabitId(3)).unwrap();
    assert_eq!(names(&store), ["C", "B", "A", "D"]);
    assert_eq!(ids(&store), [1, 2, 3, 4]);

    // Swapping back restores the original order
    store.reorder(HabitId(3), HabitId(1)).unwrap();
    assert_eq!(names(&store), ["A", "B", "C", "D"]);
}

#[test]
fn test_last_check_override_accepts_future_dates() {
    let (store, _) = store();
    let id = store.create("Read").unwrap();
    let future = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

    store.set_last_check(id, future).unwrap();
    assert_eq!(store.get(id).unwrap().last_check, future);
    assert_eq!(store.plan_checkin(id).unwrap(), CheckinDecision::AlreadyChecked);
}

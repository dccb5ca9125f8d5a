/// End-to-end sessions against a real database file with a controlled clock
use std::io::Cursor;
use std::path::Path;
use std::rc::Rc;
use chrono::NaiveDate;
use habit_streaks::*;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Open the tracker, feed it a script, and return what it printed
fn session(db_path: &Path, clock: &Rc<FixedClock>, script: &str) -> String {
    let tracker = HabitTracker::with_clock(db_path.to_path_buf(), Box::new(clock.clone()))
        .expect("Failed to open tracker");
    let mut output = Vec::new();
    tracker
        .run_with(Cursor::new(script.to_string()), &mut output)
        .expect("Session failed");
    String::from_utf8(output).unwrap()
}

fn habit(db_path: &Path, id: u32) -> Habit {
    let storage = SqliteStorage::new(db_path).unwrap();
    storage.select_by_id(HabitId(id)).unwrap().expect("habit missing")
}

#[test]
fn test_read_streak_scenario() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("habits.db");
    let clock = Rc::new(FixedClock::new(date(2024, 3, 17)));

    session(&db_path, &clock, "add\nRead\ndone\n");
    let read = habit(&db_path, 1);
    assert_eq!((read.streak_days, read.last_check, read.record), (1, date(2024, 3, 17), None));

    // Two days later a check-in still counts as one more day
    clock.advance_days(2);
    session(&db_path, &clock, "1\ndone\n");
    assert_eq!(habit(&db_path, 1).streak_days, 2);

    // Four more days: the gap needs confirming, declining changes nothing
    clock.advance_days(4);
    let output = session(&db_path, &clock, "1\nn\ndone\n");
    assert!(output.contains("It has been 4 days"));
    assert_eq!(habit(&db_path, 1).streak_days, 2);
    assert_eq!(habit(&db_path, 1).last_check, date(2024, 3, 19));

    session(&db_path, &clock, "1\ny\ndone\n");
    let read = habit(&db_path, 1);
    assert_eq!(read.streak_days, 6);
    assert_eq!(read.last_check, date(2024, 3, 23));

    // Same day again: nothing to add
    let output = session(&db_path, &clock, "1\ndone\n");
    assert!(output.contains("You already checked today!"));
    assert_eq!(habit(&db_path, 1).streak_days, 6);
}

#[test]
fn test_listing_labels_follow_the_clock() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("habits.db");
    let clock = Rc::new(FixedClock::new(date(2024, 3, 17)));

    let output = session(&db_path, &clock, "add\nRead\ndone\n");
    assert!(output.contains("1 Read 1 day Last check: Today"));

    clock.advance_days(1);
    let output = session(&db_path, &clock, "done\n");
    assert!(output.contains("1 Read 1 day Last check: Yesterday"));

    clock.advance_days(1);
    let output = session(&db_path, &clock, "done\n");
    assert!(output.contains("1 Read 1 day Last check: 17 March 2024"));
}

#[test]
fn test_delete_reorder_and_records_through_the_session() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("habits.db");
    let clock = Rc::new(FixedClock::new(date(2024, 3, 17)));

    session(&db_path, &clock, "add\nA\nadd\nB\nadd\nC\nadd\nD\ndone\n");

    // Swap A and C, then delete B
    session(&db_path, &clock, "edit\n1\nn\nn\nn\ny\n3\ndel\n2\ndone\n");
    let storage = SqliteStorage::new(&db_path).unwrap();
    let names: Vec<(u32, String)> = storage
        .select_all()
        .unwrap()
        .into_iter()
        .map(|h| (h.id.value(), h.name))
        .collect();
    assert_eq!(names, vec![(1, "C".to_string()), (2, "A".to_string()), (3, "D".to_string())]);
    storage.close().unwrap();

    // Zero keeps the record, derec drops it
    session(&db_path, &clock, "edit\n2\nn\ny\n9\nn\nn\nnull\n2\ndone\n");
    assert_eq!(habit(&db_path, 2).record, Some(9));
    assert_eq!(habit(&db_path, 2).streak_days, 0);

    let output = session(&db_path, &clock, "derec\n2\ndone\n");
    assert!(output.contains("Record cleared"));
    assert_eq!(habit(&db_path, 2).record, None);
}

#[test]
fn test_rejected_input_is_reported_and_harmless() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("habits.db");
    let clock = Rc::new(FixedClock::new(date(2024, 3, 17)));

    session(&db_path, &clock, "add\nRead\ndone\n");
    let before = habit(&db_path, 1);

    let output = session(&db_path, &clock, "add\n   \ndel\n5\nedit\n1\ny\n\nnull\nx\nwhat\ndone\n");
    assert!(output.contains("Invalid habit name"));
    assert!(output.contains("Habit not found: 5"));
    assert!(output.contains("Invalid habit id"));
    assert!(output.contains("Unknown command 'what'"));
    assert!(output.ends_with("Goodbye!\n"));

    assert_eq!(habit(&db_path, 1), before);
}

#[test]
fn test_purge_removes_everything() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("habits.db");
    let clock = Rc::new(FixedClock::new(date(2024, 3, 17)));

    session(&db_path, &clock, "add\nA\nadd\nB\npurge\ny\nadd\nC\ndone\n");

    let storage = SqliteStorage::new(&db_path).unwrap();
    let habits = storage.select_all().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].id, HabitId(1));
    assert_eq!(habits[0].name, "C");
}

/// Basic integration tests
use habit_streaks::*;
use std::io::Cursor;
use tempfile::{tempdir, NamedTempFile};

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[test]
    fn test_tracker_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let tracker = HabitTracker::new(temp_file.path().to_path_buf());
        assert!(tracker.is_ok());
    }

    #[test]
    fn test_database_persistence() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("habits.db");

        let tracker = HabitTracker::new(db_path.clone()).expect("Failed to open first tracker");
        tracker
            .run_with(Cursor::new("add\nRead\nadd\nRun\nnull\n1\ndone\n"), Vec::new())
            .expect("Session failed");

        let reopened = HabitTracker::new(db_path).expect("Failed to open second tracker");
        let habits = reopened.store().list().unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name, "Read");
        assert_eq!(habits[0].streak_days, 0);
        assert_eq!(habits[0].record, Some(1));
        assert_eq!(habits[1].name, "Run");
        reopened.close().unwrap();
    }

    #[test]
    fn test_one_shot_commands() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = HabitTracker::new(temp_dir.path().join("habits.db")).unwrap();

        let mut out = Vec::new();
        let id = tracker.add("Read", &mut out).unwrap();
        assert_eq!(id, HabitId(1));

        let outcome = tracker.check(id, false, &mut out).unwrap();
        assert_eq!(outcome, CheckinOutcome::AlreadyChecked);

        let mut json = Vec::new();
        tracker.list(true, &mut json).unwrap();
        let summaries: Vec<HabitSummary> = serde_json::from_slice(&json).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Read");
        assert_eq!(summaries[0].last_check_label, "Today");
        assert_eq!(summaries[0].status, StreakStatus::Fresh);
    }

    #[test]
    fn test_storage_interface() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path()).expect("Failed to create storage");

        let _: &dyn HabitStorage = &storage;
        storage.close().expect("Failed to close storage");
    }
}

/// Basic unit tests to verify core functionality
use habit_streaks::*;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_habit_name_validation() {
        assert!(Habit::validate_name("Read").is_ok());
        assert!(matches!(
            Habit::validate_name(""),
            Err(DomainError::InvalidHabitName(_))
        ));
    }

    #[test]
    fn test_decisions_by_gap() {
        let today = date(2024, 3, 17);
        let cases = [
            (date(2024, 3, 17), CheckinDecision::AlreadyChecked),
            (date(2024, 3, 16), CheckinDecision::AutoAdvance(1)),
            (date(2024, 3, 15), CheckinDecision::AutoAdvance(1)),
            (date(2024, 3, 14), CheckinDecision::ConfirmRequired(3)),
            (date(2024, 3, 12), CheckinDecision::ConfirmRequired(5)),
        ];

        for (last_check, expected) in cases {
            assert_eq!(decide_checkin(days_since(last_check, today)), expected, "last check {}", last_check);
        }
    }

    #[test]
    fn test_days_since_across_month_and_year() {
        assert_eq!(days_since(date(2023, 12, 31), date(2024, 1, 1)), 1);
        assert_eq!(days_since(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_storage_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path());
        assert!(storage.is_ok());
    }

    #[test]
    fn test_storage_is_object_safe() {
        let storage = SqliteStorage::in_memory().expect("Failed to open storage");
        let dynamic: &dyn HabitStorage = &storage;
        assert!(dynamic.select_all().unwrap().is_empty());
        assert_eq!(dynamic.max_id().unwrap(), None);
    }
}

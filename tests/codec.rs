#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use todo_cli::libs::codec::{decode, encode, parse_line, DecodeError, LineBuilder};
    use todo_cli::libs::task::{Priority, Status, Task};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_encode_follows_line_grammar() {
        let task = Task::new("pay rent", Priority::Low)
            .with_due_date(Some(date(2024, 1, 5)))
            .with_category(Some("home"));

        assert_eq!(encode(&task), "[ ] 🔷 pay rent (Due: 2024-01-05) [Category: home]");
    }

    #[test]
    fn test_encode_omits_absent_annotations() {
        let task = Task::new("buy milk", Priority::High);
        assert_eq!(encode(&task), "[ ] 🔥 buy milk");

        let task = Task::new("buy milk", Priority::Medium).with_category(Some("errands"));
        assert_eq!(encode(&task), "[ ] 🔶 buy milk [Category: errands]");
    }

    #[test]
    fn test_round_trip_across_field_combinations() {
        let mut tasks = Vec::new();
        for priority in Priority::ALL {
            for due in [None, Some(date(2025, 12, 31))] {
                for category in [None, Some("work")] {
                    tasks.push(Task::new("write report", priority).with_due_date(due).with_category(category));
                }
            }
        }
        let mut done = Task::new("ship it", Priority::High).with_category(Some("release"));
        done.status = Status::Done;
        tasks.push(done);

        for task in tasks {
            let line = encode(&task);
            assert_eq!(decode(&line).unwrap(), task, "line: {}", line);
            assert_eq!(encode(&decode(&line).unwrap()), line);
        }
    }

    #[test]
    fn test_legacy_line_without_priority() {
        let task = decode("[ ] buy milk").unwrap();

        assert_eq!(task.status, Status::Open);
        assert_eq!(task.priority, None);
        assert_eq!(task.priority(), Priority::Medium);
        assert_eq!(task.description, "buy milk");
        // Written back exactly as it was read
        assert_eq!(encode(&task), "[ ] buy milk");
    }

    #[test]
    fn test_line_without_any_marker() {
        let task = decode("call the plumber").unwrap();

        assert_eq!(task.status, Status::Open);
        assert_eq!(task.priority(), Priority::Medium);
        assert_eq!(task.description, "call the plumber");
    }

    #[test]
    fn test_legacy_done_line_with_category_only() {
        let task = decode("[x] 🔶 water plants [Category: garden]").unwrap();

        assert!(task.is_done());
        assert_eq!(task.priority, Some(Priority::Medium));
        assert_eq!(task.description, "water plants");
        assert_eq!(task.category.as_deref(), Some("garden"));
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_annotations_in_any_order() {
        let task = decode("[ ] 🔥 file taxes [Category: money] (Due: 2024-04-15)").unwrap();

        assert_eq!(task.description, "file taxes");
        assert_eq!(task.category.as_deref(), Some("money"));
        assert_eq!(task.due_date, Some(date(2024, 4, 15)));
    }

    #[test]
    fn test_unparseable_due_date_stays_in_description() {
        let line = "[ ] 🔶 renew passport (Due: next spring)";
        let task = decode(line).unwrap();

        assert_eq!(task.due_date, None);
        assert_eq!(task.description, "renew passport (Due: next spring)");
        assert_eq!(encode(&task), line);
    }

    #[test]
    fn test_unpadded_due_date_is_left_as_written() {
        let line = "[ ] 🔶 pay rent (Due: 2024-1-5)";
        let task = decode(line).unwrap();

        assert_eq!(task.due_date, None);
        assert_eq!(task.description, "pay rent (Due: 2024-1-5)");
        assert_eq!(encode(&task), line);
    }

    #[test]
    fn test_unknown_second_token_is_description() {
        let task = decode("[ ] ⭐ star the repo").unwrap();

        assert_eq!(task.priority, None);
        assert_eq!(task.description, "⭐ star the repo");
    }

    #[test]
    fn test_uppercase_done_marker() {
        assert!(decode("[X] 🔷 old habit").unwrap().is_done());
    }

    #[test]
    fn test_empty_line_fails() {
        assert_eq!(decode(""), Err(DecodeError::EmptyLine));
        assert_eq!(decode("   \t"), Err(DecodeError::EmptyLine));
    }

    #[test]
    fn test_parse_line_reports_missing_markers() {
        let parsed = parse_line("just text").unwrap();

        assert_eq!(parsed.status, None);
        assert_eq!(parsed.priority, None);
        assert_eq!(parsed.description, "just text");
    }

    #[test]
    fn test_builder_skips_blank_parts() {
        let line = LineBuilder::new(Status::Done)
            .priority(None)
            .description("  ")
            .due_date(Some(date(2024, 2, 29)))
            .category(Some(""))
            .build();

        assert_eq!(line, "[x] (Due: 2024-02-29)");
        let task = decode(&line).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.due_date, Some(date(2024, 2, 29)));
    }
}

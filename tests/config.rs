#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_cli::libs::config::{Config, DEFAULT_TASKS_FILE, TASKS_FILE_ENV};
    use todo_cli::libs::task::Priority;

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tasks_file, PathBuf::from(DEFAULT_TASKS_FILE));
        assert_eq!(config.history_depth, 1);
        assert_eq!(config.default_priority, Priority::Medium);
        assert!(config.confirm_clear);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            tasks_file: PathBuf::from("/tmp/my-tasks.txt"),
            history_depth: 5,
            default_priority: Priority::High,
            confirm_clear: false,
        };

        config.save_to(&path).unwrap();
        let loaded = Config::read_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_priority": "low" }"#).unwrap();

        let config = Config::read_from(&path).unwrap();

        assert_eq!(config.default_priority, Priority::Low);
        assert_eq!(config.history_depth, 1);
        assert_eq!(config.tasks_file, PathBuf::from(DEFAULT_TASKS_FILE));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();

        assert!(Config::read_from(&path).is_err());
    }

    #[test]
    fn test_tasks_file_env_override() {
        let config = Config {
            tasks_file: PathBuf::from("configured.txt"),
            ..Config::default()
        };

        std::env::set_var(TASKS_FILE_ENV, "/tmp/override.txt");
        assert_eq!(config.tasks_file(), PathBuf::from("/tmp/override.txt"));

        std::env::remove_var(TASKS_FILE_ENV);
        assert_eq!(config.tasks_file(), PathBuf::from("configured.txt"));
    }
}

use todo_core::{init_logging, init_logging_with, logging_status, LoggingConfig};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        level: "info".to_string(),
        log_dir: log_dir.path().to_path_buf(),
    };

    init_logging_with(&config).unwrap();
    init_logging_with(&config).unwrap();

    let dir_str = log_dir.path().to_str().unwrap();
    let level_error = init_logging("debug", dir_str).unwrap_err();
    assert!(level_error.contains("refusing to switch"));

    let other_str = other_dir.path().to_str().unwrap();
    let dir_error = init_logging("info", other_str).unwrap_err();
    assert!(dir_error.contains("refusing to switch"));

    let (active_level, active_dir) = logging_status().unwrap();
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());

    log::info!("event=test_probe module=tests status=ok");
    log::logger().flush();
    let has_log_file = std::fs::read_dir(log_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("todo_list"));
    assert!(has_log_file);
}

mod common;
use common::{missing_file, temp_file};
use redmine_timelog::config::{CONFIG_FILE_NAME, Config};
use redmine_timelog::errors::AppError;
use std::path::Path;

#[test]
fn test_load_kebab_case_config() {
    let path = temp_file(
        "config_load_ok",
        "yaml",
        "redmine-base-address: https://redmine.example.org/\n\
         api-key: abc123\n\
         time-zone: Europe/Berlin\n",
    );

    let cfg = Config::load(Path::new(&path)).expect("load config");
    assert_eq!(cfg.redmine_base_address, "https://redmine.example.org/");
    assert_eq!(cfg.api_key, "abc123");
    assert_eq!(cfg.activity_id, None);
    assert_eq!(cfg.time_zone().unwrap(), chrono_tz::Europe::Berlin);
}

#[test]
fn test_optional_activity_id() {
    let cfg = Config::from_yaml(
        "redmine-base-address: x\napi-key: k\ntime-zone: UTC\nactivity-id: 9\n",
    )
    .unwrap();
    assert_eq!(cfg.activity_id, Some(9));
}

#[test]
fn test_missing_file_is_config_error() {
    let path = missing_file("config_missing");
    let err = Config::load(Path::new(&path)).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_missing_key_is_rejected() {
    let err = Config::from_yaml("redmine-base-address: x\ntime-zone: UTC\n").unwrap_err();
    assert!(matches!(err, AppError::Yaml(_)));
    assert!(err.to_string().contains("api-key"));
}

#[test]
fn test_empty_api_key_is_rejected() {
    let err =
        Config::from_yaml("redmine-base-address: x\napi-key: ''\ntime-zone: UTC\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_unknown_time_zone() {
    let cfg =
        Config::from_yaml("redmine-base-address: x\napi-key: k\ntime-zone: Mars/Olympus\n")
            .unwrap();
    assert!(matches!(cfg.time_zone(), Err(AppError::Config(_))));
}

#[test]
fn test_default_path_is_next_to_executable() {
    let path = Config::default_path();
    assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
    let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
    assert_eq!(path.parent().unwrap(), exe_dir.as_path());
}

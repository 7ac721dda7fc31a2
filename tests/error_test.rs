//! エラー型のテスト

use jagedo_match::config::Config;
use jagedo_match::error::AppError;
use jagedo_match::backend::HttpBackend;

#[test]
fn test_error_display() {
    let errors = vec![
        AppError::Config("home directory not found".to_string()),
        AppError::Search(jagedo_match_common::Error::Status(502)),
        AppError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing")),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_search_error_is_transparent() {
    let err: AppError = jagedo_match_common::Error::Status(404).into();
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<Config>("{").unwrap_err();
    let err: AppError = json_err.into();
    assert!(matches!(err, AppError::JsonParse(_)));
}

#[test]
fn test_invalid_base_url_is_config_error() {
    let result = HttpBackend::from_config(&Config::default(), Some("not-a-url"));
    assert!(matches!(
        result,
        Err(AppError::Search(jagedo_match_common::Error::Config(_)))
    ));
}

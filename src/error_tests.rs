use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = DeckError::Config("invalid year range".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid year range");
}

#[test]
fn error_display_file_read() {
    let err = DeckError::FileRead {
        path: PathBuf::from("number_utf8.csv"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("number_utf8.csv"));
}

#[test]
fn error_display_schema_names_label_and_table() {
    let err = DeckError::Schema {
        label: "100歳以上".to_string(),
        table: "statistics",
    };
    assert_eq!(
        err.to_string(),
        "Required column '100歳以上' not found in statistics table"
    );
}

#[test]
fn error_display_missing_series() {
    let err = DeckError::MissingSeries {
        category: "胃".to_string(),
        subgroup: "男".to_string(),
    };
    assert_eq!(err.to_string(), "No 男 data for 胃");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(DeckError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        DeckError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
    assert_eq!(
        DeckError::AxisLookup("15-19歳".to_string()).error_type(),
        "AxisLookup"
    );
    assert_eq!(
        DeckError::NonNumeric {
            column: "0-4歳".to_string(),
            value: "n/a".to_string(),
        }
        .error_type(),
        "NonNumeric"
    );
    assert_eq!(DeckError::Svg("bad".to_string()).error_type(), "Render");
    assert_eq!(
        DeckError::Selection("year 2030".to_string()).error_type(),
        "Selection"
    );
}

#[test]
fn io_error_converts_via_from() {
    fn fails() -> Result<()> {
        Err(std::io::Error::other("disk full"))?;
        Ok(())
    }

    let err = fails().unwrap_err();
    assert!(matches!(err, DeckError::Io(_)));
}

#[test]
fn suggestion_for_missing_file() {
    let err = DeckError::FileRead {
        path: PathBuf::from("number_utf8.csv"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.suggestion().unwrap().contains("file path exists"));
}

#[test]
fn suggestion_for_permission_denied() {
    let err = DeckError::FileRead {
        path: PathBuf::from("number_utf8.csv"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.suggestion().unwrap().contains("permissions"));
}

#[test]
fn suggestion_for_schema_points_at_columns() {
    let err = DeckError::Schema {
        label: "0-4歳".to_string(),
        table: "statistics",
    };
    assert!(err.suggestion().unwrap().contains("[columns]"));
}

#[test]
fn per_category_errors_have_no_suggestion() {
    assert!(DeckError::Svg("x".to_string()).suggestion().is_none());
    assert!(DeckError::UnknownCategory("x".to_string()).suggestion().is_none());
}

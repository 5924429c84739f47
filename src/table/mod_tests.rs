use super::*;

#[test]
fn normalize_header_removes_inner_whitespace() {
    assert_eq!(normalize_header(" 部 位 "), "部位");
    assert_eq!(normalize_header("コ\tード"), "コード");
}

#[test]
fn normalize_header_strips_bom() {
    assert_eq!(normalize_header("\u{feff}部位"), "部位");
}

#[test]
fn normalize_header_keeps_bracket_labels() {
    assert_eq!(normalize_header("100歳以上"), "100歳以上");
    assert_eq!(normalize_header("0-4歳"), "0-4歳");
}

#[test]
fn column_index_reports_schema_error() {
    let headers = vec!["a".to_string(), "b".to_string()];
    assert_eq!(column_index(&headers, "b", "statistics").unwrap(), 1);

    let err = column_index(&headers, "c", "statistics").unwrap_err();
    assert!(matches!(
        err,
        DeckError::Schema { ref label, table: "statistics" } if label == "c"
    ));
}

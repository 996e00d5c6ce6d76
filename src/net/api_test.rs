use super::*;

#[test]
fn server_error_status_is_a_load_error() {
    assert_eq!(decode_response(500, "[]"), Err(LoadError::Status(500)));
    assert_eq!(decode_response(404, ""), Err(LoadError::Status(404)));
}

#[test]
fn object_payload_is_not_an_array() {
    assert_eq!(decode_response(200, r#"{"items": []}"#), Err(LoadError::NotArray));
}

#[test]
fn invalid_json_is_malformed() {
    assert!(matches!(decode_response(200, "<html>"), Err(LoadError::Malformed(_))));
}

#[test]
fn element_with_wrong_shape_is_malformed() {
    assert!(matches!(decode_response(200, r#"[{"title": 3}]"#), Err(LoadError::Malformed(_))));
}

#[test]
fn empty_array_decodes_to_no_items() {
    assert_eq!(decode_response(200, "[]"), Ok(Vec::new()));
}

#[test]
fn array_decodes_in_document_order() {
    let body = r#"[
        {"title": "B", "description": "second", "image": "b.png", "tags": ["y"]},
        {"title": "A", "description": "first", "image": "a.png"}
    ]"#;
    let items = decode_response(200, body).unwrap();
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A"]);
}

#[test]
fn load_portfolio_reports_network_error_off_browser() {
    let cfg = PortfolioConfig::default();
    let result = futures::executor::block_on(load_portfolio(&cfg));
    assert!(matches!(result, Err(LoadError::Network(_))));
}

use super::*;

#[test]
fn missing_port_defaults_to_3000() {
    assert_eq!(parse_port(None).unwrap(), 3000);
}

#[test]
fn explicit_port_is_parsed() {
    assert_eq!(parse_port(Some("8080".to_owned())).unwrap(), 8080);
}

#[test]
fn invalid_port_is_rejected_with_the_raw_value() {
    let err = parse_port(Some("eighty".to_owned())).unwrap_err();
    assert!(err.to_string().contains("eighty"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(parse_port(Some("70000".to_owned())).is_err());
}

use super::*;

#[test]
fn can_create_from_str_and_string() {
    assert_eq!(GenericError::from("first").to_string(), "first");
    assert_eq!(GenericError::from("second".to_string()).to_string(), "second");
}

#[test]
fn can_convert_from_io_error() {
    let err = GenericError::from(std::io::Error::other("disk"));

    assert_eq!(err.to_string(), "io error: 'disk'");
    assert_eq!(String::from(err), "io error: 'disk'");
}

use super::*;

const RESPONSE: &str = r#"
{
  "executionType": "serial",
  "methodType": "nearest",
  "status": "success",
  "result": {
    "execution_time_seconds": 1.23,
    "minimum_cost": 42.5,
    "optimal_tour": ["A", "B", "A"]
  }
}
"#;

#[test]
fn can_deserialize_response() {
    let response = deserialize_response(BufReader::new(RESPONSE.as_bytes())).unwrap();

    assert_eq!(response.execution_type, ExecutionType::Serial);
    assert_eq!(response.method_type, MethodType::Nearest);
    assert_eq!(response.status, SUCCESS_STATUS);
    assert_eq!(response.result.execution_time_seconds, 1.23);
    assert_eq!(response.result.minimum_cost, 42.5);
    assert_eq!(response.result.optimal_tour, vec!["A", "B", "A"]);
}

#[test]
fn can_serialize_response_with_service_field_names() {
    let response = deserialize_response(BufReader::new(RESPONSE.as_bytes())).unwrap();
    let mut buffer = Vec::new();

    serialize_response(BufWriter::new(&mut buffer), &response).unwrap();

    let value: serde_json::Value = serde_json::from_slice(buffer.as_slice()).unwrap();
    assert_eq!(value, serde_json::from_str::<serde_json::Value>(RESPONSE).unwrap());
}

#[test]
fn can_fail_on_malformed_response() {
    let result = deserialize_response(BufReader::new(r#"{"status": "success"}"#.as_bytes()));

    assert!(result.unwrap_err().to_string().starts_with("json error"));
}

#[test]
fn can_deserialize_error_response() {
    let response: ErrorResponse = serde_json::from_str(r#"{"error": "Invalid 'startNode'."}"#).unwrap();

    assert_eq!(response.error, "Invalid 'startNode'.");
}

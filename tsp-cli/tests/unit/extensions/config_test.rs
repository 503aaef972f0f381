use super::*;
use crate::helpers::{FULL_CONFIG_PATH, LOCAL_CONFIG_PATH};
use std::fs::File;

fn read_config_from(path: &str) -> Config {
    read_config(BufReader::new(File::open(path).unwrap())).unwrap()
}

#[test]
fn can_read_full_config() {
    let config = read_config_from(FULL_CONFIG_PATH);

    assert_eq!(config.service_url(), Some("http://127.0.0.1:5000"));
    assert_eq!(config.service_timeout(), Duration::from_secs(10));
    assert_eq!(config.camera(), Camera { center: Coordinates::new(74.21531, 31.40021), zoom: 12. });
    assert_eq!(config.label_policy(), LabelPolicy::Bounded);
    assert_eq!(config.service_config(), ServiceConfig { threads: 4, max_brute_nodes: 9 });
    assert_eq!(
        config.request_config(),
        RequestConfig {
            execution_type: Some(ExecutionType::Serial),
            method_type: Some(MethodType::Nearest),
            start_node: None
        }
    );
    assert!(config.is_logging_enabled());
}

#[test]
fn can_read_partial_config() {
    let config = read_config_from(LOCAL_CONFIG_PATH);

    assert_eq!(config.service_url(), None);
    assert_eq!(config.service_config().threads, 2);
    assert_eq!(config.service_config().max_brute_nodes, DEFAULT_MAX_BRUTE_NODES);
    assert_eq!(config.request_config().start_node.as_deref(), Some("A"));
    assert!(!config.is_logging_enabled());
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).unwrap();

    assert_eq!(config.service_url(), None);
    assert_eq!(config.service_timeout(), Duration::from_secs(DEFAULT_SERVICE_TIMEOUT));
    assert_eq!(config.camera(), Camera::default());
    assert_eq!(config.label_policy(), LabelPolicy::Extended);
    assert_eq!(config.service_config().max_brute_nodes, DEFAULT_MAX_BRUTE_NODES);
    assert_eq!(config.request_config(), RequestConfig::default());
    assert!(!config.is_logging_enabled());
}

#[test]
fn can_keep_default_options_not_set_in_config() {
    let config = read_config(BufReader::new(r#"{ "defaults": { "startNode": "C" } }"#.as_bytes())).unwrap();

    let request_config = config.request_config();

    assert_eq!(request_config.execution_type, Some(ExecutionType::Parallel));
    assert_eq!(request_config.method_type, Some(MethodType::Brute));
    assert_eq!(request_config.start_node.as_deref(), Some("C"));
}

#[test]
fn can_use_default_zoom_when_only_center_is_set() {
    let config = read_config(BufReader::new(r#"{ "map": { "center": { "lng": 1, "lat": 2 } } }"#.as_bytes())).unwrap();

    assert_eq!(config.camera(), Camera { center: Coordinates::new(1., 2.), zoom: Camera::default().zoom });
}

#[test]
fn can_return_error_for_malformed_config() {
    let result = read_config(BufReader::new(r#"{ "labels": { "policy": "unlimited" } }"#.as_bytes()));

    assert!(result.unwrap_err().starts_with("cannot deserialize config"));
}

use hasp_core::{DEFAULT_FEATURE_ID, FILE_ID_RO, FILE_ID_RW, SessionConfig};
use pretty_assertions::assert_eq;

#[test]
fn defaults_use_rw_file_of_default_feature() {
    let config = SessionConfig::default();
    assert_eq!(config.feature_id, DEFAULT_FEATURE_ID);
    assert_eq!(config.file_id, FILE_ID_RW);
    assert_eq!(config.file_id, 0xfff4);
}

#[test]
fn partial_json_keeps_defaults() {
    let config = SessionConfig::from_json(r#"{"feature_id": 42}"#).unwrap();
    assert_eq!(
        config,
        SessionConfig {
            feature_id: 42,
            file_id: FILE_ID_RW,
        }
    );
}

#[test]
fn empty_json_object_is_default() {
    assert_eq!(SessionConfig::from_json("{}").unwrap(), SessionConfig::default());
}

#[test]
fn full_json() {
    let json = format!(r#"{{"feature_id": 7, "file_id": {FILE_ID_RO}}}"#);
    let config = SessionConfig::from_json(&json).unwrap();
    assert_eq!(config.file_id, FILE_ID_RO);
    assert_eq!(config.feature_id, 7);
}

#[test]
fn invalid_json_rejected() {
    assert!(SessionConfig::from_json("not json").is_err());
    assert!(SessionConfig::from_json(r#"{"file_id": "rw"}"#).is_err());
}

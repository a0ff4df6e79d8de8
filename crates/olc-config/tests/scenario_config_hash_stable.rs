//! Config hash stability.
//!
//! GREEN when:
//! - identical inputs hash identically
//! - key order inside a document does not change the hash
//! - a real override changes the hash
//! - loading from files matches loading from strings

use olc_config::{load_layered_yaml, load_layered_yaml_from_strings};
use std::io::Write;

const BASE_YAML: &str = r#"
output:
  format: "text"
  pretty: false
logging:
  filter: "info"
replay:
  only_refresh: false
"#;

const BASE_YAML_REORDERED: &str = r#"
replay:
  only_refresh: false
logging:
  filter: "info"
output:
  pretty: false
  format: "text"
"#;

const OVERLAY_YAML: &str = r#"
output:
  format: "json"
"#;

#[test]
fn same_input_produces_identical_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    assert_eq!(a.config_hash, b.config_hash);
    assert_eq!(a.canonical_json, b.canonical_json);
}

#[test]
fn reordered_keys_produce_same_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML_REORDERED]).unwrap();
    assert_eq!(a.config_hash, b.config_hash);
}

#[test]
fn overlay_changes_hash() {
    let base = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let layered = load_layered_yaml_from_strings(&[BASE_YAML, OVERLAY_YAML]).unwrap();
    assert_ne!(base.config_hash, layered.config_hash);
    assert_eq!(layered.config_json["output"]["format"], "json");
    assert_eq!(layered.config_json["output"]["pretty"], false);
}

#[test]
fn file_loading_matches_string_loading() {
    let mut base = tempfile::NamedTempFile::new().unwrap();
    base.write_all(BASE_YAML.as_bytes()).unwrap();
    let mut overlay = tempfile::NamedTempFile::new().unwrap();
    overlay.write_all(OVERLAY_YAML.as_bytes()).unwrap();

    let base_path = base.path().to_str().unwrap().to_string();
    let overlay_path = overlay.path().to_str().unwrap().to_string();

    let from_files = load_layered_yaml(&[base_path.as_str(), overlay_path.as_str()]).unwrap();
    let from_strings = load_layered_yaml_from_strings(&[BASE_YAML, OVERLAY_YAML]).unwrap();
    assert_eq!(from_files.config_hash, from_strings.config_hash);
}

#[test]
fn missing_file_is_a_contextual_error() {
    let err = load_layered_yaml(&["/definitely/not/here.yaml"]).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read yaml path"));
}

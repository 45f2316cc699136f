//! Integration smoke tests for `gpa_tracker`

use gpa_tracker::core::loader::load_terms;
use gpa_tracker::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn sample_snapshot_loads() {
    let terms = load_terms("samples/terms.json").expect("sample snapshot should load");
    assert_eq!(terms.len(), 3);
}

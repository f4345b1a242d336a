//! Integration smoke tests for `roadmap_browser`

use roadmap_browser::core::get_version;
use roadmap_browser::Roadmap;

#[test]
fn version_is_not_empty() {
    assert!(!get_version().trim().is_empty());
}

#[test]
fn sample_document_is_valid() {
    let roadmap = Roadmap::from_json(include_str!("../samples/roadmap.json")).unwrap();
    assert!(!roadmap.specializations.is_empty());
}

//! Tests for check registration and the `Standard` bundle.

mod common;

use repo_tidy::{RuleManifest, Severity, Standard, TidyError};

#[test]
fn test_standard_registers_builtin_checks() {
    let standard = Standard::new(common::standard_manifest());
    let ids: Vec<_> = standard.registry.ids().collect();

    // Registration order is the fixed order of the category register calls.
    assert_eq!(ids[0], "TOPLEVEL.README");
    assert!(ids.contains(&"README.TITLE"));
    assert!(ids.contains(&"REPOSITORY.NAME"));
    assert_eq!(standard.registry.len(), 14);
}

#[test]
fn test_every_registered_check_has_a_manifest_entry() {
    let standard = Standard::new(common::standard_manifest());
    for id in standard.registry.ids() {
        assert!(
            standard.manifest.get(id).is_some(),
            "registered check `{id}` has no manifest entry"
        );
    }
}

#[test]
fn test_identifier_round_trip_through_construction() {
    let (_temp, repo) = common::conforming_repo("fixture-repo");
    let standard = Standard::new(common::standard_manifest());

    for id in standard.registry.ids() {
        let factory = standard.registry.get(id).unwrap();
        let check = factory(&repo, &standard.manifest).unwrap();
        assert_eq!(check.name(), id);
    }
}

#[test]
fn test_severity_is_copied_from_manifest() {
    let (_temp, repo) = common::conforming_repo("fixture-repo");
    let standard = Standard::new(common::standard_manifest());

    let readme = standard.registry.get("TOPLEVEL.README").unwrap();
    assert_eq!(
        readme(&repo, &standard.manifest).unwrap().severity(),
        Severity::Requirement
    );

    let docs = standard.registry.get("DIRECTORY.DOCS").unwrap();
    assert_eq!(
        docs(&repo, &standard.manifest).unwrap().severity(),
        Severity::Recommendation
    );
}

#[test]
fn test_missing_manifest_entry_is_a_configuration_error() {
    let (_temp, repo) = common::empty_repo("fixture-repo");
    let sparse = RuleManifest::parse("README.TITLE:\n  - type: REQUIREMENT\n").unwrap();
    let standard = Standard::new(sparse);

    let factory = standard.registry.get("TOPLEVEL.README").unwrap();
    let err = factory(&repo, &standard.manifest).err().unwrap();
    assert!(matches!(err, TidyError::Config(_)), "{err}");
    assert!(err.to_string().contains("TOPLEVEL.README"), "{err}");
}

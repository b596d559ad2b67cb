use super::*;
use std::collections::BTreeSet;

#[test]
fn known_wire_names_parse_to_their_variant() {
    assert_eq!(Status::parse("not_run"), Status::NotRun);
    assert_eq!(Status::parse("passed"), Status::Passed);
    assert_eq!(Status::parse("failed"), Status::Failed);
    assert_eq!(CaseKind::parse("wlan"), CaseKind::Wlan);
    assert_eq!(CaseKind::parse("communication"), CaseKind::Communication);
}

#[test]
fn unknown_values_are_preserved_not_coerced() {
    let status = Status::parse("blocked");
    assert_eq!(status, Status::Other("blocked".to_string()));
    assert!(!status.is_known());
    assert_eq!(status.as_str(), "blocked");

    // case differences are not silently normalized
    assert_eq!(
        CaseKind::parse("WLAN"),
        CaseKind::Other("WLAN".to_string())
    );
}

#[test]
fn every_known_variant_round_trips_through_its_wire_name() {
    for status in Status::KNOWN {
        assert_eq!(&Status::parse(status.as_str()), status);
    }
    for kind in CaseKind::KNOWN {
        assert_eq!(&CaseKind::parse(kind.as_str()), kind);
    }
    assert_eq!(CaseKind::KNOWN.len(), 11);
}

#[test]
fn json_shape_uses_camel_case_and_type_key() {
    let tc = TestCase::new("TC-1", "Ping", Status::Passed, CaseKind::Dtc)
        .with_expected_result("pong")
        .with_tester_name("Ola");
    let json = serde_json::to_value(&tc).unwrap();

    assert_eq!(json["type"], "dtc");
    assert_eq!(json["status"], "passed");
    assert_eq!(json["expectedResult"], "pong");
    assert_eq!(json["testerName"], "Ola");
    assert!(json["lastRunAt"].is_null());
}

#[test]
fn json_with_missing_optional_fields_deserializes() {
    let tc: TestCase = serde_json::from_str(
        r#"{"id":"A","name":"n","status":"archived","type":"dtc","lastRunAt":null}"#,
    )
    .unwrap();

    assert_eq!(tc.status, Status::Other("archived".to_string()));
    assert_eq!(tc.kind, CaseKind::Dtc);
    assert_eq!(tc.expected_result, "");
    assert_eq!(tc.description, "");
    assert_eq!(tc.last_run_at, None);
}

#[test]
fn patch_touches_only_specified_fields() {
    let mut tc = TestCase::new("TC-1", "Old", Status::NotRun, CaseKind::Reset)
        .with_description("keep me");

    tc.apply(TestCasePatch::new().name("New").status(Status::Failed));

    assert_eq!(tc.id, "TC-1");
    assert_eq!(tc.name, "New");
    assert_eq!(tc.status, Status::Failed);
    assert_eq!(tc.kind, CaseKind::Reset);
    assert_eq!(tc.description, "keep me");
    assert_eq!(tc.last_run_at, None);
}

#[test]
fn patch_can_clear_last_run_at() {
    let mut tc = TestCase::new("TC-1", "x", Status::Passed, CaseKind::Reset)
        .with_last_run_at("2025-01-01T00:00:00Z");

    tc.apply(TestCasePatch::new().last_run_at(None));

    assert!(!tc.has_run());
    assert!(TestCasePatch::new().is_empty());
    assert!(!TestCasePatch::run(Status::Passed, "now").is_empty());
}

#[test]
fn run_outcome_parses_short_and_long_forms() {
    assert_eq!("pass".parse::<RunOutcome>(), Ok(RunOutcome::Pass));
    assert_eq!("failed".parse::<RunOutcome>(), Ok(RunOutcome::Fail));
    assert!("maybe".parse::<RunOutcome>().is_err());
    assert_eq!(RunOutcome::Fail.status(), Status::Failed);
}

#[test]
fn seed_collection_has_unique_non_empty_ids() {
    let seed = seed::seed_cases();
    let ids: BTreeSet<_> = seed.iter().map(|tc| tc.id.as_str()).collect();

    assert!(!seed.is_empty());
    assert_eq!(ids.len(), seed.len());
    assert!(seed.iter().all(|tc| !tc.id.is_empty() && !tc.name.is_empty()));
}

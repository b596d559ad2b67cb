//! Built-in seed collection used when nothing has been persisted yet, or
//! when the persisted blob cannot be read back.

use crate::model::{CaseKind, Status, TestCase};

/// Return a fresh copy of the seed collection.
#[must_use]
pub fn seed_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "TC-001",
            "Read VIN identification",
            Status::Passed,
            CaseKind::Identification,
        )
        .with_expected_result("VIN returned, 17 characters")
        .with_description("Request DID F190 and compare against the vehicle label.")
        .with_tester_name("Anna Nowak")
        .with_last_run_at("2025-01-14T09:12:00Z"),
        TestCase::new(
            "TC-002",
            "WLAN module pairing",
            Status::Failed,
            CaseKind::Wlan,
        )
        .with_expected_result("Module paired within 30 s")
        .with_description("Pair the head unit with the reference access point.")
        .with_tester_name("Piotr Zieliński")
        .with_last_run_at("2025-01-15T13:40:00Z"),
        TestCase::new(
            "TC-003",
            "Read stored DTCs",
            Status::NotRun,
            CaseKind::Dtc,
        )
        .with_expected_result("DTC list returned, no communication errors")
        .with_description("Service 19 02 with status mask 0xFF."),
        TestCase::new(
            "TC-004",
            "Enter extended diagnostic session",
            Status::Passed,
            CaseKind::Session,
        )
        .with_expected_result("Positive response 50 03")
        .with_tester_name("Anna Nowak")
        .with_last_run_at("2025-01-16T08:05:00Z"),
        TestCase::new(
            "TC-005",
            "Security access level 1",
            Status::NotRun,
            CaseKind::Security,
        )
        .with_expected_result("Seed/key exchange accepted")
        .with_description("Request seed, compute key, send key."),
        TestCase::new(
            "TC-006",
            "Write configuration DID",
            Status::NotRun,
            CaseKind::Write,
        )
        .with_expected_result("Positive response 6E, value persisted after reset"),
        TestCase::new(
            "TC-007",
            "Run self-test routine",
            Status::Failed,
            CaseKind::Routine,
        )
        .with_expected_result("Routine completes with result 0x00")
        .with_tester_name("Marek Wiśniewski")
        .with_last_run_at("2025-01-16T15:22:00Z"),
        TestCase::new(
            "TC-008",
            "Read ambient temperature sensor",
            Status::NotRun,
            CaseKind::Sensor,
        )
        .with_expected_result("Value within -40..85 °C"),
        TestCase::new(
            "TC-009",
            "ECU hard reset",
            Status::NotRun,
            CaseKind::Reset,
        )
        .with_expected_result("ECU back online within 5 s"),
        TestCase::new(
            "TC-010",
            "CAN communication control",
            Status::NotRun,
            CaseKind::Communication,
        )
        .with_expected_result("Normal messages disabled, diagnostics still answered"),
        TestCase::new(
            "TC-011",
            "Actuator control: cooling fan",
            Status::NotRun,
            CaseKind::Control,
        )
        .with_expected_result("Fan spins up on request and stops on return control"),
    ]
}

//! Derived statistics over the full collection. Nothing here is stored;
//! recompute whenever the collection changes.

use crate::model::{Status, TestCase};
use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use std::{cmp::Ordering, collections::BTreeMap};

/// Bucket for records whose type is empty.
pub const UNKNOWN_TYPE: &str = "unknown";

///
/// Stats
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub not_run: usize,
    pub by_type: BTreeMap<String, usize>,
}

impl Stats {
    /// Share of passed records, in percent. `0.0` for an empty collection.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.passed as f64 / self.total as f64 * 100.0
    }
}

/// Count records by status and by type in one pass.
///
/// Unknown statuses count toward `total` only. Unknown types get their own
/// bucket; an empty type falls into `"unknown"`.
#[must_use]
pub fn aggregate(records: &[TestCase]) -> Stats {
    let mut stats = Stats::default();

    for tc in records {
        stats.total += 1;
        match tc.status {
            Status::Passed => stats.passed += 1,
            Status::Failed => stats.failed += 1,
            Status::NotRun => stats.not_run += 1,
            Status::Other(_) => {}
        }

        let kind = match tc.kind.as_str() {
            "" => UNKNOWN_TYPE,
            kind => kind,
        };
        *stats.by_type.entry(kind.to_string()).or_default() += 1;
    }

    stats
}

/// The `limit` most recently run records, newest first.
///
/// Timestamps are read as RFC 3339 or `dd.mm.yyyy HH:MM`. Records whose
/// timestamp parses in neither form come after all parsable ones, ordered
/// by the raw string, descending.
#[must_use]
pub fn recent_runs(records: &[TestCase], limit: usize) -> Vec<&TestCase> {
    let mut runs: Vec<(&TestCase, Option<NaiveDateTime>)> = records
        .iter()
        .filter_map(|tc| {
            let at = tc.last_run_at.as_deref()?;
            Some((tc, parse_run_timestamp(at)))
        })
        .collect();

    runs.sort_by(|(a, a_at), (b, b_at)| match (a_at, b_at) {
        (Some(a_at), Some(b_at)) => b_at.cmp(a_at),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.last_run_at.cmp(&a.last_run_at),
    });

    runs.into_iter().take(limit).map(|(tc, _)| tc).collect()
}

fn parse_run_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%d.%m.%Y %H:%M"))
        .ok()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseKind;

    fn case(id: &str, status: Status, kind: CaseKind) -> TestCase {
        TestCase::new(id, id, status, kind)
    }

    #[test]
    fn aggregate_counts_statuses_and_types() {
        let records = vec![
            case("1", Status::Passed, CaseKind::Wlan),
            case("2", Status::Failed, CaseKind::Wlan),
            case("3", Status::Passed, CaseKind::Dtc),
        ];

        let stats = aggregate(&records);

        assert_eq!(
            stats,
            Stats {
                total: 3,
                passed: 2,
                failed: 1,
                not_run: 0,
                by_type: BTreeMap::from([("wlan".to_string(), 2), ("dtc".to_string(), 1)]),
            }
        );
    }

    #[test]
    fn empty_and_unknown_values_are_bucketed() {
        let records = vec![
            case("1", Status::parse("blocked"), CaseKind::parse("")),
            case("2", Status::NotRun, CaseKind::parse("telemetry")),
        ];

        let stats = aggregate(&records);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.passed + stats.failed + stats.not_run, 1);
        assert_eq!(stats.by_type.get(UNKNOWN_TYPE), Some(&1));
        assert_eq!(stats.by_type.get("telemetry"), Some(&1));
    }

    #[test]
    fn pass_rate_handles_empty_collection() {
        assert!(aggregate(&[]).pass_rate().abs() < f64::EPSILON);

        let records = vec![
            case("1", Status::Passed, CaseKind::Dtc),
            case("2", Status::Failed, CaseKind::Dtc),
            case("3", Status::Passed, CaseKind::Dtc),
            case("4", Status::NotRun, CaseKind::Dtc),
        ];
        assert!((aggregate(&records).pass_rate() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn recent_runs_are_newest_first_across_formats() {
        let records = vec![
            case("never", Status::NotRun, CaseKind::Dtc),
            case("iso-old", Status::Passed, CaseKind::Dtc).with_last_run_at("2025-01-01T08:00:00Z"),
            case("local", Status::Failed, CaseKind::Dtc).with_last_run_at("15.02.2025 10:30"),
            case("garbage", Status::Failed, CaseKind::Dtc).with_last_run_at("yesterday"),
            case("iso-new", Status::Passed, CaseKind::Dtc).with_last_run_at("2025-03-01T08:00:00+01:00"),
        ];

        let ids: Vec<_> = recent_runs(&records, 10)
            .into_iter()
            .map(|tc| tc.id.as_str())
            .collect();

        assert_eq!(ids, vec!["iso-new", "local", "iso-old", "garbage"]);
        assert_eq!(recent_runs(&records, 2).len(), 2);
    }
}

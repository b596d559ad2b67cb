use crate::{
    interchange::{COLUMN_COUNT, CsvError, HEADER_LINE},
    model::{CaseKind, Status, TestCase},
};
use csv::{ReaderBuilder, StringRecord};

/// Decode interchange CSV into records.
///
/// Surrounding whitespace is trimmed, so trailing spaces of an unquoted last
/// field on the final row are dropped. Blank (or whitespace-only) lines are
/// skipped.
///
/// The first line must be the header, byte for byte. After it, records are
/// split on line breaks outside quotes only, so a quoted field may span
/// lines. A bare `\r` outside quotes also ends a record. Enum membership and
/// id uniqueness are not checked here.
pub fn decode(text: &str) -> Result<Vec<TestCase>, CsvError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let (header, body) = text.split_once('\n').unwrap_or((text, ""));
    let header = header.strip_suffix('\r').unwrap_or(header);
    if header != HEADER_LINE {
        return Err(CsvError::InvalidHeader {
            found: header.to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if is_blank(&row) {
            continue;
        }
        records.push(row_to_record(&row)?);
    }

    Ok(records)
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(|field| field.trim().is_empty()) && row.len() <= 1
}

fn row_to_record(row: &StringRecord) -> Result<TestCase, CsvError> {
    if row.len() != COLUMN_COUNT {
        return Err(CsvError::MalformedRow {
            // the header line precedes the reader's input
            line: row.position().map_or(0, |pos| pos.line() + 1),
            expected: COLUMN_COUNT,
            found: row.len(),
        });
    }

    let field = |index: usize| row.get(index).unwrap_or_default().to_string();
    let last_run_at = field(4);

    Ok(TestCase {
        id: field(0),
        name: field(1),
        status: Status::from(field(2)),
        kind: CaseKind::from(field(3)),
        last_run_at: (!last_run_at.is_empty()).then_some(last_run_at),
        expected_result: field(5),
        description: String::new(),
        tester_name: String::new(),
    })
}

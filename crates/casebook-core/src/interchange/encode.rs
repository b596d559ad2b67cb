use crate::{
    interchange::{CsvError, HEADER},
    model::TestCase,
};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Encode records as interchange CSV: header row, then one row per record.
///
/// A field is quoted only when it holds a comma, a quote or a line break
/// (`\n` or `\r`). Rows end with `\n`, including the last one.
pub fn encode(records: &[TestCase]) -> Result<String, CsvError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(write_error)?;
    for tc in records {
        writer
            .write_record([
                tc.id.as_str(),
                tc.name.as_str(),
                tc.status.as_str(),
                tc.kind.as_str(),
                tc.last_run_at.as_deref().unwrap_or_default(),
                tc.expected_result.as_str(),
            ])
            .map_err(write_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| CsvError::Write(err.to_string()))?;

    String::from_utf8(bytes).map_err(|err| CsvError::Write(err.to_string()))
}

/// Encode a single record, as used for per-record export.
pub fn encode_one(record: &TestCase) -> Result<String, CsvError> {
    encode(std::slice::from_ref(record))
}

fn write_error(err: csv::Error) -> CsvError {
    CsvError::Write(err.to_string())
}

///
/// TESTS
///

//! CSV interchange format.
//!
//! Six fixed columns, used for import/export and backups. Only a subset of
//! the record travels through this format: `description` and `testerName`
//! are dropped on export and come back empty on import.
//!
//! The codec never touches a store. Import validation (ids, uniqueness)
//! happens when the decoded rows are handed to `Store::replace_all`.

mod decode;
mod encode;
mod error;

#[cfg(test)]
mod tests;

pub use decode::decode;
pub use encode::{encode, encode_one};
pub use error::CsvError;

/// Column names, in wire order.
pub const HEADER: [&str; 6] = [
    "id",
    "name",
    "status",
    "type",
    "lastRunAt",
    "expectedResult",
];

/// The header row as it must appear, byte for byte.
pub const HEADER_LINE: &str = "id,name,status,type,lastRunAt,expectedResult";

/// Number of columns every data row must carry.
pub const COLUMN_COUNT: usize = HEADER.len();

/// Export file name for the whole collection.
pub const COLLECTION_FILE_NAME: &str = "test-cases.csv";

/// Export file name: the collection name, or `<id>.csv` for a single record.
#[must_use]
pub fn export_file_name(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{id}.csv"),
        None => COLLECTION_FILE_NAME.to_string(),
    }
}

//! CSV to JSON conversion used by the `csv_to_json` binary.

mod csv_json;

pub use csv_json::*;

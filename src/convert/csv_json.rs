use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub type JsonRow = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads CSV with a header row into one object per record. Values stay strings;
/// cells past the header are keyed `field<N>` by their 1-based column.
pub fn csv_to_json<R: Read>(reader: R) -> Result<Vec<JsonRow>, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Map::with_capacity(record.len());
        for (column, cell) in record.iter().enumerate() {
            let key = match headers.get(column) {
                Some(header) => header.to_owned(),
                None => format!("field{}", column + 1),
            };
            row.insert(key, Value::String(cell.to_owned()));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Converts `input` and writes the rows to `output` as one compact JSON array.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize, ConvertError> {
    let rows = csv_to_json(BufReader::new(File::open(input)?))?;

    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer(&mut writer, &rows)?;
    writer.flush()?;
    Ok(rows.len())
}

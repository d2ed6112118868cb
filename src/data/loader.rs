use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use super::model::{ColumnSchema, Dataset, PredictedDataset, Sample, Table};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Decode an uploaded CSV payload into a [`Table`].
///
/// Layout rules:
/// * With a header row, the first schema in `schemas` whose brightness and
///   target columns are both present wins. Extra columns are ignored.
/// * Without a header (first row entirely numeric), columns are mapped by
///   position: `brightness,target` or `brightness,target,prediction`.
/// * Every cell in a used column must be a finite number.
pub fn decode_table(bytes: &[u8], schemas: &[ColumnSchema]) -> Result<Table, DataError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(DataError::EmptyPayload);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(bytes);

    let mut records = reader.records();
    let first = match records.next() {
        Some(record) => record?,
        None => return Err(DataError::EmptyPayload),
    };

    let (layout, mut rows) = if is_numeric_row(&first) {
        (positional_layout(first.len())?, vec![first])
    } else {
        (header_layout(&first, schemas)?, Vec::new())
    };

    for record in records {
        rows.push(record?);
    }

    let mut samples = Vec::with_capacity(rows.len());
    let mut predictions = layout.prediction.map(|_| Vec::with_capacity(rows.len()));

    // 1-based data row numbers, matching what a spreadsheet shows below the header.
    for (row_no, record) in rows.iter().enumerate().map(|(i, r)| (i + 1, r)) {
        let brightness = parse_cell(record, layout.brightness, row_no, layout.schema.brightness)?;
        let true_size = parse_cell(record, layout.target, row_no, layout.schema.target)?;
        samples.push(Sample::new(brightness, true_size));

        if let (Some(idx), Some(values)) = (layout.prediction, predictions.as_mut()) {
            values.push(parse_cell(record, idx, row_no, layout.schema.prediction)?);
        }
    }

    Ok(Table {
        dataset: Dataset::new(layout.schema, samples),
        predictions,
    })
}

/// Encode a plain dataset: header row, then one row per sample.
pub fn encode_dataset(dataset: &Dataset) -> Result<Vec<u8>, DataError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(dataset.schema.dataset_header())?;
    for sample in &dataset.samples {
        writer.write_record([
            sample.brightness.to_string(),
            sample.true_size.to_string(),
        ])?;
    }
    finish(writer)
}

/// Encode a dataset with its prediction column appended.
pub fn encode_predicted(predicted: &PredictedDataset) -> Result<Vec<u8>, DataError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(predicted.dataset.schema.predicted_header())?;
    for (sample, prediction) in predicted.rows() {
        writer.write_record([
            sample.brightness.to_string(),
            sample.true_size.to_string(),
            prediction.to_string(),
        ])?;
    }
    finish(writer)
}

// ---------------------------------------------------------------------------
// Layout resolution
// ---------------------------------------------------------------------------

/// Column indices of the semantic columns inside a record.
struct Layout {
    schema: ColumnSchema,
    brightness: usize,
    target: usize,
    prediction: Option<usize>,
}

fn positional_layout(width: usize) -> Result<Layout, DataError> {
    match width {
        2 | 3 => Ok(Layout {
            schema: ColumnSchema::CANONICAL,
            brightness: 0,
            target: 1,
            prediction: (width == 3).then_some(2),
        }),
        other => Err(DataError::UnsupportedWidth(other)),
    }
}

fn header_layout(header: &StringRecord, schemas: &[ColumnSchema]) -> Result<Layout, DataError> {
    let position = |name: &str| header.iter().position(|h| h.eq_ignore_ascii_case(name));

    for schema in schemas {
        if let (Some(brightness), Some(target)) = (position(schema.brightness), position(schema.target)) {
            log::debug!("Resolved table header against {schema} schema");
            return Ok(Layout {
                schema: *schema,
                brightness,
                target,
                prediction: position(schema.prediction),
            });
        }
    }

    // Report against the preferred schema so the message names real headers.
    let preferred = schemas.first().copied().unwrap_or_default();
    let missing = if position(preferred.brightness).is_none() {
        preferred.brightness
    } else {
        preferred.target
    };
    Err(DataError::MissingColumn(missing.to_string()))
}

// ---------------------------------------------------------------------------
// Cell helpers
// ---------------------------------------------------------------------------

fn is_numeric_row(record: &StringRecord) -> bool {
    !record.is_empty() && record.iter().all(|field| field.parse::<f64>().is_ok())
}

fn parse_cell(record: &StringRecord, idx: usize, row: usize, column: &str) -> Result<f64, DataError> {
    let raw = record.get(idx).unwrap_or("");
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataError::InvalidNumber {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, DataError> {
    writer
        .into_inner()
        .map_err(|e| DataError::Malformed(e.error().to_string()))
}

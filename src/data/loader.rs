use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use tracing::debug;

use crate::core::BeverageRecord;
use crate::error::{ChartError, ChartResult};

pub const BEVERAGE_COLUMN: &str = "Beverage";
pub const SIZE_COLUMN: &str = "Size";
pub const MILK_TYPE_COLUMN: &str = "Milk type";
pub const CALORIES_COLUMN: &str = "Calories";

struct ColumnLayout {
    beverage: usize,
    size: usize,
    milk_type: usize,
    calories: usize,
    headers: StringRecord,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> ChartResult<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or(ChartError::MissingColumn(name))
        };

        Ok(Self {
            beverage: find(BEVERAGE_COLUMN)?,
            size: find(SIZE_COLUMN)?,
            milk_type: find(MILK_TYPE_COLUMN)?,
            calories: find(CALORIES_COLUMN)?,
            headers: headers.clone(),
        })
    }

    fn is_known(&self, index: usize) -> bool {
        index == self.beverage
            || index == self.size
            || index == self.milk_type
            || index == self.calories
    }

    fn to_record(&self, row: &StringRecord, line: usize) -> ChartResult<BeverageRecord> {
        let field = |index: usize| row.get(index).unwrap_or_default();
        let calories = parse_calories(field(self.calories), line)?;

        let extra: IndexMap<String, String> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.is_known(*index))
            .map(|(index, header)| (header.to_owned(), field(index).to_owned()))
            .collect();

        Ok(BeverageRecord {
            beverage: field(self.beverage).to_owned(),
            size: field(self.size).to_owned(),
            milk_type: field(self.milk_type).to_owned(),
            calories,
            extra,
        })
    }
}

/// Blank cells count as zero calories, like a numeric coercion of empty text.
///
/// Stricter than a browser `Number()` coercion: hex literals and text that
/// would coerce to NaN fail the whole load instead of silently dropping the
/// row, and `inf`/`NaN` spellings are rejected.
fn parse_calories(raw: &str, line: usize) -> ChartResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|calories| calories.is_finite())
        .ok_or_else(|| ChartError::InvalidCalories {
            row: line,
            value: raw.to_owned(),
        })
}

/// Reads beverage records from CSV with a header row, keeping file order.
pub fn load_records_from_reader<R: Read>(reader: R) -> ChartResult<Vec<BeverageRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let line = row
            .position()
            .map_or(index + 2, |position| position.line() as usize);
        records.push(layout.to_record(&row, line)?);
    }

    debug!(
        count = records.len(),
        extra_columns = layout.headers.len().saturating_sub(4),
        "loaded beverage records"
    );
    Ok(records)
}

pub fn load_records_from_str(input: &str) -> ChartResult<Vec<BeverageRecord>> {
    load_records_from_reader(input.as_bytes())
}

pub fn load_records_from_path(path: impl AsRef<Path>) -> ChartResult<Vec<BeverageRecord>> {
    let file = File::open(path.as_ref())?;
    load_records_from_reader(file)
}

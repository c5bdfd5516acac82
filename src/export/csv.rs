//! CSV Export functionality
//!
//! One row per day with a column per budget and a total column, followed by
//! the statistics as summary rows.

use std::io::Write;

use crate::display::stats_rows;
use crate::error::{HistoryError, HistoryResult};
use crate::export::json::HistoryExport;

/// Write an export as CSV
pub fn export_csv<W: Write>(export: &HistoryExport, writer: W) -> HistoryResult<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    let mut header = vec!["Day".to_string()];
    header.extend(export.budgets.iter().map(|b| b.name.clone()));
    header.push("Total".to_string());
    csv.write_record(&header).map_err(export_error)?;

    for (i, day) in export.days.iter().enumerate() {
        let mut record = vec![day.clone()];
        let mut total = 0.0;
        for budget in &export.budgets {
            let value = budget.data.get(i).copied().unwrap_or(0.0);
            total += value;
            record.push(format!("{:.2}", value));
        }
        record.push(format!("{:.2}", total));
        csv.write_record(&record).map_err(export_error)?;
    }

    csv.write_record([""]).map_err(export_error)?;
    for row in stats_rows(&export.statistics) {
        csv.write_record(["SUMMARY", row.field, row.value.as_str()])
            .map_err(export_error)?;
    }

    csv.flush()
        .map_err(|e| HistoryError::Export(e.to_string()))?;
    Ok(())
}

fn export_error(err: csv::Error) -> HistoryError {
    HistoryError::Export(err.to_string())
}

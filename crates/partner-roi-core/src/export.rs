//! Delimited-text export of the monthly series.

use std::io;

use crate::projection::MonthlyRecord;
use crate::RoiResult;

pub const EXPORT_HEADER: [&str; 5] = [
    "Month",
    "Revenue",
    "Expenses",
    "Net Monthly",
    "Cumulative Cash Flow",
];

pub const DEFAULT_EXPORT_FILENAME: &str = "partner-roi-projection.csv";

/// Write the header row and one row per record, in month order.
pub fn write_monthly_csv<W: io::Write>(records: &[MonthlyRecord], writer: W) -> RoiResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;

    let mut ordered: Vec<&MonthlyRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.month);

    for r in ordered {
        wtr.write_record([
            r.month.to_string(),
            r.revenue.to_string(),
            r.expenses.to_string(),
            r.net_monthly.to_string(),
            r.cumulative_cash.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the export as a string.
pub fn monthly_csv_string(records: &[MonthlyRecord]) -> RoiResult<String> {
    let mut buf = Vec::new();
    write_monthly_csv(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| crate::RoiError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(month: u32) -> MonthlyRecord {
        MonthlyRecord {
            month,
            revenue: dec!(1500),
            expenses: dec!(2500),
            net_monthly: dec!(-1000),
            cumulative_cash: dec!(-31000),
        }
    }

    #[test]
    fn test_header_and_row() {
        let out = monthly_csv_string(&[record(1)]).unwrap();
        assert_eq!(
            out,
            "Month,Revenue,Expenses,Net Monthly,Cumulative Cash Flow\n1,1500,2500,-1000,-31000\n"
        );
    }

    #[test]
    fn test_rows_in_month_order() {
        let out = monthly_csv_string(&[record(2), record(1)]).unwrap();
        let months: Vec<&str> = out
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(months, vec!["1", "2"]);
    }

    #[test]
    fn test_empty_series_has_header_only() {
        let out = monthly_csv_string(&[]).unwrap();
        assert_eq!(out.lines().count(), 1);
    }
}

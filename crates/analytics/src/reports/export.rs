use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write report rows as CSV with a header row taken from the field names.
///
/// An empty report produces an empty output (no header).
pub fn write_csv<R: Serialize, W: Write>(rows: &[R], writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write report rows to a CSV file, creating parent directories as needed
pub fn write_csv_file<R: Serialize>(rows: &[R], path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = std::fs::File::create(path)?;
    write_csv(rows, file)?;
    tracing::info!("Report written: {} ({} rows)", path.display(), rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::reports::r202_low_stock::LowStockReportRow;

    #[test]
    fn test_write_csv() {
        let rows = vec![LowStockReportRow {
            sku: "A-1".to_string(),
            name: "Stapler, heavy duty".to_string(),
            category: "Office".to_string(),
            current_stock: 1,
            low_stock_threshold: 5,
            reorder_quantity: 9,
        }];

        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "SKU,Name,Category,Current Stock,Low Stock Threshold,Reorder Quantity\n\
             A-1,\"Stapler, heavy duty\",Office,1,5,9\n"
        );
    }

    #[test]
    fn test_write_empty_csv() {
        let rows: Vec<LowStockReportRow> = Vec::new();
        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        assert!(out.is_empty());
    }
}

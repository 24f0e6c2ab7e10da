use std::io::{Read, Seek};

use calamine::{Data, Reader, Xlsx};

use crate::error::WordguardError;
use crate::readers::Row;

/// Read the first worksheet of an xlsx workbook into text rows.
///
/// The first row of the used range is the header row. Every cell is turned
/// into text; styles, formulas and other sheets are ignored. Rows with no
/// content at all are skipped.
pub fn read_rows<RS: Read + Seek>(source: RS) -> Result<Vec<Row>, WordguardError> {
    let mut workbook: Xlsx<_> = Xlsx::new(source)
        .map_err(|e| WordguardError::Spreadsheet(format!("failed to open xlsx: {e}")))?;

    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| WordguardError::Spreadsheet("workbook has no worksheets".into()))?
        .map_err(|e| WordguardError::Spreadsheet(format!("failed to read first sheet: {e}")))?;

    let mut sheet_rows = sheet.rows();
    let headers: Vec<String> = match sheet_rows.next() {
        Some(cells) => cells.iter().map(cell_as_text).collect(),
        None => return Ok(Vec::new()),
    };
    tracing::debug!(columns = headers.len(), "read spreadsheet header row");

    let rows: Vec<Row> = sheet_rows
        .filter(|cells| cells.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|cells| Row::from_fields(headers.iter().cloned(), cells.iter().map(cell_as_text)))
        .collect();

    tracing::debug!(rows = rows.len(), "read spreadsheet data rows");
    Ok(rows)
}

fn cell_as_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::Empty => String::new(),
        _ => format!("{cell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cell_as_text() {
        assert_eq!(cell_as_text(&Data::String("Quantori".into())), "Quantori");
        assert_eq!(cell_as_text(&Data::Float(10.0)), "10");
        assert_eq!(cell_as_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_as_text(&Data::Int(42)), "42");
        assert_eq!(cell_as_text(&Data::Bool(true)), "true");
        assert_eq!(cell_as_text(&Data::Empty), "");
    }

    #[test]
    fn test_not_a_workbook() {
        let err = read_rows(Cursor::new(b"User,Company Name\n".to_vec())).unwrap_err();
        assert!(matches!(err, WordguardError::Spreadsheet(_)));
    }
}

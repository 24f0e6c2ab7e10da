use std::io::{Cursor, Read};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use encoding_rs::Encoding;

use crate::error::WordguardError;
use crate::readers::Row;

/// Reader for header-first comma-separated files.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedReader {
    encoding: &'static Encoding,
}

impl DelimitedReader {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// Buffer and decode the whole source, then hand out rows lazily.
    ///
    /// Input is decoded in the configured encoding only. A leading BOM of that
    /// encoding is dropped and malformed bytes are replaced, so decoding never
    /// fails. Records may be shorter or longer than the
    /// header row.
    pub fn read_rows<R: Read>(&self, mut reader: R) -> Result<DelimitedRows, WordguardError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let (text, had_errors) = self.encoding.decode_with_bom_removal(&bytes);
        if had_errors {
            tracing::warn!(
                encoding = self.encoding.name(),
                "malformed byte sequences replaced while decoding delimited text"
            );
        }

        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(text.into_owned()));

        let headers = csv_reader.headers()?.clone();
        tracing::debug!(columns = headers.len(), "read delimited header row");

        Ok(DelimitedRows {
            headers,
            records: csv_reader.into_records(),
        })
    }
}

/// Data rows of a delimited file, keyed by the header row.
pub struct DelimitedRows {
    headers: StringRecord,
    records: StringRecordsIntoIter<Cursor<String>>,
}

impl Iterator for DelimitedRows {
    type Item = Result<Row, WordguardError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(|r| Row::from_fields(self.headers.iter(), r.iter()))
                .map_err(WordguardError::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(content: &[u8]) -> Vec<Row> {
        DelimitedReader::new(encoding_rs::UTF_8)
            .read_rows(content)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_parse_simple_csv() {
        let rows = rows(b"User,Company Name,Age\nIvan,Quantori,30\nVanya,Other,31\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[1].header, "Company Name");
        assert_eq!(rows[0].cells[1].value.as_deref(), Some("Quantori"));
        assert_eq!(rows[1].cells[2].value.as_deref(), Some("31"));
    }

    #[test]
    fn test_bom_stripped_from_first_header() {
        let rows = rows(b"\xEF\xBB\xBFCompany Name,User\nQuantori,u1\n");
        assert_eq!(rows[0].cells[0].header, "Company Name");
    }

    #[test]
    fn test_utf16_bom_does_not_switch_encoding() {
        let rows = rows(b"\xFF\xFEUser,Company Name\nu1,Quantori\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[0].header, "\u{FFFD}\u{FFFD}User");
        assert_eq!(rows[0].cells[1].header, "Company Name");
        assert_eq!(rows[0].cells[1].value.as_deref(), Some("Quantori"));

        let policy = crate::policy::TabularPolicy::new("Quantori", "Company Name");
        let verdict = policy.evaluate_rows(rows);
        assert!(verdict.valid, "{}", verdict.reason);
    }

    #[test]
    fn test_quoted_fields() {
        let rows = rows(b"Company Name,Note\n\"Quantori, LLC\",\"said \"\"hi\"\"\"\n");
        assert_eq!(rows[0].cells[0].value.as_deref(), Some("Quantori, LLC"));
        assert_eq!(rows[0].cells[1].value.as_deref(), Some("said \"hi\""));
    }

    #[test]
    fn test_ragged_records() {
        let rows = rows(b"A,B,C\n1\n1,2,3,4\n");
        assert_eq!(rows[0].cells.len(), 3);
        assert_eq!(rows[0].cells[1].value, None);
        assert_eq!(rows[1].cells.len(), 4);
        assert_eq!(rows[1].cells[3].header, "");
    }

    #[test]
    fn test_header_only_has_no_rows() {
        assert!(rows(b"User,Company Name\n").is_empty());
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        assert!(rows(b"").is_empty());
    }

    #[test]
    fn test_malformed_bytes_replaced() {
        let rows = rows(b"Company Name\nQuan\xfftori\n");
        assert_eq!(rows[0].cells[0].value.as_deref(), Some("Quan\u{FFFD}tori"));
    }
}

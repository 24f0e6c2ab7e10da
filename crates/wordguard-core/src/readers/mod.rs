pub mod delimited;
pub mod plaintext;
pub mod spreadsheet;

use std::fmt;
use std::path::Path;

/// One supported upload format. The set is closed: anything else is
/// rejected at dispatch without being opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// `.txt`, streamed in chunks.
    PlainText,
    /// `.csv`, header row first.
    Delimited,
    /// `.xlsx`, first worksheet only.
    Spreadsheet,
}

impl FileFormat {
    pub const ALL: [FileFormat; 3] = [
        FileFormat::PlainText,
        FileFormat::Delimited,
        FileFormat::Spreadsheet,
    ];

    /// Extension (without the dot) this format is registered under.
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::PlainText => "txt",
            FileFormat::Delimited => "csv",
            FileFormat::Spreadsheet => "xlsx",
        }
    }

    /// Map an extension, with or without a leading dot, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<FileFormat> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        FileFormat::ALL
            .into_iter()
            .find(|f| ext.eq_ignore_ascii_case(f.extension()))
    }

    /// Format of a path by its final extension. No content sniffing.
    pub fn from_path(path: &Path) -> Option<FileFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(FileFormat::from_extension)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::PlainText => write!(f, "plain text"),
            FileFormat::Delimited => write!(f, "delimited text"),
            FileFormat::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

/// A single field of a tabular row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Header text exactly as it appeared in the file.
    pub header: String,
    /// Raw, not yet normalized, value. `None` for a missing trailing field.
    pub value: Option<String>,
}

/// One data row of a tabular source, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// Pair headers with values. Missing trailing values become `None`;
    /// surplus values are keyed by the empty header.
    pub fn from_fields<H, V>(headers: H, values: V) -> Row
    where
        H: IntoIterator,
        H::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let mut headers = headers.into_iter().fuse();
        let mut values = values.into_iter().fuse();
        let mut cells = Vec::new();

        loop {
            match (headers.next(), values.next()) {
                (Some(h), v) => cells.push(Cell {
                    header: h.into(),
                    value: v.map(Into::into),
                }),
                (None, Some(v)) => cells.push(Cell {
                    header: String::new(),
                    value: Some(v.into()),
                }),
                (None, None) => break,
            }
        }

        Row { cells }
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.header.as_str())
    }
}

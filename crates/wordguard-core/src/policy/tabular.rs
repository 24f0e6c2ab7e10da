use std::convert::Infallible;

use crate::normalize::{fold_case, normalize};
use crate::policy::outcome::ValidationResult;
use crate::readers::Row;

/// Column-scoped search policy shared by delimited and spreadsheet sources.
///
/// The target word may appear in the designated column and nowhere else.
/// One hit outside that column rejects the whole file at once; hits inside
/// it are only recorded, so later rows are still checked.
#[derive(Debug, Clone)]
pub struct TabularPolicy {
    word: String,
    folded_word: String,
    column: String,
    folded_column: String,
}

impl TabularPolicy {
    pub fn new(target_word: &str, column: &str) -> Self {
        Self {
            word: target_word.to_string(),
            folded_word: fold_case(target_word),
            column: column.to_string(),
            folded_column: normalize(Some(column)),
        }
    }

    /// Evaluate a sequence of rows.
    ///
    /// Rows are pulled lazily, so a short-circuit leaves the remainder of the
    /// source unread. A row that fails to load aborts evaluation with that
    /// error.
    pub fn evaluate<I, E>(&self, rows: I) -> Result<ValidationResult, E>
    where
        I: IntoIterator<Item = Result<Row, E>>,
    {
        if self.folded_word.is_empty() {
            return Ok(ValidationResult::empty_target_word());
        }

        let mut designated: Option<String> = None;
        let mut found_in_column = false;
        let mut row_count = 0usize;

        for row in rows {
            let row = row?;
            row_count += 1;

            if designated.is_none() {
                let Some(header) = self.resolve_column(&row) else {
                    tracing::debug!(column = %self.column, "designated column missing");
                    return Ok(ValidationResult::missing_column(&self.column));
                };
                tracing::debug!(header = %header, "resolved designated column");
                designated = Some(header);
            }
            let column_header = designated.as_deref().unwrap_or_default();

            for cell in &row.cells {
                let value = normalize(cell.value.as_deref());
                if !value.contains(&self.folded_word) {
                    continue;
                }
                if cell.header == column_header {
                    found_in_column = true;
                } else {
                    tracing::debug!(
                        row = row_count,
                        header = %cell.header,
                        "target word found outside designated column"
                    );
                    return Ok(ValidationResult::found_outside_column(
                        &self.word,
                        &self.column,
                    ));
                }
            }
        }

        if row_count == 0 {
            return Ok(ValidationResult::no_data_rows());
        }

        tracing::debug!(rows = row_count, found_in_column, "tabular scan complete");
        if found_in_column {
            Ok(ValidationResult::found_in_column(&self.word, &self.column))
        } else {
            Ok(ValidationResult::not_found_in_column(&self.word, &self.column))
        }
    }

    /// Evaluate rows that cannot fail to load, consuming them.
    pub fn evaluate_rows<I>(&self, rows: I) -> ValidationResult
    where
        I: IntoIterator<Item = Row>,
    {
        let result = self.evaluate(rows.into_iter().map(Ok::<Row, Infallible>));
        match result {
            Ok(verdict) => verdict,
            Err(never) => match never {},
        }
    }

    /// Find the header matching the configured column name, comparing
    /// trimmed and case-folded text. The original header text is returned.
    fn resolve_column(&self, row: &Row) -> Option<String> {
        row.headers()
            .find(|h| normalize(Some(*h)) == self.folded_column)
            .map(str::to_string)
    }
}

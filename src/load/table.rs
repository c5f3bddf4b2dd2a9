// src/load/table.rs

use std::collections::HashMap;

/// Columns every input archive must carry. Anything else in the header is
/// kept but never read.
pub const REQUIRED_COLUMNS: [&str; 16] = [
    "client_id",
    "age",
    "job",
    "marital",
    "education",
    "credit_default",
    "mortgage",
    "number_contacts",
    "contact_duration",
    "previous_campaign_contacts",
    "previous_outcome",
    "campaign_outcome",
    "day",
    "month",
    "cons_price_idx",
    "euribor_three_months",
];

/// The unified record set: one header shared by every source, and every data
/// row from every archive in load order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names as they appear in the source header.
    pub headers: Vec<String>,
    /// Each data row, one `String` per header column.
    pub rows: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            headers,
            rows: Vec::new(),
            index,
        }
    }

    /// First required column absent from the header, if any.
    pub fn missing_column(&self) -> Option<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .find(|c| !self.index.contains_key(*c))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append every row of `other`. Callers check that the headers match.
    pub fn append(&mut self, other: RawTable) {
        if self.headers.is_empty() && self.rows.is_empty() {
            *self = other;
        } else {
            self.rows.extend(other.rows);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            index: &self.index,
            values,
        })
    }
}

/// Borrowed view of one data row, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: &'a HashMap<String, usize>,
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// Raw cell text; `None` when the column does not exist.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.index
            .get(column)
            .and_then(|&i| self.values.get(i))
            .map(String::as_str)
    }

    /// Raw cell text, with an absent column read as an empty cell.
    pub fn text(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    /// Cell text with an empty cell read as missing.
    pub fn value(&self, column: &str) -> Option<&'a str> {
        self.get(column).filter(|s| !s.is_empty())
    }
}

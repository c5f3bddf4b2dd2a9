// src/transform/economics.rs

use serde::Serialize;

use super::OutputRecord;
use crate::load::Row;

/// Economic indicators, copied through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EconomicsRecord {
    pub client_id: String,
    pub cons_price_idx: String,
    pub euribor_three_months: String,
}

impl EconomicsRecord {
    pub fn from_row(row: &Row<'_>) -> Self {
        Self {
            client_id: row.text("client_id").to_string(),
            cons_price_idx: row.text("cons_price_idx").to_string(),
            euribor_three_months: row.text("euribor_three_months").to_string(),
        }
    }
}

impl OutputRecord for EconomicsRecord {
    const FILE_NAME: &'static str = "economics.csv";
    const COLUMNS: &'static [&'static str] = &["client_id", "cons_price_idx", "euribor_three_months"];
}

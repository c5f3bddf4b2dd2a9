// src/transform/client.rs

use serde::Serialize;

use super::{fields, OutputRecord};
use crate::load::Row;

/// One cleaned client-identity row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pub client_id: String,
    pub age: String,
    pub job: String,
    pub marital: String,
    pub education: Option<String>,
    pub credit_default: u8,
    pub mortgage: u8,
}

impl ClientRecord {
    pub fn from_row(row: &Row<'_>) -> Self {
        Self {
            client_id: row.text("client_id").to_string(),
            age: row.text("age").to_string(),
            job: fields::clean_job(row.text("job")),
            marital: row.text("marital").to_string(),
            education: fields::clean_education(row.value("education")),
            credit_default: fields::flag(row.value("credit_default"), "yes"),
            mortgage: fields::flag(row.value("mortgage"), "yes"),
        }
    }
}

impl OutputRecord for ClientRecord {
    const FILE_NAME: &'static str = "client.csv";
    const COLUMNS: &'static [&'static str] = &[
        "client_id",
        "age",
        "job",
        "marital",
        "education",
        "credit_default",
        "mortgage",
    ];
}

// src/transform/campaign.rs

use serde::Serialize;

use super::{date, fields, OutputRecord};
use crate::load::Row;

/// One cleaned campaign-interaction row. `day` and `month` are consumed to
/// build `last_contact_date` and are not carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRecord {
    pub client_id: String,
    pub number_contacts: String,
    pub contact_duration: String,
    pub previous_campaign_contacts: String,
    pub previous_outcome: u8,
    pub campaign_outcome: u8,
    pub last_contact_date: Option<String>,
}

impl CampaignRecord {
    pub fn from_row(row: &Row<'_>, year: i32) -> Self {
        Self {
            client_id: row.text("client_id").to_string(),
            number_contacts: row.text("number_contacts").to_string(),
            contact_duration: row.text("contact_duration").to_string(),
            previous_campaign_contacts: row.text("previous_campaign_contacts").to_string(),
            previous_outcome: fields::flag(row.value("previous_outcome"), "success"),
            campaign_outcome: fields::flag(row.value("campaign_outcome"), "yes"),
            last_contact_date: date::last_contact_date(row.value("day"), row.value("month"), year),
        }
    }
}

impl OutputRecord for CampaignRecord {
    const FILE_NAME: &'static str = "campaign.csv";
    const COLUMNS: &'static [&'static str] = &[
        "client_id",
        "number_contacts",
        "contact_duration",
        "previous_campaign_contacts",
        "previous_outcome",
        "campaign_outcome",
        "last_contact_date",
    ];
}

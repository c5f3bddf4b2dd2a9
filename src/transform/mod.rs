// src/transform/mod.rs

pub mod campaign;
pub mod client;
pub mod date;
pub mod economics;
pub mod fields;

pub use campaign::CampaignRecord;
pub use client::ClientRecord;
pub use economics::EconomicsRecord;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::load::RawTable;

/// A typed output row that knows where it is written and under which header.
///
/// `COLUMNS` must list the struct's fields in declaration order; the writer
/// emits it as the header row and then serializes each record without one.
pub trait OutputRecord: Serialize {
    const FILE_NAME: &'static str;
    const COLUMNS: &'static [&'static str];
}

/// The three cleaned record sequences, each in input row order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub clients: Vec<ClientRecord>,
    pub campaigns: Vec<CampaignRecord>,
    pub economics: Vec<EconomicsRecord>,
}

impl Outputs {
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

/// Split the unified record set into client, campaign and economics rows.
/// One output row per input row in each sequence.
#[instrument(level = "debug", skip(table), fields(rows = table.len()))]
pub fn split_records(table: &RawTable, contact_year: i32) -> Outputs {
    let mut out = Outputs {
        clients: Vec::with_capacity(table.len()),
        campaigns: Vec::with_capacity(table.len()),
        economics: Vec::with_capacity(table.len()),
    };

    for row in table.iter() {
        out.clients.push(ClientRecord::from_row(&row));
        out.campaigns.push(CampaignRecord::from_row(&row, contact_year));
        out.economics.push(EconomicsRecord::from_row(&row));
    }

    let undated = out
        .campaigns
        .iter()
        .filter(|c| c.last_contact_date.is_none())
        .count();
    debug!(undated, "split complete");
    out
}

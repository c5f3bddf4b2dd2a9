// src/test_support.rs

use anyhow::Result;
use std::{fs::File, io::Write, path::Path};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Input header in the column order the archives ship with.
pub const HEADER: &str = "client_id,age,job,marital,education,credit_default,mortgage,\
number_contacts,contact_duration,previous_campaign_contacts,previous_outcome,\
campaign_outcome,day,month,cons_price_idx,euribor_three_months";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,campaign_split=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Write a single-member archive at `path`.
pub fn write_zip(path: &Path, member: &str, content: &str) -> Result<()> {
    write_zip_members(path, &[(member, content)])
}

pub fn write_zip_members(path: &Path, members: &[(&str, &str)]) -> Result<()> {
    let mut zip = ZipWriter::new(File::create(path)?);
    for (name, content) in members {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file(*name, options)?;
        zip.write_all(content.as_bytes())?;
    }
    zip.finish()?;
    Ok(())
}

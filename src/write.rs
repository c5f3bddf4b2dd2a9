// src/write.rs

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;
use tracing::{debug, info, instrument};

use crate::transform::{CampaignRecord, ClientRecord, EconomicsRecord, OutputRecord, Outputs};

/// Serialize `records` to `path` as comma-separated text: the `COLUMNS` header
/// first, then one line per record. Returns the number of data rows written.
pub fn write_csv<T: OutputRecord>(path: &Path, records: &[T]) -> Result<usize> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    wtr.write_record(T::COLUMNS)
        .with_context(|| format!("writing header to {}", path.display()))?;
    for (idx, rec) in records.iter().enumerate() {
        wtr.serialize(rec)
            .with_context(|| format!("writing row {} to {}", idx, path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    Ok(records.len())
}

/// Write `client.csv`, `campaign.csv` and `economics.csv` under `out_dir`.
///
/// All three files are written into a hidden staging directory inside
/// `out_dir` first. A failure while staging leaves the previous outputs
/// intact. Once all three are complete they are renamed into place one file
/// at a time; each rename replaces its target atomically, but the three
/// renames together are not a single atomic step.
#[instrument(level = "info", skip(out_dir, outputs), fields(out = %out_dir.display()))]
pub fn write_outputs(out_dir: &Path, outputs: &Outputs) -> Result<Vec<(&'static str, usize)>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let staging = tempfile::Builder::new()
        .prefix(".staging-")
        .tempdir_in(out_dir)
        .with_context(|| format!("creating staging directory in {}", out_dir.display()))?;
    debug!(staging = %staging.path().display(), "staging outputs");

    let staged = [
        stage::<ClientRecord>(&staging, &outputs.clients)?,
        stage::<CampaignRecord>(&staging, &outputs.campaigns)?,
        stage::<EconomicsRecord>(&staging, &outputs.economics)?,
    ];

    let mut written = Vec::with_capacity(staged.len());
    for (name, path, rows) in staged {
        let dest = out_dir.join(name);
        fs::rename(&path, &dest)
            .with_context(|| format!("renaming {:?} -> {:?}", path, dest))?;
        info!(file = name, rows, "wrote output");
        written.push((name, rows));
    }

    Ok(written)
}

/// Number of data rows (header excluded) in a CSV file on disk.
pub fn count_csv_rows(path: &Path) -> Result<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut rows = 0;
    for record in rdr.records() {
        record.with_context(|| format!("reading {}", path.display()))?;
        rows += 1;
    }
    Ok(rows)
}

fn stage<T: OutputRecord>(
    staging: &TempDir,
    records: &[T],
) -> Result<(&'static str, PathBuf, usize)> {
    let path = staging.path().join(T::FILE_NAME);
    let rows = write_csv(&path, records)?;
    Ok((T::FILE_NAME, path, rows))
}

// src/load/mod.rs

pub mod table;

pub use table::{RawTable, Row, REQUIRED_COLUMNS};

use csv::ReaderBuilder;
use glob::{glob_with, MatchOptions};
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument};
use zip::ZipArchive;

use crate::error::DataReadError;

/// All `*.zip` files directly under `dir`, sorted by path. Names starting with
/// a dot (`._bank.csv.zip` and the like) are not matched.
///
/// A directory that does not exist simply has no archives.
pub fn discover_archives(dir: &Path) -> Result<Vec<PathBuf>, DataReadError> {
    let pattern = format!("{}/*.zip", glob::Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let paths = glob_with(&pattern, options).map_err(|source| DataReadError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in paths {
        let path = entry?;
        if path.is_file() {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Open one archive, check it holds exactly one file, and parse that file as
/// comma-separated text with a header row. Nothing is extracted to disk; the
/// member is streamed straight into the CSV reader.
#[instrument(level = "info", skip(zip_path), fields(path = %zip_path.display()))]
pub fn load_archive(zip_path: &Path) -> Result<RawTable, DataReadError> {
    let file = File::open(zip_path).map_err(|source| DataReadError::Open {
        path: zip_path.to_path_buf(),
        source,
    })?;
    let archive_err = |source| DataReadError::Archive {
        path: zip_path.to_path_buf(),
        source,
    };
    let mut archive = ZipArchive::new(file).map_err(archive_err)?;

    let mut members = Vec::with_capacity(1);
    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(archive_err)?;
        if entry.is_file() {
            members.push(i);
        }
    }
    let &[member] = members.as_slice() else {
        return Err(DataReadError::EntryCount {
            path: zip_path.to_path_buf(),
            found: members.len(),
        });
    };

    let entry = archive.by_index(member).map_err(archive_err)?;
    let entry_name = entry.name().to_string();
    let csv_err = |source| DataReadError::Csv {
        path: zip_path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(entry);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();
    debug!(entry = %entry_name, ?headers, "read header");

    let mut table = RawTable::new(headers);
    if let Some(column) = table.missing_column() {
        return Err(DataReadError::MissingColumn {
            path: zip_path.to_path_buf(),
            column: column.to_string(),
        });
    }

    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        table.rows.push(record.iter().map(str::to_string).collect());
    }

    info!(entry = %entry_name, rows = table.len(), "loaded archive");
    Ok(table)
}

/// Load every archive in `dir` and concatenate them into one record set, in
/// path order. The first archive fixes the header; any later archive with a
/// different header aborts the load.
#[instrument(level = "info", skip(dir), fields(dir = %dir.display()))]
pub fn load_dir(dir: &Path) -> Result<(RawTable, usize), DataReadError> {
    let archives = discover_archives(dir)?;
    info!("{} archives found", archives.len());

    let mut unified = RawTable::default();
    let mut first: Option<&PathBuf> = None;

    for path in &archives {
        let table = load_archive(path)?;
        match first {
            None => first = Some(path),
            Some(first_path) if table.headers != unified.headers => {
                return Err(DataReadError::SchemaMismatch {
                    path: path.clone(),
                    expected_from: first_path.clone(),
                });
            }
            Some(_) => {}
        }
        unified.append(table);
    }

    Ok((unified, archives.len()))
}

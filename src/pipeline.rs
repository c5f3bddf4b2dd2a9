// src/pipeline.rs

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{error, info, instrument};

use crate::{config::Config, load, transform, write};

/// What a run did, for the log line at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub archives: usize,
    pub rows: usize,
    pub written: Vec<(&'static str, usize)>,
}

/// Load every archive under `config.input_dir`, split the rows into client,
/// campaign and economics records, and write the three CSV files under
/// `config.output_dir`.
///
/// A read failure aborts before anything is written.
#[instrument(level = "info", skip(config), fields(input = %config.input_dir.display()))]
pub fn run(config: &Config) -> Result<RunSummary> {
    let start = Instant::now();

    let (table, archives) = load::load_dir(&config.input_dir).map_err(|e| {
        error!(path = ?e.path(), "load failed: {}", e);
        e
    })?;
    info!(archives, rows = table.len(), "loaded input");

    let outputs = transform::split_records(&table, config.contact_year);

    let written = write::write_outputs(&config.output_dir, &outputs).with_context(|| {
        format!("writing outputs to {}", config.output_dir.display())
    })?;

    info!(elapsed = ?start.elapsed(), "run complete");
    Ok(RunSummary {
        archives,
        rows: table.len(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataReadError;
    use crate::test_support::{init_test_logging, write_zip, HEADER};
    use anyhow::Result;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> Result<(TempDir, Config)> {
        init_test_logging();
        let tmp = TempDir::new()?;
        let cfg = Config::rooted_at(tmp.path());
        fs::create_dir_all(&cfg.input_dir)?;
        Ok((tmp, cfg))
    }

    fn read_lines(cfg: &Config, name: &str) -> Result<Vec<String>> {
        Ok(fs::read_to_string(cfg.output_dir.join(name))?
            .lines()
            .map(str::to_string)
            .collect())
    }

    #[test]
    fn no_archives_gives_header_only_outputs() -> Result<()> {
        let (_tmp, cfg) = setup()?;

        let summary = run(&cfg)?;
        assert_eq!(summary.archives, 0);
        assert_eq!(summary.rows, 0);

        assert_eq!(
            read_lines(&cfg, "client.csv")?,
            vec!["client_id,age,job,marital,education,credit_default,mortgage"]
        );
        assert_eq!(
            read_lines(&cfg, "campaign.csv")?,
            vec![
                "client_id,number_contacts,contact_duration,previous_campaign_contacts,\
                 previous_outcome,campaign_outcome,last_contact_date"
            ]
        );
        assert_eq!(
            read_lines(&cfg, "economics.csv")?,
            vec!["client_id,cons_price_idx,euribor_three_months"]
        );
        Ok(())
    }

    #[test]
    fn missing_input_dir_behaves_like_empty() -> Result<()> {
        init_test_logging();
        let tmp = TempDir::new()?;
        let cfg = Config::rooted_at(tmp.path());

        let summary = run(&cfg)?;
        assert_eq!(summary.rows, 0);
        assert!(cfg.output_dir.join("client.csv").exists());
        Ok(())
    }

    #[test]
    fn two_archives_are_unioned_and_split() -> Result<()> {
        let (_tmp, cfg) = setup()?;
        write_zip(
            &cfg.input_dir.join("bank-marketing-1.csv.zip"),
            "bank-marketing-1.csv",
            &format!(
                "{HEADER}\n\
                 0,56,admin.-test,married,unknown,yes,no,1,261,0,nonexistent,no,15,may,93.994,4.857\n\
                 1,57,services,married,high.school,unknown,no,1,149,0,nonexistent,no,31,feb,93.994,4.857\n"
            ),
        )?;
        write_zip(
            &cfg.input_dir.join("bank-marketing-2.csv.zip"),
            "bank-marketing-2.csv",
            &format!(
                "{HEADER}\n\
                 2,37,blue-collar,single,basic.9y,no,YES,3,226,2,SUCCESS,Yes,8,aug,92.201,0.884\n"
            ),
        )?;

        let summary = run(&cfg)?;
        assert_eq!(summary.archives, 2);
        assert_eq!(summary.rows, 3);
        assert_eq!(
            summary.written,
            vec![("client.csv", 3), ("campaign.csv", 3), ("economics.csv", 3)]
        );

        assert_eq!(
            read_lines(&cfg, "client.csv")?[1..],
            [
                "0,56,admin_test,married,,1,0",
                "1,57,services,married,high_school,0,0",
                "2,37,blue_collar,single,basic_9y,0,1",
            ]
        );
        assert_eq!(
            read_lines(&cfg, "campaign.csv")?[1..],
            [
                "0,1,261,0,0,0,2022-05-15",
                "1,1,149,0,0,0,",
                "2,3,226,2,1,1,2022-08-08",
            ]
        );
        assert_eq!(
            read_lines(&cfg, "economics.csv")?[1..],
            ["0,93.994,4.857", "1,93.994,4.857", "2,92.201,0.884"]
        );
        Ok(())
    }

    #[test]
    fn rerun_is_deterministic() -> Result<()> {
        let (_tmp, cfg) = setup()?;
        write_zip(
            &cfg.input_dir.join("a.zip"),
            "a.csv",
            &format!(
                "{HEADER}\n9,30,technician,divorced,professional.course,no,yes,2,90,0,failure,no,1,jul,93.918,4.96\n"
            ),
        )?;

        run(&cfg)?;
        let first = fs::read_to_string(cfg.output_dir.join("campaign.csv"))?;
        run(&cfg)?;
        let second = fs::read_to_string(cfg.output_dir.join("campaign.csv"))?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn read_error_writes_nothing() -> Result<()> {
        let (_tmp, cfg) = setup()?;
        write_zip(
            &cfg.input_dir.join("good.zip"),
            "good.csv",
            &format!(
                "{HEADER}\n9,30,technician,divorced,basic.6y,no,yes,2,90,0,failure,no,1,jul,93.918,4.96\n"
            ),
        )?;
        fs::write(cfg.input_dir.join("zz-bad.zip"), b"PK garbage")?;

        let err = run(&cfg).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<DataReadError>(),
                Some(DataReadError::Archive { .. })
            ),
            "{err:#}"
        );
        assert!(!cfg.output_dir.exists());
        Ok(())
    }
}

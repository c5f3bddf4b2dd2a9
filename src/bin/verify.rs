// src/bin/verify.rs
//
// Compare data-row counts: every input archive vs. each output file. Each
// output should carry exactly one row per input row.

use anyhow::{bail, Context, Result};
use campaign_split::{
    load::{discover_archives, load_archive},
    transform::{CampaignRecord, ClientRecord, EconomicsRecord, OutputRecord},
    write::count_csv_rows,
    Config,
};

fn main() -> Result<()> {
    let config = Config::default();
    println!("current dir = {:?}\n", std::env::current_dir()?);

    // 1) Count data rows in every input archive
    let archives = discover_archives(&config.input_dir)
        .with_context(|| format!("listing {}", config.input_dir.display()))?;
    let mut total_input = 0usize;
    for path in &archives {
        let rows = load_archive(path)?.len();
        println!("{: <40} {:>10}", path.display(), rows);
        total_input += rows;
    }

    // 2) Count data rows in each output file
    let mut outputs = Vec::new();
    for name in [
        ClientRecord::FILE_NAME,
        CampaignRecord::FILE_NAME,
        EconomicsRecord::FILE_NAME,
    ] {
        let path = config.output_dir.join(name);
        let rows = count_csv_rows(&path)
            .with_context(|| format!("counting rows in {}", path.display()))?;
        outputs.push((name, rows));
    }

    // 3) Print summary table
    //
    // delta = count(output) - count(input)
    println!("\n{: <25} {:>15} {:>15}", "File", "Rows", "Delta vs input");
    println!("{:-<57}", "");
    println!("{: <25} {:>15} {:>15}", "input archives", total_input, 0);
    let mut mismatched = 0;
    for (name, rows) in &outputs {
        let delta = *rows as isize - total_input as isize;
        if delta != 0 {
            mismatched += 1;
        }
        println!("{: <25} {:>15} {:>15}", name, rows, delta);
    }

    if mismatched > 0 {
        bail!("{} output files disagree with the input row count", mismatched);
    }
    Ok(())
}

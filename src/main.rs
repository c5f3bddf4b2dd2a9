use anyhow::Result;
use campaign_split::{run, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) load, split, write ───────────────────────────────────────
    let config = Config::default();
    info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        "configured dirs"
    );
    let summary = run(&config)?;

    // ─── 3) report ───────────────────────────────────────────────────
    for (file, rows) in &summary.written {
        info!("{} ← {} rows", file, rows);
    }
    info!(
        archives = summary.archives,
        rows = summary.rows,
        "all done"
    );
    Ok(())
}

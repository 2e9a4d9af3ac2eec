use anyhow::{Context, Result};
use pnr_status::config::{OutputConfig, OutputFormat};
use pnr_status::render::status_sheet;
use pnr_status::try_process_railway_pnr;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cfg = OutputConfig::from_env()?;

    // FILE argument, or stdin when absent / "-"
    let input = match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read booking at {}", path))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read booking from stdin")?;
            buf
        }
    };
    let raw: serde_json::Value = serde_json::from_str(&input).context("booking is not valid JSON")?;

    match try_process_railway_pnr(&raw) {
        Ok(report) => {
            tracing::info!(
                pnr = %report.pnr_formatted,
                passengers = report.summary.total_passengers,
                chart_prepared = report.chart_prepared,
                "processed booking"
            );
            match cfg.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
                OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print!("{}", status_sheet(&report)),
            }
            Ok(())
        }
        Err(e) => {
            tracing::warn!("invalid booking: {}", e);
            match cfg.format {
                OutputFormat::Text => println!("INVALID PNR RECORD"),
                _ => println!("null"),
            }
            if cfg.fail_on_invalid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

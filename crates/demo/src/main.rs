// File: crates/demo/src/main.rs
// Summary: Demo loads daily sales from CSV (or a sample week) and renders the line chart to PNG.

mod cli;
mod load;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sales_chart_core::{render_with_outcome, theme, ChartConfig, DateLabelFormat, Series};
use sales_chart_skia::SkiaSurface;

use crate::cli::Cli;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = ChartConfig::default()
        .with_padding(cli.padding)
        .with_grid_line_count(cli.grid_lines)
        .with_currency(cli.currency.clone())
        .with_locale(cli.locale.clone())
        .with_date_format(if cli.with_year { DateLabelFormat::DayMonthYear } else { DateLabelFormat::DayMonth })
        .with_zero_padded_dates(cli.zero_pad)
        .with_theme(theme::find(cli.theme.name()));
    config.validate().context("invalid chart options")?;

    let series = load_series(&cli)?;
    info!(points = series.len(), max = series.max_total(), "series ready");

    let mut surface = SkiaSurface::new(cli.width, cli.height)
        .with_context(|| format!("creating {}x{} surface", cli.width, cli.height))?;
    let outcome = render_with_outcome(&mut surface, &series, &config);
    surface
        .write_png(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(?outcome, output = %cli.output.display(), "wrote chart");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Upstream failures render as an empty chart unless `--strict` is set.
fn load_series(cli: &Cli) -> Result<Series> {
    let Some(path) = &cli.input else {
        return Ok(Series::from_daily_totals(sample_week()));
    };
    match load::load_sales_csv(path) {
        Ok(rows) => {
            info!(rows = rows.len(), input = %path.display(), "loaded sales");
            Ok(Series::aggregate_daily(rows))
        }
        Err(err) if !cli.strict => {
            error!(error = %format!("{err:#}"), "failed to load sales, drawing empty chart");
            Ok(Series::new())
        }
        Err(err) => Err(err.context(format!("failed to load '{}'", path.display()))),
    }
}

fn sample_week() -> Vec<(NaiveDate, f64)> {
    let totals = [1_250.0, 980.5, 1_730.0, 0.0, 2_410.25, 1_980.0, 2_120.0];
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .map(|start| start.iter_days().zip(totals).collect())
        .unwrap_or_default()
}

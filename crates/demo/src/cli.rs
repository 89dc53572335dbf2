// File: crates/demo/src/cli.rs
// Summary: Command line arguments for the demo renderer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sales_chart_core::types::{DEFAULT_GRID_LINE_COUNT, DEFAULT_PADDING, HEIGHT, WIDTH};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render daily sales totals as a PNG line chart", long_about = None)]
pub(crate) struct Cli {
    /// CSV with a date column and a total/amount column. Rows sharing a
    /// date are summed. Without it a built-in sample week is drawn.
    #[arg(short, long)]
    pub(crate) input: Option<PathBuf>,

    /// Where to write the PNG.
    #[arg(short, long, default_value = "target/out/sales_chart.png")]
    pub(crate) output: PathBuf,

    #[arg(long, default_value_t = WIDTH)]
    pub(crate) width: u32,

    #[arg(long, default_value_t = HEIGHT)]
    pub(crate) height: u32,

    /// Inset of the plotting area from each edge, in pixels.
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    pub(crate) padding: f32,

    /// Number of gridline intervals.
    #[arg(long = "grid-lines", default_value_t = DEFAULT_GRID_LINE_COUNT)]
    pub(crate) grid_lines: u32,

    #[arg(long, default_value = "$")]
    pub(crate) currency: String,

    /// Locale tag for thousands grouping (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    pub(crate) locale: String,

    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    pub(crate) theme: ThemeArg,

    /// Print dates as day/month/year.
    #[arg(long)]
    pub(crate) with_year: bool,

    /// Zero-pad day and month in date labels.
    #[arg(long)]
    pub(crate) zero_pad: bool,

    /// Fail on unreadable input instead of drawing an empty chart.
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
    Light,
    Dark,
    HighContrast,
}

impl ThemeArg {
    pub(crate) fn name(self) -> &'static str {
        match self {
            ThemeArg::Light => "light",
            ThemeArg::Dark => "dark",
            ThemeArg::HighContrast => "high-contrast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_core_constants() {
        let cli = Cli::try_parse_from(["sales-chart-demo"]).expect("parse defaults");
        assert_eq!((cli.width, cli.height), (WIDTH, HEIGHT));
        assert_eq!(cli.padding, DEFAULT_PADDING);
        assert_eq!(cli.grid_lines, DEFAULT_GRID_LINE_COUNT);
        assert_eq!(cli.theme, ThemeArg::Light);
    }
}

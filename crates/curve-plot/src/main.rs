// File: crates/curve-plot/src/main.rs
// Summary: Evaluates the cubic interest curve and displays it in a window, or renders it to PNG.

mod plot;
mod window;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use curve_core::{CubicTransform, CurveParams};

/// Plot the reserve-deviation interest curve.
#[derive(Parser, Debug)]
#[command(name = "interest-plot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write the plot to this PNG instead of opening a window
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,

    /// TOML file with [curve] parameter overrides
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Color theme (light, dark, solarized-dark, solarized-light, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Plot width in pixels
    #[arg(long, default_value_t = plot::DEFAULT_WIDTH)]
    width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = plot::DEFAULT_HEIGHT)]
    height: u32,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let params = match &cli.config {
        Some(path) => CurveParams::from_file(path)
            .with_context(|| format!("failed to load curve config '{}'", path.display()))?,
        None => CurveParams::default(),
    };
    log::info!(
        "sampling {} points over [{}, {}]",
        params.samples,
        params.start,
        params.end
    );

    let curve = CubicTransform::new(params).evaluate();
    let chart = plot::build_chart(curve);
    let opts = plot::render_options(&cli.theme, cli.width, cli.height);

    match cli.png {
        Some(out) => {
            chart
                .render_to_png(&opts, &out)
                .with_context(|| format!("failed to write '{}'", out.display()))?;
            println!("Wrote {}", out.display());
        }
        None => window::show(chart, opts).context("plot window failed")?,
    }
    Ok(())
}

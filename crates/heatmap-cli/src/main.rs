// File: crates/heatmap-cli/src/main.rs
// Summary: Loads a monthly-variance JSON dataset and writes the heat map as SVG, PNG and/or HTML.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use heatmap_core::{FileSource, HeatMap, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
    Html,
    All,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a global temperature heat map")]
struct Args {
    /// Dataset JSON ({"baseTemperature": .., "monthlyVariance": [..]})
    #[arg(value_name = "INPUT", default_value = "data/sample-monthly-variance.json")]
    input: PathBuf,

    /// Directory the outputs are written to
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Which outputs to write
    #[arg(long, value_enum, default_value_t = Format::All)]
    format: Format,

    /// Path to render config TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset (overrides config)
    #[arg(long)]
    theme: Option<String>,

    /// Skip axis, tick and legend text
    #[arg(long, default_value_t = false)]
    no_labels: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut opts = match &args.config {
        Some(path) => RenderOptions::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => RenderOptions::default(),
    };
    if let Some(theme) = &args.theme {
        opts.theme = theme.clone();
    }
    if args.no_labels {
        opts.draw_labels = false;
    }
    if opts.theme().name != opts.theme.to_ascii_lowercase() {
        warn!(requested = %opts.theme, "unknown theme, using light");
    }

    info!(input = %args.input.display(), "loading dataset");
    let heatmap = HeatMap::from_source(FileSource::new(&args.input), opts)
        .with_context(|| format!("failed to load dataset '{}'", args.input.display()))?;

    let ds = heatmap.dataset();
    let scales = heatmap.scales();
    info!(
        records = ds.len(),
        years = scales.num_years,
        base = ds.base_temperature,
        "dataset covers {}..={}",
        scales.min_year,
        scales.max_year
    );
    if let Some((lo, hi)) = ds.variance_range() {
        info!("variance range: [{:.3}, {:.3}]", lo, hi);
    }

    let stem = args.input.file_stem().and_then(|s| s.to_str()).unwrap_or("heatmap");
    let wants = |f: Format| args.format == f || args.format == Format::All;

    if wants(Format::Svg) {
        let out = out_path(&args.out_dir, stem, "svg");
        heatmap.render_to_svg(&out).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }
    if wants(Format::Png) {
        let out = out_path(&args.out_dir, stem, "png");
        heatmap.render_to_png(&out)?;
        println!("Wrote {}", out.display());
    }
    if wants(Format::Html) {
        let out = out_path(&args.out_dir, stem, "html");
        heatmap.render_to_html_file(&out).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Output file name like target/out/heatmap_<stem>.<ext>
fn out_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    dir.join(format!("heatmap_{stem}.{ext}"))
}

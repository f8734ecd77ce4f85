use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use distinct_palette::io::{format_plain, read_colour_list, Report};
use distinct_palette::{candidate_srgb_grid, pick_palette, PickOptions};

#[derive(Parser)]
#[command(name = "distinct-palette")]
#[command(about = "Pick the most perceptually distinct colours from a palette")]
struct Cli {
    /// Candidate colours as hex codes (e.g. "#FF0000")
    colours: Vec<String>,

    /// Read candidate colours from a file (whitespace or comma separated, `//` comments)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Add the built-in 216 colour sRGB grid to the candidates
    #[arg(long)]
    grid: bool,

    /// JSON file with pick options; flags given here take precedence
    #[arg(long)]
    options: Option<PathBuf>,

    /// Drop colours with HSL saturation below this (0-1)
    #[arg(long)]
    min_saturation: Option<f64>,

    /// Drop colours with HSL lightness above this (0-1)
    #[arg(long)]
    max_lightness: Option<f64>,

    /// Drop colours with HSL lightness below this (0-1)
    #[arg(long)]
    min_lightness: Option<f64>,

    /// Number of random subsets to draw [default: 10000]
    #[arg(short, long)]
    repetitions: Option<usize>,

    /// Colours per palette [default: half the candidates, rounded up]
    #[arg(short = 'k', long)]
    size: Option<usize>,

    /// Number of palettes to return [default: 1]
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report instead of plain hex codes
    #[arg(long)]
    json: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn pick_options(&self) -> anyhow::Result<PickOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading options file {}", path.display()))?;
                PickOptions::from_json(&text)
                    .with_context(|| format!("parsing options file {}", path.display()))?
            }
            None => PickOptions::default(),
        };

        if let Some(v) = self.min_saturation {
            options.min_saturation = Some(v);
        }
        if let Some(v) = self.max_lightness {
            options.max_lightness = Some(v);
        }
        if let Some(v) = self.min_lightness {
            options.min_lightness = Some(v);
        }
        if let Some(v) = self.repetitions {
            options.repetitions = v;
        }
        if let Some(v) = self.size {
            options.subset_size = Some(v);
        }
        if let Some(v) = self.count {
            options.n_return = v;
        }
        if let Some(v) = self.seed {
            options.seed = Some(v);
        }
        Ok(options)
    }

    fn candidate_colours(&self) -> anyhow::Result<Vec<String>> {
        let mut colours = self.colours.clone();
        if let Some(path) = &self.input {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading colour list {}", path.display()))?;
            colours.extend(read_colour_list(&text));
        }
        if self.grid {
            colours.extend(candidate_srgb_grid());
        }
        if colours.is_empty() {
            anyhow::bail!("no candidate colours given (pass hex codes, --input or --grid)");
        }
        Ok(colours)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "distinct_palette=info"
    } else {
        "distinct_palette=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let options = cli.pick_options()?;
    let colours = cli.candidate_colours()?;
    tracing::info!(colours = colours.len(), ?options, "Starting pick");

    let outcome = pick_palette(&colours, &options).context("picking palette")?;

    if cli.json {
        println!("{}", Report::new(&outcome, &options).to_json()?);
    } else {
        println!("{}", format_plain(&outcome));
    }
    Ok(())
}

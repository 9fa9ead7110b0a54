//! Command line entry point: builds or parses a matrix and prints its four
//! fundamental subspaces.

use anyhow::{bail, Context};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use four_subspaces::display::matrix_table;
use four_subspaces::matrix::matrix_gen::MatrixGen;
use four_subspaces::random::{random_matrix, seeded_matrix};
use four_subspaces::rings::fraction::Fraction;
use four_subspaces::utils::parse_matrix;
use four_subspaces::{four_subspaces_with, SubspaceConfig};

const DEFAULT_MATRIX: &str = "1,2,2,3; 2,4,1,3; 3,6,1,4";

#[derive(Debug, Parser)]
#[command(name = "four-subspaces", version, about)]
struct Cli {
    /// Matrix rows separated by ';', entries by ',' (e.g. "1,2;3,4/5")
    #[arg(short, long, conflicts_with = "random")]
    matrix: Option<String>,

    /// Use a random integer matrix instead
    #[arg(long, requires_all = ["rows", "cols"])]
    random: bool,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Random entries are drawn from [-bound, bound]
    #[arg(long, default_value_t = 10)]
    bound: u32,

    /// Seed for reproducible random matrices
    #[arg(long)]
    seed: Option<u64>,

    /// Derive the range and null spaces concurrently
    #[arg(long)]
    parallel: bool,

    #[arg(long)]
    no_timings: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn input(&self) -> anyhow::Result<MatrixGen<Fraction>> {
        if self.random {
            let (Some(rows), Some(cols)) = (self.rows, self.cols) else {
                bail!("--random needs --rows and --cols");
            };
            let matrix = match self.seed {
                Some(seed) => seeded_matrix(rows, cols, self.bound, seed)?,
                None => random_matrix(rows, cols, self.bound, &mut rand::thread_rng())?,
            };
            return Ok(matrix);
        }

        let text = self.matrix.as_deref().unwrap_or(DEFAULT_MATRIX);
        parse_matrix(text).with_context(|| format!("could not parse matrix '{text}'"))
    }

    fn config(&self) -> SubspaceConfig {
        SubspaceConfig::default()
            .with_parallel(self.parallel)
            .with_timings(!self.no_timings)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let a = cli.input()?;
    let result = four_subspaces_with(&a, &cli.config()).context("subspace computation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("A =\n{}", matrix_table(&a));
        println!("{result}");
    }

    Ok(())
}

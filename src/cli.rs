//! Command-line interface for running named samplers

use crate::generator::Generator;
use crate::generator::boolean::boolean;
use crate::generator::boxed::BoxedGenerator;
use crate::samplers::color::color;
use crate::samplers::credit_card::{Network, credit_card};
use crate::samplers::dice::die;
use crate::samplers::ip_address::{ipv4, ipv6};
use crate::samplers::lat_long::lat_long;
use crate::samplers::password::password;
use crate::samplers::sudoku::{Board, Difficulty, sudoku};
use crate::samplers::uuid::uuid;
use crate::samplers::version_number::version_number;
use crate::source::lcg::Lcg;
use clap::{Parser, ValueEnum};
use rand::{RngCore, SeedableRng};
use std::fmt;
use std::io::{self, Write};

/// Command-line arguments for the sampling tool
#[derive(Parser)]
#[command(name = "randkit")]
#[command(version, about = "Sample random values from named generators")]
pub struct Cli {
    /// Sampler to run
    #[arg(value_enum)]
    pub sampler: Sampler,

    /// Seed for the deterministic source; omitted means the system source
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of values to emit, one per line
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

/// The samplers the tool can run by name
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Sampler {
    /// Heads or tails
    Coin,
    /// A single six-sided die
    Dice,
    /// Version-4-shaped UUID strings
    Uuid,
    /// Dotted-quad IPv4 addresses
    Ipv4,
    /// Colon-hex IPv6 addresses
    Ipv6,
    /// Random colors as #rrggbb
    Color,
    /// Latitude/longitude pairs
    LatLong,
    /// Semantic version numbers
    Version,
    /// Luhn-valid Visa numbers
    CreditCard,
    /// Grouped alphanumeric passwords
    Password,
    /// Medium-difficulty Sudoku boards
    Sudoku,
}

impl Sampler {
    /// The rendered-to-text pipeline behind each name
    fn generator(self) -> BoxedGenerator<String> {
        match self {
            Self::Coin => boolean()
                .map(|flip| {
                    let face = if flip { "heads" } else { "tails" };
                    face.to_owned()
                })
                .boxed(),
            Self::Dice => die().map(|roll| roll.to_string()).boxed(),
            Self::Uuid => uuid(),
            Self::Ipv4 => ipv4(),
            Self::Ipv6 => ipv6(),
            Self::Color => color(1.0).map(|value| value.to_hex()).boxed(),
            Self::LatLong => lat_long()
                .map(|(latitude, longitude)| format!("{latitude:.6},{longitude:.6}"))
                .boxed(),
            Self::Version => version_number(),
            Self::CreditCard => credit_card(Network::Visa),
            Self::Password => password(),
            Self::Sudoku => sudoku(Difficulty::Medium).map(render_board).boxed(),
        }
    }
}

/// One row per line, removed cells rendered as dots
fn render_board(board: Board) -> String {
    board
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| {
                    if cell == 0 {
                        ".".to_owned()
                    } else {
                        cell.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors surfaced by the command-line tool
#[derive(Debug)]
pub enum CliError {
    /// Writing sampled values to stdout failed
    Output(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output(source) => write!(f, "Failed to write output: {source}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output(source) => Some(source),
        }
    }
}

/// Convenience type alias for CLI results
pub type Result<T> = std::result::Result<T, CliError>;

/// Runs the selected sampler against the selected source
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Emit the requested number of samples, one per line
    ///
    /// # Errors
    ///
    /// Returns an error when writing to stdout fails.
    pub fn run(&self) -> Result<()> {
        let generator = self.cli.sampler.generator();
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self.cli.seed {
            Some(seed) => {
                let mut source = Lcg::seed_from_u64(seed);
                self.emit(&generator, &mut source, &mut handle)
            }
            None => {
                let mut source = rand::rng();
                self.emit(&generator, &mut source, &mut handle)
            }
        }
    }

    fn emit(
        &self,
        generator: &BoxedGenerator<String>,
        source: &mut dyn RngCore,
        out: &mut impl Write,
    ) -> Result<()> {
        for _ in 0..self.cli.count {
            writeln!(out, "{}", generator.run(source)).map_err(CliError::Output)?;
        }
        Ok(())
    }
}

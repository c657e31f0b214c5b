//! valerr CLI

mod measurement;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use ve_value::{ValueError, ValueErrorF64};

use crate::measurement::parse_measurement;

#[derive(Parser)]
#[command(name = "valerr")]
#[command(about = "valerr - values with statistical and systematic uncertainty")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Digits after the decimal point in the printed result
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Print the result in scientific notation
    #[arg(long, global = true)]
    scientific: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a function to one measurement
    Eval {
        /// Function to apply
        function: Function,

        /// Measurement as VALUE[,STAT[,SYST]]
        #[arg(value_parser = parse_measurement, allow_hyphen_values = true)]
        x: ValueErrorF64,

        /// Exact exponent for `pow` (computes X^K)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "base")]
        exponent: Option<f64>,

        /// Exact base for `pow` (computes K^X)
        #[arg(long, allow_hyphen_values = true)]
        base: Option<f64>,
    },

    /// Combine two measurements with a binary operation
    Combine {
        /// Operation
        op: Operation,

        /// Left operand as VALUE[,STAT[,SYST]]
        #[arg(value_parser = parse_measurement, allow_hyphen_values = true)]
        a: ValueErrorF64,

        /// Right operand as VALUE[,STAT[,SYST]]; a bare VALUE is exact
        #[arg(value_parser = parse_measurement, allow_hyphen_values = true)]
        b: ValueErrorF64,
    },

    /// Sum any number of measurements
    Sum {
        /// Measurements as VALUE[,STAT[,SYST]]
        #[arg(value_parser = parse_measurement, allow_hyphen_values = true, required = true)]
        values: Vec<ValueErrorF64>,
    },

    /// Print version
    Version,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Function {
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Log,
    Log10,
    Sqrt,
    Pow,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the result line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(cli.log_level).into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Eval { function, x, exponent, base } => cmd_eval(function, x, exponent, base)?,
        Commands::Combine { op, a, b } => cmd_combine(op, a, b),
        Commands::Sum { values } => cmd_sum(&values),
        Commands::Version => {
            println!("valerr {}", ve_value::VERSION);
            return Ok(());
        }
    };

    tracing::info!(
        value = result.value(),
        stat_error = result.stat_error(),
        syst_error = result.syst_error(),
        "propagation complete"
    );
    println!("{}", render(&result, cli.precision, cli.scientific));
    Ok(())
}

fn cmd_eval(
    function: Function,
    x: ValueErrorF64,
    exponent: Option<f64>,
    base: Option<f64>,
) -> Result<ValueErrorF64> {
    tracing::debug!(?function, %x, ?exponent, ?base, "eval");

    if !matches!(function, Function::Pow) && (exponent.is_some() || base.is_some()) {
        bail!("--exponent/--base only apply to `pow`");
    }

    let r = match function {
        Function::Sin => x.sin(),
        Function::Cos => x.cos(),
        Function::Tan => x.tan(),
        Function::Sinh => x.sinh(),
        Function::Cosh => x.cosh(),
        Function::Tanh => x.tanh(),
        Function::Exp => x.exp(),
        Function::Log => x.ln(),
        Function::Log10 => x.log10(),
        Function::Sqrt => x.sqrt(),
        Function::Pow => match (exponent, base) {
            (Some(k), None) => x.powf(k),
            (None, Some(k)) => ValueError::pow_base(k, x),
            _ => bail!("`pow` needs exactly one of --exponent or --base"),
        },
    };

    if !r.is_finite() {
        tracing::warn!(?function, %x, "result is not finite (input outside the function's domain?)");
    }
    Ok(r)
}

fn cmd_combine(op: Operation, a: ValueErrorF64, b: ValueErrorF64) -> ValueErrorF64 {
    tracing::debug!(?op, %a, %b, "combine");

    let r = match op {
        Operation::Add => a + b,
        Operation::Sub => a - b,
        Operation::Mul => a * b,
        Operation::Div => a / b,
        Operation::Pow => a.pow(b),
    };

    if !r.is_finite() {
        tracing::warn!(?op, %a, %b, "result is not finite");
    }
    r
}

fn cmd_sum(values: &[ValueErrorF64]) -> ValueErrorF64 {
    tracing::debug!(n = values.len(), "sum");
    values.iter().copied().sum()
}

fn render(z: &ValueErrorF64, precision: Option<usize>, scientific: bool) -> String {
    match (scientific, precision) {
        (false, None) => format!("{z}"),
        (false, Some(p)) => format!("{z:.p$}"),
        (true, None) => format!("{z:e}"),
        (true, Some(p)) => format!("{z:.p$e}"),
    }
}

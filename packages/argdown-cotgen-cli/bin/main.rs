use anyhow::{bail, Context};
use argdown_cotgen::{Config, CotGenerator, PipeType};
use clap::Parser;
use std::io::{self, Read};

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = Options::parse();

    let pipe_type: PipeType = opts
        .pipe_type
        .parse()
        .with_context(|| format!("unrecognised pipe type '{}'", opts.pipe_type))?;

    if !(0.0..=1.0).contains(&opts.p_abort) {
        bail!("--p-abort must lie in [0, 1], got {}", opts.p_abort);
    }

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .with_context(|| "failed to read Argdown source from stdin")?;

    let config = Config {
        pipe_type,
        p_abort: opts.p_abort,
        seed: opts.seed,
        ..Config::new(pipe_type)
    };

    let generator = CotGenerator::new(config).with_context(|| "invalid configuration")?;
    let trace = generator
        .call(&input)
        .with_context(|| "failed to generate a chain-of-thought reconstruction")?;

    println!("{trace}");
    Ok(())
}

/// Generates a chain-of-thought reconstruction trace for an Argdown document read from stdin.
#[derive(Parser, Debug)]
struct Options {
    /// Which reconstruction strategy to run (e.g. `map_by_rank`, `argument_by_rank`)
    #[arg(short, long)]
    pipe_type: String,
    /// Probability in [0, 1] that a non-first step is perturbed by the abortion hook
    #[arg(long, default_value_t = 0.0)]
    p_abort: f64,
    /// Seeds the pseudorandom generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use itertools::Itertools;
use rref::real_matrix::{
    parse::{parse_matrix, parse_vector},
    reduced_row_echelon_with_tolerance, Tolerance,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File holding the matrix, one row per line. Read from stdin if omitted.
    #[arg(short, long)]
    pub matrix: Option<PathBuf>,

    /// Right-hand side carried through the same row operations, e.g. "3,5".
    #[arg(short, long)]
    pub rhs: Option<String>,

    #[arg(short, long, default_value_t = Tolerance::DEFAULT)]
    pub tolerance: f64,
}

fn read_matrix_source(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading matrix from stdin")?;
            Ok(input)
        }
    }
}

fn run_reduction(args: &Args) -> Result<()> {
    let matrix = parse_matrix(&read_matrix_source(args.matrix.as_ref())?)
        .context("parsing matrix")?;
    let rhs = args
        .rhs
        .as_deref()
        .map(parse_vector)
        .transpose()
        .context("parsing right-hand side")?;
    let tolerance = Tolerance::new(args.tolerance)?;
    let reduction = reduced_row_echelon_with_tolerance(&matrix, rhs.as_deref(), tolerance)
        .context("reducing matrix")?;
    println!("{}", reduction.matrix);
    if let Some(rhs) = reduction.rhs {
        println!("b = [{}]", rhs.iter().join(", "));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_reduction(&args) {
        eprintln!("ran into reduction error: {err:?}");
        process::exit(1)
    }
}

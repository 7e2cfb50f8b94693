use std::{fs, process::ExitCode};

use clap::Parser;
use plotexpr::{Expression, parse_expression};
use tracing_subscriber::EnvFilter;

/// plotexpr parses formulas in `x` and tabulates their values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells plotexpr to read formulas from a file, one per line, instead of
    /// taking a single formula.
    #[arg(short, long)]
    file: bool,

    /// Only print the canonical form of each formula.
    #[arg(short, long)]
    canonical: bool,

    /// First sampled value of `x`.
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    from: f64,

    /// Last sampled value of `x`.
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    to: f64,

    /// Number of intervals between `--from` and `--to`.
    #[arg(short, long, default_value_t = 10)]
    steps: u32,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    if args.file {
        let script = match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        };
        return run_file(&script);
    }

    match parse_expression(&args.contents) {
        Ok(expr) if args.canonical => println!("{expr}"),
        Ok(expr) => print_table(&expr, &args),
        Err(e) => {
            eprintln!("{}", e.show(&args.contents));
            return ExitCode::FAILURE;
        },
    }

    ExitCode::SUCCESS
}

/// Parses every non-blank line independently, printing the canonical form or
/// the error of each one.
fn run_file(script: &str) -> ExitCode {
    let mut failures = 0usize;

    for (index, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_expression(line) {
            Ok(expr) => println!("{}: {expr}", index + 1),
            Err(e) => {
                failures += 1;
                eprintln!("line {}:\n{}", index + 1, e.show(line));
            },
        }
    }

    tracing::debug!(failures, "finished formula file");

    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn print_table(expr: &Expression, args: &Args) {
    println!("# {expr}");
    for (x, y) in expr.sample(args.from, args.to, args.steps) {
        println!("{x}\t{y}");
    }
}

//! Command-line demonstration of the 8-bit tapered-format codec.
//!
//! Encodes each float given on the command line (or a fixed built-in
//! sample list) and prints the raw byte in hexadecimal together with
//! the value recovered by decoding it again.  The codec itself lives
//! in the `posit8` crate and performs no reporting of its own.

use std::error::Error;

use clap::Parser;
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use posit8::prelude::*;

/// Values the harness converts when none are given on the command
/// line; these exercise both reserved patterns, both signs, and both
/// regime directions.
const SAMPLES: [f32; 6] = [0.0, 1.0, 2.0, 0.5, -1.0, f32::NAN];

#[derive(Parser)]
#[command(
    name = "posit8-convert",
    about = "Convert floats to and from the 8-bit tapered number format"
)]
struct Cli {
    /// Floating-point values to convert ("NaN" and "inf" are accepted)
    #[arg(value_name = "FLOAT")]
    values: Vec<f32>,

    /// Print the decode of every one of the 256 byte patterns instead
    /// of converting floats
    #[arg(long)]
    table: bool,
}

fn print_conversion(x: f32) {
    let p = Posit8::from(x);
    let recovered = f32::from(p);
    println!("Float: {x} -> Posit8: {p} -> Recovered: {recovered}");
}

fn print_table() {
    // Walk the byte patterns in value order, which for this encoding
    // is signed-byte order of the raw bits.
    let mut codes: Vec<Posit8> = (0..=u8::MAX).map(Posit8::from_bits).collect();
    codes.sort();
    for p in codes {
        if p.is_zero() {
            println!("{p}  zero");
        } else if p.is_nar() {
            println!("{p}  NaR");
        } else {
            let d = p.unpack();
            println!(
                "{p}  sign={} regime={:+} fraction={:>3}/128  value={}",
                if d.sign { '-' } else { '+' },
                d.regime,
                d.fraction,
                f32::from(p),
            );
        }
    }
}

fn run_converter() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // See
    // https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            return Err(Box::new(e));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    if cli.table {
        if !cli.values.is_empty() {
            event!(
                Level::WARN,
                "--table ignores the {} value(s) given on the command line",
                cli.values.len()
            );
        }
        print_table();
        return Ok(());
    }

    if cli.values.is_empty() {
        event!(
            Level::INFO,
            "No values given, converting the built-in sample list"
        );
        for x in SAMPLES {
            print_conversion(x);
        }
    } else {
        for x in cli.values {
            print_conversion(x);
        }
    }
    Ok(())
}

fn main() {
    match run_converter() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
